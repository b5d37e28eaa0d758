mod presenter;
mod types;

pub use presenter::*;
pub use types::*;

/// Where notification banners are drawn.
///
/// Implementations own the single notification slot of the page. The
/// presenter guarantees that `remove` is called for a banner before another
/// one is rendered, so a surface never holds more than one.
pub trait NotificationSurface: Send + Sync + 'static {
    fn render(&self, notification: &Notification);

    fn remove(&self, id: NotificationId);
}
