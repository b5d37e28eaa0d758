/// Browsing context a deep link is opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkTarget {
    /// Replace the current location, used for `mailto:`.
    Current,
    /// A new tab or window.
    Blank,
}

/// The parts of the page the contact flow touches: the form, its submit
/// control and the destination choice modal.
pub trait FormSurface: Send + Sync {
    fn submit_label(&self) -> String;

    fn set_submit_label(&self, label: &str);

    fn set_submit_enabled(&self, enabled: bool);

    /// Clears every form field.
    fn reset(&self);

    fn open(&self, url: &str, target: LinkTarget);

    /// Shows the modal with `message`. The page has a single modal, showing
    /// it again replaces its content.
    fn show_choice(&self, message: &str);

    fn hide_choice(&self);
}
