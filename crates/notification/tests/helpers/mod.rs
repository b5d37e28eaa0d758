use std::sync::{Arc, Mutex};

use stereotypos_notification::{Notification, NotificationId, NotificationSurface};

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCall {
    Render(NotificationId, String),
    Remove(NotificationId),
}

/// Records every call and keeps the banners currently in the document.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub calls: Arc<Mutex<Vec<SurfaceCall>>>,
    pub document: Arc<Mutex<Vec<Notification>>>,
}

#[allow(dead_code)]
impl RecordingSurface {
    pub fn banners(&self) -> Vec<Notification> {
        self.document.lock().unwrap().clone()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl NotificationSurface for RecordingSurface {
    fn render(&self, notification: &Notification) {
        self.calls.lock().unwrap().push(SurfaceCall::Render(
            notification.id,
            notification.message.to_owned(),
        ));
        self.document.lock().unwrap().push(notification.clone());
    }

    fn remove(&self, id: NotificationId) {
        self.calls.lock().unwrap().push(SurfaceCall::Remove(id));
        self.document.lock().unwrap().retain(|n| n.id != id);
    }
}
