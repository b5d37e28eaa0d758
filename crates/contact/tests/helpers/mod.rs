#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use stereotypos_contact::{
    ContactConfig, ContactRequest, FIELD_EMAIL, FIELD_EVENT_DATE, FIELD_EVENT_TYPE, FIELD_MESSAGE,
    FIELD_NAME, FIELD_PHONE, FormController, FormSurface, FormValues, LinkTarget, Messages,
    Strategy, TransmissionError, Transport,
};
use stereotypos_notification::{
    Kind, Notification, NotificationId, NotificationPresenter, NotificationSurface,
};
use tokio::sync::Notify;

pub const SUBMIT_LABEL: &str = "ENVIAR MENSAJE";

#[derive(Debug)]
pub struct FormState {
    pub label: String,
    pub enabled: bool,
    pub resets: usize,
    pub opened: Vec<(String, LinkTarget)>,
    pub modal: Option<String>,
    pub modal_shows: usize,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_owned(),
            enabled: true,
            resets: 0,
            opened: vec![],
            modal: None,
            modal_shows: 0,
        }
    }
}

#[derive(Clone, Default)]
pub struct RecordingForm(pub Arc<Mutex<FormState>>);

impl RecordingForm {
    pub fn label(&self) -> String {
        self.0.lock().unwrap().label.to_owned()
    }

    pub fn enabled(&self) -> bool {
        self.0.lock().unwrap().enabled
    }

    pub fn resets(&self) -> usize {
        self.0.lock().unwrap().resets
    }

    pub fn opened(&self) -> Vec<(String, LinkTarget)> {
        self.0.lock().unwrap().opened.clone()
    }

    pub fn modal(&self) -> Option<String> {
        self.0.lock().unwrap().modal.clone()
    }

    pub fn modal_shows(&self) -> usize {
        self.0.lock().unwrap().modal_shows
    }
}

impl FormSurface for RecordingForm {
    fn submit_label(&self) -> String {
        self.label()
    }

    fn set_submit_label(&self, label: &str) {
        self.0.lock().unwrap().label = label.to_owned();
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.0.lock().unwrap().enabled = enabled;
    }

    fn reset(&self) {
        self.0.lock().unwrap().resets += 1;
    }

    fn open(&self, url: &str, target: LinkTarget) {
        self.0.lock().unwrap().opened.push((url.to_owned(), target));
    }

    fn show_choice(&self, message: &str) {
        let mut state = self.0.lock().unwrap();
        state.modal = Some(message.to_owned());
        state.modal_shows += 1;
    }

    fn hide_choice(&self) {
        self.0.lock().unwrap().modal = None;
    }
}

#[derive(Clone, Default)]
pub struct RecordingNotifications {
    pub rendered: Arc<Mutex<Vec<Notification>>>,
    pub document: Arc<Mutex<Vec<Notification>>>,
}

impl RecordingNotifications {
    pub fn rendered(&self) -> Vec<(Kind, String)> {
        self.rendered
            .lock()
            .unwrap()
            .iter()
            .map(|n| (n.kind, n.message.to_owned()))
            .collect()
    }

    pub fn visible(&self) -> Vec<Notification> {
        self.document.lock().unwrap().clone()
    }
}

impl NotificationSurface for RecordingNotifications {
    fn render(&self, notification: &Notification) {
        self.rendered.lock().unwrap().push(notification.clone());
        self.document.lock().unwrap().push(notification.clone());
    }

    fn remove(&self, id: NotificationId) {
        self.document.lock().unwrap().retain(|n| n.id != id);
    }
}

/// What the submit control looked like while the request was on the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct SeenControl {
    pub label: String,
    pub enabled: bool,
}

#[derive(Clone, Default)]
pub struct MockTransport {
    pub fail_with: Option<u16>,
    pub gate: Option<Arc<Notify>>,
    pub form: Option<RecordingForm>,
    pub requests: Arc<Mutex<Vec<ContactRequest>>>,
    pub seen: Arc<Mutex<Vec<SeenControl>>>,
}

impl MockTransport {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn failing(status: u16) -> Self {
        Self {
            fail_with: Some(status),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<ContactRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn seen(&self) -> Vec<SeenControl> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn submit(&self, request: &ContactRequest) -> Result<(), TransmissionError> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(form) = &self.form {
            self.seen.lock().unwrap().push(SeenControl {
                label: form.label(),
                enabled: form.enabled(),
            });
        }

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        match self.fail_with {
            Some(status) => Err(TransmissionError::Status(status)),
            None => Ok(()),
        }
    }
}

pub type Controller = FormController<RecordingForm, RecordingNotifications, MockTransport>;

pub struct Harness {
    pub form: RecordingForm,
    pub notifications: RecordingNotifications,
    pub transport: MockTransport,
    pub controller: Controller,
}

pub fn setup(strategy: Strategy, mut transport: MockTransport) -> Harness {
    let form = RecordingForm::default();
    let notifications = RecordingNotifications::default();
    transport.form = Some(form.clone());

    let controller = FormController::new(
        form.clone(),
        NotificationPresenter::new(notifications.clone()),
        transport.clone(),
        ContactConfig {
            strategy,
            ..Default::default()
        },
        Messages::default(),
    );

    Harness {
        form,
        notifications,
        transport,
        controller,
    }
}

pub fn valid_form() -> FormValues {
    [
        (FIELD_NAME, "  Ana López "),
        (FIELD_EMAIL, "ana@banda.com"),
        (FIELD_PHONE, "+52 55 1234 5678"),
        (FIELD_EVENT_TYPE, "Boda"),
        (FIELD_EVENT_DATE, "2026-12-31"),
        (FIELD_MESSAGE, "Queremos banda para 200 personas & pista."),
    ]
    .into_iter()
    .collect()
}
