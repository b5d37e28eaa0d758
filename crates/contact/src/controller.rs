use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicBool, Ordering},
};

use stereotypos_notification::{NotificationPresenter, NotificationSurface};

use crate::{
    ContactConfig, ContactRequest, Destination, FormSurface, FormValues, LinkTarget, Messages,
    Result, Strategy, SubmitError, Submitted, ValidationError, link, message,
};

/// Drives one contact form: validation, the configured strategy and the
/// feedback shown to the visitor.
///
/// Every error returned by [`FormController::handle_submit`] has already been
/// surfaced through the presenter, callers only log it.
pub struct FormController<F, N, T> {
    surface: F,
    presenter: NotificationPresenter<N>,
    transport: T,
    config: ContactConfig,
    messages: Messages,
    in_flight: AtomicBool,
    choice: Mutex<Option<String>>,
}

impl<F, N, T> FormController<F, N, T>
where
    F: FormSurface,
    N: NotificationSurface,
    T: crate::Transport,
{
    pub fn new(
        surface: F,
        presenter: NotificationPresenter<N>,
        transport: T,
        config: ContactConfig,
        messages: Messages,
    ) -> Self {
        Self {
            surface,
            presenter,
            transport,
            config,
            messages,
            in_flight: AtomicBool::new(false),
            choice: Mutex::new(None),
        }
    }

    pub fn surface(&self) -> &F {
        &self.surface
    }

    pub fn presenter(&self) -> &NotificationPresenter<N> {
        &self.presenter
    }

    pub fn strategy(&self) -> Strategy {
        self.config.strategy
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Message waiting in the choice modal, if it is open.
    pub fn pending_choice(&self) -> Option<String> {
        self.choice().clone()
    }

    #[tracing::instrument(skip_all, fields(strategy = %self.config.strategy))]
    pub async fn handle_submit(&self, form: &FormValues) -> Result<Submitted> {
        if self.is_pending() {
            tracing::debug!("Submission ignored, previous one still pending");
            return Err(SubmitError::InFlight);
        }

        let request = match ContactRequest::from_form(form) {
            Ok(request) => request,
            Err(err) => {
                let text = match err {
                    ValidationError::MissingFields { .. } => &self.messages.missing_fields,
                    ValidationError::InvalidEmail => &self.messages.invalid_email,
                };
                self.presenter.error(text.to_owned());
                tracing::info!(error = %err, "Contact form rejected");

                return Err(err.into());
            }
        };

        match self.config.strategy {
            Strategy::RemoteFirst => self.submit_remote(&request).await,
            Strategy::DeferredChoice => Ok(self.offer_choice(&request)),
            Strategy::DirectWhatsapp => {
                let url = self.whatsapp_link(&message::choice_message(&request));
                self.surface.open(&url, LinkTarget::Blank);
                self.surface.reset();
                tracing::info!("Contact request handed off to WhatsApp");

                Ok(Submitted::HandedOff { url })
            }
        }
    }

    async fn submit_remote(&self, request: &ContactRequest) -> Result<Submitted> {
        let Some(_pending) = PendingSubmit::begin(
            &self.in_flight,
            &self.surface,
            &self.messages.pending_label,
        ) else {
            return Err(SubmitError::InFlight);
        };

        match self.transport.submit(request).await {
            Ok(()) => {
                self.presenter.success(self.messages.sent.to_owned());
                self.surface.reset();
                tracing::info!("Contact request sent");

                Ok(Submitted::Sent)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Contact request failed, handing off to mail client");
                let url = link::mailto(
                    &self.config.fallback_email,
                    &message::fallback_subject(&self.messages, request),
                    &message::fallback_body(request),
                );
                self.surface.open(&url, LinkTarget::Current);
                self.presenter.error(self.messages.send_failed.to_owned());

                Err(err.into())
            }
        }
    }

    fn offer_choice(&self, request: &ContactRequest) -> Submitted {
        let text = message::choice_message(request);
        self.surface.show_choice(&text);
        *self.choice() = Some(text);

        Submitted::AwaitingChoice
    }

    /// Sends the waiting message to `destination`, closes the modal and
    /// resets the form. Returns the opened link, `None` when no modal is open.
    pub fn choose(&self, destination: Destination) -> Option<String> {
        let text = self.choice().take()?;

        let (url, target) = match destination {
            Destination::Whatsapp => (self.whatsapp_link(&text), LinkTarget::Blank),
            Destination::Email => (
                link::mailto(&self.config.choice_email, &self.messages.choice_subject, &text),
                LinkTarget::Current,
            ),
        };

        self.surface.open(&url, target);
        self.surface.hide_choice();
        self.surface.reset();
        tracing::info!(%destination, "Contact request handed off");

        Some(url)
    }

    /// Close action of the modal, the form keeps its values.
    pub fn close_choice(&self) -> bool {
        let was_open = self.choice().take().is_some();
        self.surface.hide_choice();

        was_open
    }

    fn whatsapp_link(&self, text: &str) -> String {
        link::whatsapp(
            &self.config.whatsapp_domain,
            &self.config.whatsapp_phone,
            text,
        )
    }

    fn choice(&self) -> MutexGuard<'_, Option<String>> {
        self.choice.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Submit control in its pending state. Dropping it restores the label and
/// re-enables the control, also when the submission future is dropped.
struct PendingSubmit<'a, F: FormSurface> {
    in_flight: &'a AtomicBool,
    surface: &'a F,
    label: String,
}

impl<'a, F: FormSurface> PendingSubmit<'a, F> {
    fn begin(in_flight: &'a AtomicBool, surface: &'a F, pending_label: &str) -> Option<Self> {
        in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        let label = surface.submit_label();
        surface.set_submit_enabled(false);
        surface.set_submit_label(pending_label);

        Some(Self {
            in_flight,
            surface,
            label,
        })
    }
}

impl<F: FormSurface> Drop for PendingSubmit<'_, F> {
    fn drop(&mut self) {
        self.surface.set_submit_label(&self.label);
        self.surface.set_submit_enabled(true);
        self.in_flight.store(false, Ordering::Release);
    }
}
