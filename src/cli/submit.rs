use clap::Args;
use stereotypos_contact::{
    FIELD_EMAIL, FIELD_EVENT_DATE, FIELD_EVENT_TYPE, FIELD_MESSAGE, FIELD_NAME, FIELD_PHONE,
    FormController, FormValues, HttpTransport, Strategy, Submitted,
};
use stereotypos_notification::NotificationPresenter;

use crate::{
    Config,
    terminal::{TerminalForm, TerminalNotifications, prompt_destination},
};

#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub event_type: String,
    #[arg(long, default_value = "")]
    pub event_date: String,
    #[arg(long, default_value = "")]
    pub message: String,
    /// Overrides contact.strategy from the configuration
    #[arg(long)]
    pub strategy: Option<Strategy>,
}

impl SubmitArgs {
    pub fn form_values(&self) -> FormValues {
        [
            (FIELD_NAME, &self.name),
            (FIELD_EMAIL, &self.email),
            (FIELD_PHONE, &self.phone),
            (FIELD_EVENT_TYPE, &self.event_type),
            (FIELD_EVENT_DATE, &self.event_date),
            (FIELD_MESSAGE, &self.message),
        ]
        .into_iter()
        .map(|(field, value)| (field, value.to_owned()))
        .collect()
    }
}

#[tracing::instrument(skip_all)]
pub async fn run(mut config: Config, args: SubmitArgs) -> anyhow::Result<()> {
    if let Some(strategy) = args.strategy {
        config.contact.strategy = strategy;
    }

    let presenter = NotificationPresenter::with_display(
        TerminalNotifications,
        config.notification.display(),
    );
    let transport = HttpTransport::new(&config.api.base_url, config.api.timeout())?;
    let controller = FormController::new(
        TerminalForm::default(),
        presenter,
        transport,
        config.contact,
        config.messages,
    );

    match controller.handle_submit(&args.form_values()).await {
        Ok(Submitted::AwaitingChoice) => {
            let stdin = std::io::stdin();
            match prompt_destination(stdin.lock(), std::io::stdout())? {
                Some(destination) => {
                    controller.choose(destination);
                }
                None => {
                    controller.close_choice();
                }
            }
        }
        Ok(submitted) => tracing::info!(?submitted, "Contact request done"),
        // Already shown to the visitor
        Err(err) => tracing::debug!(error = %err, "Contact request not delivered"),
    }

    Ok(())
}
