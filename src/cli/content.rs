use stereotypos_content::{ContentClient, load_page};

use crate::{Config, terminal::TerminalPage};

#[tracing::instrument(skip_all)]
pub async fn run(config: Config) -> anyhow::Result<()> {
    let client = ContentClient::new(&config.api.base_url, config.api.timeout())?;
    let report = load_page(&client, &TerminalPage).await;

    tracing::info!(
        band_info = report.band_info,
        services = report.services,
        social_media = report.social_media,
        "Page content loaded"
    );

    Ok(())
}
