use anyhow::Result;
use clap::{Parser, Subcommand};
use stereotypos::cli::{SubmitArgs, content, submit};

/// stereotypos - booking requests and page content for the band site
#[derive(Parser)]
#[command(name = "stereotypos")]
#[command(about = "Contact form and CMS content for the band website", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and deliver a contact request
    Submit(SubmitArgs),
    /// Fetch band info, services and social links from the CMS
    Content,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = stereotypos::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    stereotypos::observability::init_observability(
        "stereotypos",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Submit(args) => submit::run(config, args).await,
        Commands::Content => content::run(config).await,
    }
}
