use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use common::config::{NEWS_API_KEY, OPENROUTER_API_KEY};
use common::{Config, Secrets};
use news_api::NewsApiClient;
use openrouter::OpenRouterClient;
use positive_news::{
    run_interactive, run_pass, Country, HeadlineCount, MarkdownPage, Options, Page, APP_TAGLINE,
    APP_TITLE,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Debug, Parser)]
#[command(name = "positive-news", version, about = APP_TAGLINE)]
struct Cli {
    /// Country to fetch top headlines for (in, us, gb, ca, au)
    #[arg(long, default_value = "in")]
    country: Country,

    /// How many headlines to check (3-15)
    #[arg(long, default_value = "8")]
    count: HeadlineCount,

    /// TOML file holding NEWS_API_KEY and OPENROUTER_API_KEY
    #[arg(long, default_value = "secrets.toml")]
    secrets: PathBuf,

    /// Run a single pass and exit instead of waiting for commands
    #[arg(long)]
    once: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let _ = dotenv::dotenv();
    let cli = Cli::parse();

    // Logs go to stderr so the page on stdout stays clean
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut page = MarkdownPage::new(std::io::stdout());
    page.title(APP_TITLE, APP_TAGLINE)?;

    let secrets = match Secrets::load(&cli.secrets) {
        Ok(secrets) => secrets,
        Err(e) => {
            page.error(&e.to_string())?;
            return Err(e.into());
        }
    };

    let config = match Config::from_env(&secrets) {
        Ok(config) => config,
        Err(e) => {
            page.error(&format!(
                "Missing API keys. Add {} and {} in {} (or env).",
                OPENROUTER_API_KEY,
                NEWS_API_KEY,
                cli.secrets.display()
            ))?;
            error!("Startup aborted: {}", e);
            return Err(e);
        }
    };

    let news = NewsApiClient::new(&config.news_api)?;
    let classifier = OpenRouterClient::new(&config.openrouter)?;

    let mut options = Options {
        country: cli.country,
        headline_count: cli.count,
    };

    if cli.once {
        let summary = run_pass(&news, &classifier, &mut page, &options).await?;
        info!("Showed {} of {} headlines", summary.shown, summary.fetched);
        return Ok(());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_interactive(stdin, &news, &classifier, &mut page, &mut options).await?;

    Ok(())
}
