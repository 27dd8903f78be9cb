//! `marquee-browser` -- terminal client for the Marquee listing API.
//!
//! # Environment variables
//!
//! | Variable          | Required | Default                 | Description                |
//! |-------------------|----------|-------------------------|----------------------------|
//! | `CATALOG_API_URL` | no       | `http://localhost:4000` | Base URL of the listing API |
//! | `RUST_LOG`        | no       | `marquee_browser=warn`  | Log filter (logs go to stderr) |

use std::io::Write;

use marquee_browser::app;
use marquee_browser::client::CatalogClient;
use marquee_browser::command::HELP;
use marquee_browser::config::BrowserConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_browser=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BrowserConfig::from_env();
    tracing::info!(api_url = %config.api_url, "Starting marquee-browser");

    let client = CatalogClient::new(config.api_url);
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{HELP}")?;
    app::run(client, input, &mut stdout).await?;

    Ok(())
}
