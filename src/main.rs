//! News digest — binary entrypoint.
//! One invocation fetches, formats and posts a single digest, then exits.

use news_digest_bot::config::{mask_token, Config};
use news_digest_bot::DigestJob;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("news_digest_bot=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op when absent.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = Config::from_env();
    // Safe diagnostics: channel + masked token only
    info!(
        channel = %config.channel,
        token = %mask_token(&config.token),
        "config loaded"
    );

    let outcome = DigestJob::from_config(config).run().await;
    info!(delivered = outcome.delivered, "news digest finished");
    Ok(())
}
