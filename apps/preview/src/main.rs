use anyhow::Context;
use orrery::domain::config::SiteConfig;
use orrery::kernel::config::{DEFAULT_CONFIG, ENV_PREFIX, load_config};
use orrery_logger::Logger;
use orrery_preview::Preview;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Loaded before the logger exists: quiet mode comes from the config itself.
    let cfg: SiteConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).quiet(cfg.quiet).init()?;
    info!(
        file = DEFAULT_CONFIG,
        env_prefix = ENV_PREFIX,
        quiet = cfg.quiet,
        "Configuration loaded"
    );

    Preview::builder().config(cfg).build()?.run().await
}
