//! # Orrery Preview
//!
//! Composes the site, then serves its output directory locally with the not-found
//! fallback page.
//!
//! ## Example
//! ```no_run
//! use orrery_preview::Preview;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Preview::builder().port(8081).build()?.run().await
//! }
//! ```

mod browser;

use anyhow::{Context, Result};
use axum::Router;
use axum_server::Handle;
use orrery::domain::config::SiteConfig;
use orrery::domain::settings::Settings;
use orrery::kernel::host::SiteBuilder;
use orrery::kernel::report::DirectoryReport;
use orrery::kernel::trace::{STARTUP_TARGET, TracingTrace};
use orrery::server::preview_router;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::signal;
use tracing::{error, info, warn};

/// A fluent builder for configuring and initializing the [`Preview`].
#[must_use = "builders do nothing unless you call .build()"]
#[derive(Debug, Default)]
pub struct PreviewBuilder {
    cfg: SiteConfig,
}

impl PreviewBuilder {
    pub fn config(mut self, cfg: SiteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.cfg.preview.port = port;
        self
    }

    /// Whether a browser tab is opened once the server listens.
    pub fn open(mut self, open: bool) -> Self {
        self.cfg.preview.open = open;
        self
    }

    /// Composes the site and prepares the router.
    ///
    /// # Process
    /// 1. Runs the composition pass against a fresh [`SiteBuilder`], tracing every
    ///    collection and plugin
    /// 2. Loads the not-found document configured on the host's preview server
    /// 3. Builds the static router over the output directory
    ///
    /// # Errors
    /// Returns an error if:
    /// * A unit fails to register (the server is never started)
    /// * The not-found document cannot be read
    pub fn build(self) -> Result<Preview> {
        let mut host = SiteBuilder::new();
        let settings = orrery::configure(&mut host, &self.cfg, &mut TracingTrace::new())
            .context("Site composition failed")?;

        let options = host.preview().cloned().unwrap_or_default();
        let router = preview_router(&settings.dir.output, &options)
            .context("Failed to prepare the preview router")?;

        info!(
            output = %settings.dir.output.display(),
            formats = settings.template_formats.len(),
            "Preview prepared"
        );

        Ok(Preview { cfg: self.cfg, settings, host, router, open: options.open })
    }
}

/// A composed site ready to be served.
#[must_use = "call .run().await to start the preview"]
#[derive(Debug)]
pub struct Preview {
    cfg: SiteConfig,
    settings: Settings,
    host: SiteBuilder,
    router: Router,
    open: bool,
}

impl Preview {
    pub fn builder() -> PreviewBuilder {
        PreviewBuilder::default()
    }

    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub const fn host(&self) -> &SiteBuilder {
        &self.host
    }

    /// Serves until Ctrl+C or SIGTERM.
    ///
    /// # Errors
    /// Returns an error if the server fails to bind to the configured address.
    pub async fn run(self) -> Result<()> {
        let address = SocketAddr::new(self.cfg.preview.address, self.cfg.preview.port);

        self.report();

        let handle = Handle::<SocketAddr>::new();
        let shutdown_handle = handle.clone();

        tokio::spawn(async move {
            if let Err(e) = shutdown_signal().await {
                error!("Error while waiting for shutdown signal: {e}");
                return;
            }
            info!("Shutdown signal received, stopping preview...");
            shutdown_handle.graceful_shutdown(Some(Duration::from_secs(5)));
        });

        if self.open {
            let listening = handle.clone();
            tokio::spawn(async move {
                let Some(bound) = listening.listening().await else {
                    return;
                };
                let url = browser::local_url(bound);
                if let Err(e) = browser::open(&url) {
                    warn!(url, "Could not open a browser: {e}");
                }
            });
        }

        info!(target: STARTUP_TARGET, "Serving preview on {}", browser::local_url(address));

        axum_server::bind(address)
            .handle(handle)
            .serve(self.router.into_make_service())
            .await
            .context("Preview server failed")?;

        info!("Preview shutdown complete");
        Ok(())
    }

    /// Logs the output directory report if the host has a reporter installed.
    fn report(&self) {
        let Some(options) = self.host.reporter() else {
            return;
        };

        match DirectoryReport::scan(&self.settings.dir.output, options, &HashMap::new()) {
            Ok(report) => report.emit(),
            Err(e) => warn!("Output report unavailable: {e}"),
        }
    }
}

/// Listens for shutdown signals (Ctrl+C, SIGTERM).
async fn shutdown_signal() -> Result<()> {
    let ctrl_c = async { signal::ctrl_c().await.context("Failed to install Ctrl+C handler") };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .context("Failed to install SIGTERM handler")?
            .recv()
            .await;
        Ok::<_, anyhow::Error>(())
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<()>>();

    tokio::select! {
        res = ctrl_c => {
            res.context("Ctrl+C signal received")?;
        },
        res = terminate => {
            res.context("SIGTERM signal received")?;
        },
    }

    Ok(())
}
