use crate::settings::{DirLayout, PreviewMiddleware, PreviewOptions, ReportingOptions};
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level site configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub dir: DirLayout,
    /// Formats the host understands without a registered template language.
    pub template_formats: Vec<String>,
    pub quiet: bool,
    pub reporting: ReportingOptions,
    pub preview: PreviewConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Local preview server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    pub address: IpAddr,
    pub port: u16,
    pub open: bool,
    /// Served with status 404 for every request that matches no output file.
    pub not_found_page: PathBuf,
}

impl PreviewConfig {
    /// The options record the host's preview server is configured with.
    #[must_use]
    pub fn options(&self) -> PreviewOptions {
        PreviewOptions {
            open: self.open,
            middleware: vec![PreviewMiddleware::NotFound { document: self.not_found_page.clone() }],
        }
    }
}

// --- Default ---

impl Default for SiteConfigInner {
    fn default() -> Self {
        Self {
            dir: DirLayout::default(),
            template_formats: ["njk", "md", "html", "11ty.js"].map(str::to_owned).to_vec(),
            quiet: true,
            reporting: ReportingOptions::default(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            open: true,
            not_found_page: PathBuf::from("public/404.html"),
        }
    }
}
