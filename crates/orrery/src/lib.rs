//! Site facade.
//!
//! Holds the site's own unit definitions, one module per category, and re-exports the
//! domain and kernel crates. Keep this crate thin: units describe the site, the kernel
//! decides how they are registered.
//!
//! ## Usage
//! ```rust
//! use orrery::domain::config::SiteConfig;
//! use orrery::kernel::host::SiteBuilder;
//! use orrery::kernel::trace::NoopTrace;
//!
//! let config = SiteConfig::default();
//! let mut host = SiteBuilder::new();
//! let settings = orrery::configure(&mut host, &config, &mut NoopTrace).unwrap();
//! assert!(settings.recognizes("css"));
//! ```

mod args;
pub mod collections;
pub mod filters;
pub mod passthroughs;
pub mod plugins;
pub mod shortcodes;
pub mod template_languages;
pub mod watch_targets;

pub use orrery_domain as domain;
pub use orrery_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub use orrery_kernel::server::{NotFoundPage, PreviewError, preview_router};
}

use orrery_domain::config::SiteConfig;
use orrery_domain::settings::Settings;
use orrery_kernel::compose::{ComposeError, compose};
use orrery_kernel::host::ConfigHost;
use orrery_kernel::registry::UnitRegistry;
use orrery_kernel::trace::StartupTrace;

/// Assembles every unit of the site.
#[must_use]
pub fn registry(config: &SiteConfig) -> UnitRegistry {
    UnitRegistry {
        collections: collections::units(),
        plugins: plugins::units(),
        shortcodes: shortcodes::units(),
        filters: filters::units(),
        passthroughs: passthroughs::units(&config.dir.input),
        watch_targets: watch_targets::units(&config.dir.input),
        template_languages: template_languages::units(),
    }
}

/// Composes the site into `host`.
///
/// # Errors
/// Returns the first [`ComposeError`] raised while registering the site's units.
pub fn configure<H: ConfigHost>(
    host: &mut H,
    config: &SiteConfig,
    trace: &mut dyn StartupTrace,
) -> Result<Settings, ComposeError> {
    compose(registry(config), host, config, trace)
}
