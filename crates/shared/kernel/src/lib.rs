//! Composition kernel.
//!
//! A site is described as a [`registry::UnitRegistry`] of named units in seven
//! categories. [`compose::compose`] registers them with a [`host::ConfigHost`] in a
//! fixed order and returns the [`orrery_domain::settings::Settings`] record.
//!
//! ```rust
//! use orrery_kernel::prelude::*;
//! use orrery_domain::config::SiteConfig;
//!
//! let registry = UnitRegistry {
//!     collections: Units::new().with("everything", unit::collection(|api| api.all())),
//!     ..UnitRegistry::default()
//! };
//!
//! let mut host = SiteBuilder::new();
//! let settings = compose(registry, &mut host, &SiteConfig::default(), &mut NoopTrace).unwrap();
//! assert!(settings.recognizes("md"));
//! assert_eq!(host.collection_names().collect::<Vec<_>>(), ["everything"]);
//! ```
pub mod compose;
pub mod config;
pub mod host;
pub mod registry;
pub mod report;
#[cfg(feature = "server")]
pub mod server;
pub mod trace;
pub mod unit;

pub use orrery_domain as domain;

pub mod prelude {
    pub use crate::compose::{ComposeError, compose};
    pub use crate::host::{ConfigHost, HostError, SiteBuilder};
    pub use crate::registry::{NamedUnit, UnitRegistry, Units};
    pub use crate::trace::{NoopTrace, RecordingTrace, StartupTrace, TracingTrace};
    pub use crate::unit::{self, Artifact, CollectionApi, PathPattern, TemplateHandler, UnitError};
}
