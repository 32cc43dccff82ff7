//! Host build-system contract.
//!
//! The composition driver only ever talks to a [`ConfigHost`]. [`SiteBuilder`] is the
//! in-process implementation used by the preview app and the tests.

mod error;
mod site;

pub use crate::host::error::{HostError, HostErrorExt};
pub use crate::host::site::SiteBuilder;

use crate::unit::{CollectionBuilder, Filter, PathPattern, Shortcode, TemplateHandler};
use orrery_domain::settings::{PreviewOptions, ReportingOptions};

/// Registration surface of the host build system's configuration object.
///
/// The host owns the object; a composition pass borrows it mutably for the duration
/// of one call and never retains it.
pub trait ConfigHost {
    /// Registers a lazily evaluated collection.
    fn add_collection(&mut self, name: &str, builder: CollectionBuilder);

    fn add_shortcode(&mut self, name: &str, shortcode: Shortcode);

    fn add_filter(&mut self, name: &str, filter: Filter);

    /// Copies the path or glob verbatim to the output directory.
    fn add_passthrough_copy(&mut self, source: PathPattern);

    /// Triggers a rebuild when the path or glob changes.
    fn add_watch_target(&mut self, target: PathPattern);

    fn add_template_format(&mut self, name: &str);

    /// Attaches the handler that reads, compiles and renders `name` files.
    fn add_extension(&mut self, name: &str, handler: TemplateHandler);

    fn set_quiet_mode(&mut self, quiet: bool);

    /// Installs the build-output reporting add-on.
    fn add_reporter(&mut self, options: ReportingOptions);

    fn set_preview_server(&mut self, options: PreviewOptions);
}
