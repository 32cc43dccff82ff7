#![allow(dead_code)]

use orrery_domain::category::UnitCategory;
use orrery_domain::settings::{PreviewOptions, ReportingOptions};
use orrery_kernel::host::ConfigHost;
use orrery_kernel::unit::{CollectionBuilder, Filter, PathPattern, Shortcode, TemplateHandler};

/// One call received by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCall {
    Collection(String),
    Shortcode(String),
    Filter(String),
    Passthrough(String),
    Watch(String),
    TemplateFormat(String),
    Extension(String),
    Quiet(bool),
    Reporter,
    Preview,
}

impl HostCall {
    pub const fn category(&self) -> Option<UnitCategory> {
        match self {
            Self::Collection(_) => Some(UnitCategory::Collections),
            Self::Shortcode(_) => Some(UnitCategory::Shortcodes),
            Self::Filter(_) => Some(UnitCategory::Filters),
            Self::Passthrough(_) => Some(UnitCategory::Passthroughs),
            Self::Watch(_) => Some(UnitCategory::WatchTargets),
            Self::TemplateFormat(_) | Self::Extension(_) => Some(UnitCategory::TemplateLanguages),
            Self::Quiet(_) | Self::Reporter | Self::Preview => None,
        }
    }
}

/// Host stub that only records the order of registration calls.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn in_category(&self, category: UnitCategory) -> Vec<&HostCall> {
        self.calls.iter().filter(|c| c.category() == Some(category)).collect()
    }
}

impl ConfigHost for RecordingHost {
    fn add_collection(&mut self, name: &str, _builder: CollectionBuilder) {
        self.calls.push(HostCall::Collection(name.to_owned()));
    }

    fn add_shortcode(&mut self, name: &str, _shortcode: Shortcode) {
        self.calls.push(HostCall::Shortcode(name.to_owned()));
    }

    fn add_filter(&mut self, name: &str, _filter: Filter) {
        self.calls.push(HostCall::Filter(name.to_owned()));
    }

    fn add_passthrough_copy(&mut self, source: PathPattern) {
        self.calls.push(HostCall::Passthrough(source.to_string()));
    }

    fn add_watch_target(&mut self, target: PathPattern) {
        self.calls.push(HostCall::Watch(target.to_string()));
    }

    fn add_template_format(&mut self, name: &str) {
        self.calls.push(HostCall::TemplateFormat(name.to_owned()));
    }

    fn add_extension(&mut self, name: &str, _handler: TemplateHandler) {
        self.calls.push(HostCall::Extension(name.to_owned()));
    }

    fn set_quiet_mode(&mut self, quiet: bool) {
        self.calls.push(HostCall::Quiet(quiet));
    }

    fn add_reporter(&mut self, _options: ReportingOptions) {
        self.calls.push(HostCall::Reporter);
    }

    fn set_preview_server(&mut self, _options: PreviewOptions) {
        self.calls.push(HostCall::Preview);
    }
}
