use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of unit categories a site registers with its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    Collections,
    Plugins,
    Shortcodes,
    Filters,
    Passthroughs,
    WatchTargets,
    TemplateLanguages,
}

impl UnitCategory {
    /// Processing order used by the composition driver.
    pub const ORDERED: [Self; 7] = [
        Self::Collections,
        Self::Plugins,
        Self::Shortcodes,
        Self::Filters,
        Self::Passthroughs,
        Self::WatchTargets,
        Self::TemplateLanguages,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Collections => "collections",
            Self::Plugins => "plugins",
            Self::Shortcodes => "shortcodes",
            Self::Filters => "filters",
            Self::Passthroughs => "passthroughs",
            Self::WatchTargets => "watch_targets",
            Self::TemplateLanguages => "template_languages",
        }
    }

    /// Heading used by the startup trace.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Collections => "Collections",
            Self::Plugins => "Plugins",
            Self::Shortcodes => "Shortcodes",
            Self::Filters => "Filters",
            Self::Passthroughs => "Passthroughs",
            Self::WatchTargets => "Watch targets",
            Self::TemplateLanguages => "Template languages",
        }
    }
}

impl fmt::Display for UnitCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
