//! Named-unit registry.
//!
//! Every category is an insertion-ordered list of `(name, unit)` pairs. The registry
//! performs no validation and keeps duplicate names; what duplicates mean is up to
//! the host (the reference host lets the last registration win).

use crate::unit::{
    CollectionBuilder, Filter, PathFactory, PluginInstaller, Shortcode, TemplateFactory,
};
use orrery_domain::category::UnitCategory;
use std::fmt;

/// A display name paired with its producer.
pub struct NamedUnit<T> {
    pub name: String,
    pub unit: T,
}

impl<T> fmt::Debug for NamedUnit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamedUnit").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Ordered units of one category. Iteration order is insertion order, always.
pub struct Units<T> {
    entries: Vec<NamedUnit<T>>,
}

impl<T> Units<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    pub fn push(&mut self, name: impl Into<String>, unit: T) {
        self.entries.push(NamedUnit { name: name.into(), unit });
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, unit: T) -> Self {
        self.push(name, unit);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedUnit<T>> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl<T> Default for Units<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for Units<T> {
    type Item = NamedUnit<T>;
    type IntoIter = std::vec::IntoIter<NamedUnit<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T> fmt::Debug for Units<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

/// All seven unit categories of a site.
#[derive(Debug, Default)]
pub struct UnitRegistry {
    pub collections: Units<CollectionBuilder>,
    /// Installers may depend on what earlier ones registered; order is a contract.
    pub plugins: Units<PluginInstaller>,
    pub shortcodes: Units<Shortcode>,
    pub filters: Units<Filter>,
    pub passthroughs: Units<PathFactory>,
    pub watch_targets: Units<PathFactory>,
    pub template_languages: Units<TemplateFactory>,
}

impl UnitRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(&self, category: UnitCategory) -> usize {
        match category {
            UnitCategory::Collections => self.collections.len(),
            UnitCategory::Plugins => self.plugins.len(),
            UnitCategory::Shortcodes => self.shortcodes.len(),
            UnitCategory::Filters => self.filters.len(),
            UnitCategory::Passthroughs => self.passthroughs.len(),
            UnitCategory::WatchTargets => self.watch_targets.len(),
            UnitCategory::TemplateLanguages => self.template_languages.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        UnitCategory::ORDERED.iter().all(|c| self.count(*c) == 0)
    }
}
