use super::{ConfigHost, HostError};
use crate::unit::{
    Artifact, CollectionApi, CollectionBuilder, Filter, PathPattern, Shortcode, TemplateHandler,
};
use indexmap::IndexMap;
use orrery_domain::settings::{PreviewOptions, ReportingOptions};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// In-process host configuration object.
///
/// Named registrations (collections, shortcodes, filters, extensions) follow
/// "last registration wins" and keep the position of the first one. Passthroughs and
/// watch targets are kept in registration order; template formats are de-duplicated.
#[derive(Default)]
pub struct SiteBuilder {
    collections: IndexMap<String, CollectionBuilder>,
    shortcodes: IndexMap<String, Shortcode>,
    filters: IndexMap<String, Filter>,
    extensions: IndexMap<String, TemplateHandler>,
    passthroughs: Vec<PathPattern>,
    watch_targets: Vec<PathPattern>,
    template_formats: Vec<String>,
    quiet: bool,
    reporter: Option<ReportingOptions>,
    preview: Option<PreviewOptions>,
}

fn insert_named<T>(map: &mut IndexMap<String, T>, kind: &'static str, name: &str, value: T) {
    if map.insert(name.to_owned(), value).is_some() {
        warn!(kind, unit = name, "Duplicate registration, the last one wins");
    } else {
        debug!(kind, unit = name, "Registered");
    }
}

impl SiteBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection_names(&self) -> impl Iterator<Item = &str> {
        self.collections.keys().map(String::as_str)
    }

    pub fn shortcode_names(&self) -> impl Iterator<Item = &str> {
        self.shortcodes.keys().map(String::as_str)
    }

    pub fn filter_names(&self) -> impl Iterator<Item = &str> {
        self.filters.keys().map(String::as_str)
    }

    pub fn extension_names(&self) -> impl Iterator<Item = &str> {
        self.extensions.keys().map(String::as_str)
    }

    #[must_use]
    pub fn passthroughs(&self) -> &[PathPattern] {
        &self.passthroughs
    }

    #[must_use]
    pub fn watch_targets(&self) -> &[PathPattern] {
        &self.watch_targets
    }

    #[must_use]
    pub fn template_formats(&self) -> &[String] {
        &self.template_formats
    }

    #[must_use]
    pub fn extension(&self, name: &str) -> Option<&TemplateHandler> {
        self.extensions.get(name)
    }

    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.quiet
    }

    #[must_use]
    pub const fn reporter(&self) -> Option<&ReportingOptions> {
        self.reporter.as_ref()
    }

    #[must_use]
    pub const fn preview(&self) -> Option<&PreviewOptions> {
        self.preview.as_ref()
    }

    /// Evaluates one collection against the full artifact set.
    #[must_use]
    pub fn resolve_collection(&self, name: &str, artifacts: &[Artifact]) -> Option<Vec<Artifact>> {
        let api = CollectionApi::new(artifacts);
        self.collections.get(name).map(|builder| builder(&api))
    }

    /// Evaluates every collection, in registration order.
    #[must_use]
    pub fn resolve_collections(&self, artifacts: &[Artifact]) -> IndexMap<String, Vec<Artifact>> {
        let api = CollectionApi::new(artifacts);
        self.collections.iter().map(|(name, builder)| (name.clone(), builder(&api))).collect()
    }

    /// Runs `value | name(args...)`.
    ///
    /// # Errors
    /// [`HostError::UnknownFilter`] for an unregistered name, [`HostError::Unit`] when
    /// the filter itself fails.
    pub fn apply_filter(&self, name: &str, value: &Value, args: &[Value]) -> Result<Value, HostError> {
        let filter = self.filters.get(name).ok_or_else(|| HostError::UnknownFilter {
            message: name.to_owned().into(),
            context: None,
        })?;
        Ok(filter(value, args)?)
    }

    /// # Errors
    /// [`HostError::UnknownShortcode`] for an unregistered name, [`HostError::Unit`] when
    /// the shortcode fails.
    pub fn render_shortcode(&self, name: &str, args: &[Value]) -> Result<String, HostError> {
        let shortcode = self.shortcodes.get(name).ok_or_else(|| HostError::UnknownShortcode {
            message: name.to_owned().into(),
            context: None,
        })?;
        Ok(shortcode(args)?)
    }

    /// Compiles and renders `source` with the handler registered for `name`.
    ///
    /// # Errors
    /// [`HostError::UnknownExtension`] for an unregistered format, [`HostError::Unit`]
    /// when compilation or rendering fails.
    pub fn render_extension(
        &self,
        name: &str,
        source: &str,
        path: &Path,
        data: &Value,
    ) -> Result<String, HostError> {
        let handler = self.extension(name).ok_or_else(|| HostError::UnknownExtension {
            message: name.to_owned().into(),
            context: None,
        })?;
        Ok(handler.render(source, path, data)?)
    }
}

impl ConfigHost for SiteBuilder {
    fn add_collection(&mut self, name: &str, builder: CollectionBuilder) {
        insert_named(&mut self.collections, "collection", name, builder);
    }

    fn add_shortcode(&mut self, name: &str, shortcode: Shortcode) {
        insert_named(&mut self.shortcodes, "shortcode", name, shortcode);
    }

    fn add_filter(&mut self, name: &str, filter: Filter) {
        insert_named(&mut self.filters, "filter", name, filter);
    }

    fn add_passthrough_copy(&mut self, source: PathPattern) {
        debug!(path = %source, "Passthrough copy");
        self.passthroughs.push(source);
    }

    fn add_watch_target(&mut self, target: PathPattern) {
        debug!(path = %target, "Watch target");
        self.watch_targets.push(target);
    }

    fn add_template_format(&mut self, name: &str) {
        if !self.template_formats.iter().any(|f| f == name) {
            self.template_formats.push(name.to_owned());
        }
    }

    fn add_extension(&mut self, name: &str, handler: TemplateHandler) {
        insert_named(&mut self.extensions, "extension", name, handler);
    }

    fn set_quiet_mode(&mut self, quiet: bool) {
        self.quiet = quiet;
    }

    fn add_reporter(&mut self, options: ReportingOptions) {
        self.reporter = Some(options);
    }

    fn set_preview_server(&mut self, options: PreviewOptions) {
        self.preview = Some(options);
    }
}

impl fmt::Debug for SiteBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteBuilder")
            .field("collections", &self.collections.keys().collect::<Vec<_>>())
            .field("shortcodes", &self.shortcodes.keys().collect::<Vec<_>>())
            .field("filters", &self.filters.keys().collect::<Vec<_>>())
            .field("extensions", &self.extensions)
            .field("passthroughs", &self.passthroughs)
            .field("watch_targets", &self.watch_targets)
            .field("template_formats", &self.template_formats)
            .field("quiet", &self.quiet)
            .field("reporter", &self.reporter)
            .field("preview", &self.preview)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{self, UnitError};
    use serde_json::json;

    #[test]
    fn duplicate_names_last_registration_wins() -> Result<(), HostError> {
        let mut host = SiteBuilder::new();
        host.add_filter("pick", unit::filter(|_, _| Ok(json!("first"))));
        host.add_filter("other", unit::filter(|v, _| Ok(v.clone())));
        host.add_filter("pick", unit::filter(|_, _| Ok(json!("second"))));

        assert_eq!(host.filter_names().collect::<Vec<_>>(), ["pick", "other"]);
        assert_eq!(host.apply_filter("pick", &Value::Null, &[])?, json!("second"));
        Ok(())
    }

    #[test]
    fn collections_resolve_lazily_against_artifacts() {
        let mut host = SiteBuilder::new();
        host.add_collection("drafts", unit::collection(|api| api.filtered_by_tag("draft")));

        let artifacts = vec![
            Artifact::new("src/a.md", "/a/").with_tags(["draft"]),
            Artifact::new("src/b.md", "/b/"),
        ];

        let resolved = host.resolve_collections(&artifacts);
        assert_eq!(resolved["drafts"].len(), 1);
        assert_eq!(resolved["drafts"][0].url, "/a/");
        assert!(host.resolve_collection("missing", &artifacts).is_none());
    }

    #[test]
    fn unknown_units_are_reported() {
        let host = SiteBuilder::new();
        assert!(matches!(
            host.apply_filter("nope", &Value::Null, &[]),
            Err(HostError::UnknownFilter { .. })
        ));
        assert!(matches!(host.render_shortcode("nope", &[]), Err(HostError::UnknownShortcode { .. })));
        assert!(matches!(
            host.render_extension("nope", "", Path::new("x"), &Value::Null),
            Err(HostError::UnknownExtension { .. })
        ));
    }

    #[test]
    fn unit_failures_are_wrapped() {
        let mut host = SiteBuilder::new();
        host.add_shortcode("boom", unit::shortcode(|_| Err(UnitError::from("exploded"))));

        let err = host.render_shortcode("boom", &[]).expect_err("shortcode should fail");
        assert!(matches!(err, HostError::Unit { .. }));
        assert!(err.to_string().contains("exploded"));
    }

    #[test]
    fn template_formats_are_deduplicated() {
        let mut host = SiteBuilder::new();
        host.add_template_format("css");
        host.add_template_format("md");
        host.add_template_format("css");
        assert_eq!(host.template_formats(), ["css", "md"]);
    }
}
