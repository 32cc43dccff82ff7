//! Strongly typed producers, one signature per unit category.
//!
//! Collections, filters and shortcodes are values the host keeps and calls later.
//! Plugins, passthroughs, watch targets and template languages are factories the
//! composition driver invokes exactly once, during registration.

mod error;

pub use crate::unit::error::{UnitError, UnitErrorExt};

use crate::host::ConfigHost;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Computes a collection's members from every build artifact; evaluated lazily by the host.
pub type CollectionBuilder = Arc<dyn Fn(&CollectionApi<'_>) -> Vec<Artifact> + Send + Sync>;

/// Performs arbitrary additional registration against the host.
pub type PluginInstaller = Box<dyn Fn(&mut dyn ConfigHost) -> Result<(), UnitError>>;

/// Template callable producing markup from positional arguments.
pub type Shortcode = Arc<dyn Fn(&[Value]) -> Result<String, UnitError> + Send + Sync>;

/// Template-expression callable: `value | filter(args...)`.
pub type Filter = Arc<dyn Fn(&Value, &[Value]) -> Result<Value, UnitError> + Send + Sync>;

/// Resolves a path or glob at registration time.
pub type PathFactory = Box<dyn Fn() -> Result<PathPattern, UnitError>>;

/// Produces the handler for a template language at registration time.
pub type TemplateFactory = Box<dyn Fn() -> Result<TemplateHandler, UnitError>>;

/// Renders a compiled template against page data.
pub type Render = Box<dyn Fn(&Value) -> Result<String, UnitError> + Send + Sync>;

/// Compiles file contents (and its input path) into a [`Render`] function.
pub type Compile = Arc<dyn Fn(&str, &Path) -> Result<Render, UnitError> + Send + Sync>;

pub fn collection<F>(f: F) -> CollectionBuilder
where
    F: Fn(&CollectionApi<'_>) -> Vec<Artifact> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn plugin<F>(f: F) -> PluginInstaller
where
    F: Fn(&mut dyn ConfigHost) -> Result<(), UnitError> + 'static,
{
    Box::new(f)
}

pub fn shortcode<F>(f: F) -> Shortcode
where
    F: Fn(&[Value]) -> Result<String, UnitError> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn filter<F>(f: F) -> Filter
where
    F: Fn(&Value, &[Value]) -> Result<Value, UnitError> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn path<F>(f: F) -> PathFactory
where
    F: Fn() -> Result<PathPattern, UnitError> + 'static,
{
    Box::new(f)
}

pub fn template<F>(f: F) -> TemplateFactory
where
    F: Fn() -> Result<TemplateHandler, UnitError> + 'static,
{
    Box::new(f)
}

/// A build artifact as the host exposes it to collection builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artifact {
    pub input_path: PathBuf,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Front matter and computed data.
    #[serde(default)]
    pub data: Value,
}

impl Artifact {
    pub fn new(input_path: impl Into<PathBuf>, url: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            url: url.into(),
            tags: Vec::new(),
            date: None,
            data: Value::Null,
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Read-only view over all artifacts, handed to collection builders.
#[derive(Debug, Clone, Copy)]
pub struct CollectionApi<'a> {
    artifacts: &'a [Artifact],
}

impl<'a> CollectionApi<'a> {
    #[must_use]
    pub const fn new(artifacts: &'a [Artifact]) -> Self {
        Self { artifacts }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Artifact> + use<'a> {
        self.artifacts.iter()
    }

    #[must_use]
    pub fn all(&self) -> Vec<Artifact> {
        self.artifacts.to_vec()
    }

    #[must_use]
    pub fn filtered_by_tag(&self, tag: &str) -> Vec<Artifact> {
        self.iter().filter(|a| a.has_tag(tag)).cloned().collect()
    }

    /// Oldest first; undated artifacts lead, in input order.
    #[must_use]
    pub fn sorted_by_date(&self) -> Vec<Artifact> {
        let mut sorted = self.all();
        sorted.sort_by_key(|a| a.date);
        sorted
    }
}

/// A source path or glob, as passed to passthrough copy and watch registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPattern(String);

impl PathPattern {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_glob(&self) -> bool {
        self.0.contains(['*', '?', '[', '{'])
    }
}

impl From<&str> for PathPattern {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl From<PathBuf> for PathPattern {
    fn from(path: PathBuf) -> Self {
        Self(path.to_string_lossy().replace('\\', "/"))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// How the host reads, compiles and renders files of one template format.
#[derive(Clone)]
pub struct TemplateHandler {
    pub output_file_extension: String,
    /// Whether the host reads the file and passes its contents to `compile`.
    pub read: bool,
    pub compile: Compile,
}

impl TemplateHandler {
    pub fn new<F>(output_file_extension: impl Into<String>, compile: F) -> Self
    where
        F: Fn(&str, &Path) -> Result<Render, UnitError> + Send + Sync + 'static,
    {
        Self { output_file_extension: output_file_extension.into(), read: true, compile: Arc::new(compile) }
    }

    #[must_use]
    pub const fn read(mut self, read: bool) -> Self {
        self.read = read;
        self
    }

    /// Compiles `source` and renders it with `data` in one step.
    ///
    /// # Errors
    /// Propagates the handler's compile or render failure.
    pub fn render(&self, source: &str, path: &Path, data: &Value) -> Result<String, UnitError> {
        (self.compile)(source, path)?(data)
    }
}

impl fmt::Debug for TemplateHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateHandler")
            .field("output_file_extension", &self.output_file_extension)
            .field("read", &self.read)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn artifacts() -> Vec<Artifact> {
        vec![
            Artifact::new("src/posts/b.md", "/posts/b/").with_tags(["post"]).with_date(date(2024, 3, 1)),
            Artifact::new("src/about.md", "/about/").with_tags(["page"]),
            Artifact::new("src/posts/a.md", "/posts/a/").with_tags(["post"]).with_date(date(2023, 1, 9)),
        ]
    }

    #[test]
    fn collection_api_filters_by_tag() {
        let all = artifacts();
        let api = CollectionApi::new(&all);

        let posts = api.filtered_by_tag("post");
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|a| a.has_tag("post")));
        assert!(api.filtered_by_tag("missing").is_empty());
    }

    #[test]
    fn collection_api_sorts_undated_first() {
        let all = artifacts();
        let urls: Vec<_> =
            CollectionApi::new(&all).sorted_by_date().into_iter().map(|a| a.url).collect();
        assert_eq!(urls, ["/about/", "/posts/a/", "/posts/b/"]);
    }

    #[test]
    fn path_pattern_detects_globs() {
        assert!(PathPattern::from("src/**/*.png").is_glob());
        assert!(!PathPattern::from("src/favicon.ico").is_glob());
        assert_eq!(PathPattern::from(PathBuf::from("src").join("fonts")).as_str(), "src/fonts");
    }

    #[test]
    fn template_handler_compiles_then_renders() -> Result<(), UnitError> {
        let handler = TemplateHandler::new("txt", |source, _| {
            let source = source.to_owned();
            let render: Render = Box::new(move |data: &Value| -> Result<String, UnitError> {
                Ok(source.replace("{name}", data["name"].as_str().unwrap_or_default()))
            });
            Ok(render)
        });

        let out = handler.render("hi {name}", Path::new("a.txt"), &json!({ "name": "orrery" }))?;
        assert_eq!(out, "hi orrery");
        assert!(handler.read);
        Ok(())
    }
}
