//! Records exchanged with the host build system.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Input/output directory layout handed back to the host.
///
/// `includes` and `layouts` are relative to `input`, as the host resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirLayout {
    pub input: PathBuf,
    pub output: PathBuf,
    pub includes: PathBuf,
    pub layouts: PathBuf,
    pub data: PathBuf,
}

/// The settings record returned at the end of a composition pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub dir: DirLayout,
    /// Built-in formats first, then every registered template language; no duplicates.
    pub template_formats: Vec<String>,
}

impl Settings {
    #[must_use]
    pub fn recognizes(&self, format: &str) -> bool {
        self.template_formats.iter().any(|f| f == format)
    }
}

/// Options for the build-output reporting add-on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportingOptions {
    pub show_filesize: bool,
    pub show_benchmark: bool,
    /// Files larger than this many bytes are highlighted.
    pub warning_threshold_bytes: u64,
}

/// Request middleware installed on the preview server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PreviewMiddleware {
    /// Catch-all: answers every unmatched request with this document and status 404.
    NotFound { document: PathBuf },
}

/// Preview-server configuration handed to the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewOptions {
    /// Open a browser tab once the server is listening.
    pub open: bool,
    pub middleware: Vec<PreviewMiddleware>,
}

impl PreviewOptions {
    /// The fallback document, if a not-found middleware is installed.
    #[must_use]
    pub fn not_found_document(&self) -> Option<&PathBuf> {
        self.middleware.iter().find_map(|m| match m {
            PreviewMiddleware::NotFound { document } => Some(document),
        })
    }
}

// --- Default ---

impl Default for DirLayout {
    fn default() -> Self {
        Self {
            input: PathBuf::from("src"),
            output: PathBuf::from("public"),
            includes: PathBuf::from("assets/views"),
            layouts: PathBuf::from("assets/views/layouts"),
            data: PathBuf::from("data"),
        }
    }
}

impl Default for ReportingOptions {
    fn default() -> Self {
        Self { show_filesize: true, show_benchmark: true, warning_threshold_bytes: 400 * 1000 }
    }
}
