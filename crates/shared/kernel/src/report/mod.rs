//! Build-output report: per-file sizes and render timings of the output directory.

mod error;

pub use crate::report::error::{ReportError, ReportErrorExt};

use crate::trace::STARTUP_TARGET;
use orrery_domain::settings::ReportingOptions;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use walkdir::WalkDir;

/// One output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Relative to the output directory.
    pub path: PathBuf,
    pub size: u64,
    pub oversized: bool,
    pub elapsed: Option<Duration>,
}

#[derive(Debug, Clone)]
pub struct DirectoryReport {
    options: ReportingOptions,
    rows: Vec<ReportRow>,
}

impl DirectoryReport {
    /// Walks `output_dir` and collects a row per regular file, sorted by path.
    ///
    /// `timings` maps output-relative paths to render durations; they are only
    /// attached when `show_benchmark` is set.
    ///
    /// # Errors
    /// [`ReportError::Walk`] when the directory (or an entry below it) cannot be read.
    pub fn scan(
        output_dir: &Path,
        options: &ReportingOptions,
        timings: &HashMap<PathBuf, Duration>,
    ) -> Result<Self, ReportError> {
        let mut rows = Vec::new();

        for entry in WalkDir::new(output_dir).sort_by_file_name() {
            let entry = entry.context("Scanning output directory")?;
            if !entry.file_type().is_file() {
                continue;
            }

            let size = entry.metadata().context("Reading output file metadata")?.len();
            let path = entry.path().strip_prefix(output_dir).unwrap_or(entry.path()).to_path_buf();
            let elapsed =
                if options.show_benchmark { timings.get(&path).copied() } else { None };

            rows.push(ReportRow {
                oversized: size > options.warning_threshold_bytes,
                path,
                size,
                elapsed,
            });
        }

        rows.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(Self { options: *options, rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.rows.iter().map(|r| r.size).sum()
    }

    pub fn oversized(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|r| r.oversized)
    }

    /// Formats a row with the columns enabled in the options.
    #[must_use]
    pub fn line(&self, row: &ReportRow) -> String {
        let mut line = row.path.display().to_string();
        if self.options.show_filesize {
            line.push_str(&format!("  {}", human_size(row.size)));
        }
        if let Some(elapsed) = row.elapsed {
            line.push_str(&format!("  {}ms", elapsed.as_millis()));
        }
        line
    }

    /// Logs every row plus a total line, under the startup target so quiet mode keeps it.
    pub fn emit(&self) {
        for row in &self.rows {
            let line = self.line(row);
            if row.oversized {
                warn!(
                    target: STARTUP_TARGET,
                    threshold = self.options.warning_threshold_bytes,
                    "{line}"
                );
            } else {
                info!(target: STARTUP_TARGET, "{line}");
            }
        }

        let oversized = self.oversized().count();
        info!(
            target: STARTUP_TARGET,
            files = self.rows.len(),
            oversized,
            "Output total: {}",
            human_size(self.total_size())
        );
    }
}

fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "kB", "MB", "GB"];

    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }

    if unit == 0 { format!("{bytes} B") } else { format!("{value:.1} {}", UNITS[unit]) }
}
