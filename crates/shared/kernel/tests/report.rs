use orrery_domain::settings::ReportingOptions;
use orrery_kernel::report::{DirectoryReport, ReportError};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn scan_flags_files_over_the_threshold() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::create_dir_all(dir.path().join("posts"))?;
    fs::write(dir.path().join("index.html"), vec![b'a'; 64])?;
    fs::write(dir.path().join("posts/big.html"), vec![b'b'; 512])?;

    let options = ReportingOptions { warning_threshold_bytes: 100, ..ReportingOptions::default() };
    let timings = HashMap::from([(PathBuf::from("index.html"), Duration::from_millis(3))]);
    let report = DirectoryReport::scan(dir.path(), &options, &timings)?;

    let rows = report.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].path, PathBuf::from("index.html"));
    assert!(!rows[0].oversized);
    assert_eq!(rows[0].elapsed, Some(Duration::from_millis(3)));
    assert_eq!(rows[1].path, PathBuf::from("posts").join("big.html"));
    assert!(rows[1].oversized);
    assert_eq!(rows[1].elapsed, None);
    assert_eq!(report.total_size(), 576);
    assert_eq!(report.oversized().count(), 1);

    report.emit();
    Ok(())
}

#[test]
fn timings_are_dropped_without_benchmark() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    fs::write(dir.path().join("a.css"), "body{}")?;

    let options = ReportingOptions { show_benchmark: false, ..ReportingOptions::default() };
    let timings = HashMap::from([(PathBuf::from("a.css"), Duration::from_millis(9))]);
    let report = DirectoryReport::scan(dir.path(), &options, &timings)?;

    assert_eq!(report.rows()[0].elapsed, None);
    Ok(())
}

#[test]
fn missing_output_directory_is_a_walk_error() {
    let dir = tempdir().expect("temp dir");
    let result =
        DirectoryReport::scan(&dir.path().join("public"), &ReportingOptions::default(), &HashMap::new());
    assert!(matches!(result, Err(ReportError::Walk { .. })));
}
