use orrery_logger::{Logger, LoggerError, STARTUP_TARGET};
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn quiet_mode_keeps_only_warnings_and_startup_lines() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("integration-quiet")
        .console(false)
        .quiet(true)
        .env_filter("")
        .path(&log_dir)
        .json()
        .init()?;
    assert!(logger.guard().is_some());

    tracing::info!(target: "orrery::startup", "Collections");
    tracing::info!(target: "orrery_kernel::host", "Registered posts");
    tracing::debug!(target: "orrery::startup", "startup debug detail");
    tracing::warn!(target: "orrery_kernel::host", "Duplicate registration");

    let second = Logger::builder().name("integration-quiet-second").init();
    assert!(matches!(second, Err(LoggerError::Subscriber { .. })), "global subscriber is set once");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");
    let contents = fs::read_to_string(&log_file)?;

    assert!(contents.contains("Collections"), "startup trace stays visible: {contents}");
    assert!(contents.contains(STARTUP_TARGET));
    assert!(contents.contains("Duplicate registration"));
    assert!(!contents.contains("Registered posts"), "routine INFO is filtered: {contents}");
    assert!(!contents.contains("startup debug detail"));
    Ok(())
}
