// tests/command_log_file.rs

//! Log sink behaviour: truncation, appends, and error surfacing.

use std::error::Error;

use tempfile::TempDir;

use batchrun::command_log::CommandLog;
use batchrun::errors::BatchrunError;

use batchrun_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

#[tokio::test]
async fn clear_truncates_and_is_idempotent() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let path = dir.path().join("command_log.txt");
    std::fs::write(&path, "old contents\n")?;

    let log = CommandLog::new(&path);
    log.clear().await?;
    assert_eq!(std::fs::read_to_string(&path)?, "");

    log.clear().await?;
    assert_eq!(std::fs::read_to_string(&path)?, "");
    Ok(())
}

#[tokio::test]
async fn clear_creates_a_missing_file() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let path = dir.path().join("command_log.txt");

    let log = CommandLog::new(&path);
    log.clear().await?;

    assert!(path.exists());
    assert_eq!(std::fs::read_to_string(&path)?, "");
    Ok(())
}

#[tokio::test]
async fn append_writes_blocks_in_order() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let path = dir.path().join("command_log.txt");

    let log = CommandLog::new(&path);
    log.append(&["first\n", "second\n"]).await?;
    log.append(&["third\n"]).await?;

    assert_eq!(std::fs::read_to_string(&path)?, "first\nsecond\nthird\n");
    Ok(())
}

#[tokio::test]
async fn append_creates_a_missing_file() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let path = dir.path().join("command_log.txt");

    let log = CommandLog::new(&path);
    log.append(&["entry\n"]).await?;

    assert_eq!(std::fs::read_to_string(&path)?, "entry\n");
    Ok(())
}

#[tokio::test]
async fn unwritable_path_surfaces_an_io_error() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let path = dir.path().join("no-such-subdir").join("command_log.txt");

    let log = CommandLog::new(&path);

    let clear_err = log.clear().await.unwrap_err();
    assert!(matches!(clear_err, BatchrunError::IoError(_)));

    let append_err = log.append(&["entry\n"]).await.unwrap_err();
    assert!(matches!(append_err, BatchrunError::IoError(_)));
    Ok(())
}
