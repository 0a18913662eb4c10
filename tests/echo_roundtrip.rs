// tests/echo_roundtrip.rs

//! End-to-end runs with the real launcher and real processes.

#![cfg(unix)]

use std::error::Error;

use tempfile::TempDir;

use batchrun::command_log::CommandLog;
use batchrun::engine::Executor;
use batchrun::errors::BatchrunError;
use batchrun::exec::TokioLauncher;
use batchrun::types::Command;

use batchrun_test_utils::init_tracing;
use batchrun_test_utils::progress::RecordingProgress;

type TestResult = Result<(), Box<dyn Error>>;

fn executor_in(dir: &TempDir) -> Executor<TokioLauncher> {
    Executor::new(
        TokioLauncher::new(),
        CommandLog::new(dir.path().join("command_log.txt")),
    )
}

#[tokio::test]
async fn echo_hello_round_trips_through_stdout_and_log() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let executor = executor_in(&dir);

    let stdout = executor
        .run_single(&Command::new(["echo", "hello"])?)
        .await?;
    assert_eq!(stdout, "hello\n");

    let log = std::fs::read_to_string(dir.path().join("command_log.txt"))?;
    assert!(log.starts_with("---SINGLE COMMAND---\n\n"));
    assert!(log.contains("Started: "));
    assert!(log.contains("Finished: "));
    assert!(log.contains(" seconds\n"));
    assert!(log.contains("command: ['echo', 'hello']\n"));
    assert!(log.contains("stdout: b'hello\\n'\n"));
    assert!(log.contains("stderr: b''\n"));
    Ok(())
}

#[tokio::test]
async fn batched_echoes_write_one_entry_per_batch() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let executor = executor_in(&dir);

    let commands = ["one", "two", "three"]
        .into_iter()
        .map(|word| Command::new(["echo", word]))
        .collect::<Result<Vec<_>, _>>()?;

    let mut progress = RecordingProgress::default();
    let results = executor
        .run_batched_with(&commands, 2, &mut progress)
        .await?;

    assert_eq!(results, vec!["one\n", "two\n", "three\n"]);
    assert_eq!(progress.percents, vec![50]);
    assert_eq!(progress.done_calls, 1);

    let log = std::fs::read_to_string(dir.path().join("command_log.txt"))?;
    assert_eq!(log.matches("---NEW BATCH---").count(), 2);
    assert!(log.contains("Commands: 2\n"));
    assert!(log.contains("Commands: 1\n"));

    // Log order follows execution order even though commands within a batch
    // finish in any order.
    let pos_one = log.find("command: ['echo', 'one']").unwrap();
    let pos_two = log.find("command: ['echo', 'two']").unwrap();
    let pos_three = log.find("command: ['echo', 'three']").unwrap();
    assert!(pos_one < pos_two);
    assert!(pos_two < pos_three);
    Ok(())
}

#[tokio::test]
async fn stderr_is_captured_raw_in_the_log() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let executor = executor_in(&dir);

    let command = Command::new(["sh", "-c", "echo oops >&2"])?;
    let stdout = executor.run_single(&command).await?;

    assert_eq!(stdout, "");
    let log = std::fs::read_to_string(dir.path().join("command_log.txt"))?;
    assert!(log.contains("stderr: b'oops\\n'\n"));
    Ok(())
}

#[tokio::test]
async fn missing_executable_fails_with_launch_error() -> TestResult {
    init_tracing();
    let dir = TempDir::new()?;
    let executor = executor_in(&dir);

    let command = Command::new(["batchrun-no-such-binary-for-tests"])?;
    let err = executor.run_single(&command).await.unwrap_err();

    match err {
        BatchrunError::LaunchError { command, source } => {
            assert_eq!(command, "batchrun-no-such-binary-for-tests");
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected LaunchError, got {other:?}"),
    }
    Ok(())
}
