// tests/config_loading.rs

//! Config file loading, defaults, and validation errors.

use std::error::Error;

use tempfile::TempDir;

use batchrun::config::load_and_validate;
use batchrun::errors::BatchrunError;

use batchrun_test_utils::builders::ConfigFileBuilder;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn full_config_file_parses() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("Batchrun.toml");
    std::fs::write(
        &path,
        r#"
[config]
log_file = "out/commands.log"
batch_size = 2
strict = true

[[command]]
argv = ["echo", "hello"]

[[command]]
argv = ["sleep", "1"]
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.config.log_file, "out/commands.log");
    assert_eq!(cfg.config.batch_size, 2);
    assert!(cfg.config.strict);
    assert_eq!(cfg.commands.len(), 2);
    assert_eq!(cfg.commands[0].program(), "echo");
    assert_eq!(cfg.commands[1].program(), "sleep");
    Ok(())
}

#[test]
fn commands_only_config_uses_defaults() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("Batchrun.toml");
    std::fs::write(
        &path,
        r#"
[[command]]
argv = ["true"]
"#,
    )?;

    let cfg = load_and_validate(&path)?;
    assert_eq!(cfg.config.log_file, "command_log.txt");
    assert_eq!(cfg.config.batch_size, 4);
    assert!(!cfg.config.strict);
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_and_validate("definitely/not/here/Batchrun.toml").unwrap_err();
    assert!(matches!(err, BatchrunError::IoError(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("Batchrun.toml");
    std::fs::write(&path, "[[command]\nargv = [")?;

    let err = load_and_validate(&path).unwrap_err();
    assert!(matches!(err, BatchrunError::TomlError(_)));
    Ok(())
}

#[test]
fn builder_produces_a_validated_config() {
    let cfg = ConfigFileBuilder::new()
        .with_batch_size(3)
        .with_strict(true)
        .with_command(["echo", "hi"])
        .build();

    assert_eq!(cfg.config.batch_size, 3);
    assert!(cfg.config.strict);
    assert_eq!(cfg.commands.len(), 1);
    assert_eq!(cfg.commands[0].args(), ["hi".to_string()]);
}
