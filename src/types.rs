// src/types.rs

use crate::errors::{BatchrunError, Result};

/// One external command: the program to run plus its arguments.
///
/// The argv is fixed at construction time; [`Command::new`] rejects an empty
/// argv because there is no program to resolve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    argv: Vec<String>,
}

impl Command {
    /// Build a command from a full argv (program first).
    pub fn new<I, S>(argv: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = argv.into_iter().map(Into::into).collect();
        if argv.is_empty() {
            return Err(BatchrunError::ConfigError(
                "command argv must not be empty".to_string(),
            ));
        }
        Ok(Self { argv })
    }

    /// The executable name (first argv element).
    pub fn program(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments after the program name.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    /// The full argv, program included.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

/// Raw output captured from one finished process.
///
/// Both streams are kept as bytes; decoding to text happens only where a
/// caller-facing string is needed. `exit_code` is `None` when the process was
/// terminated by a signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_rejects_empty_argv() {
        let result = Command::new(Vec::<String>::new());
        assert!(matches!(result, Err(BatchrunError::ConfigError(_))));
    }

    #[test]
    fn command_splits_program_and_args() {
        let cmd = Command::new(["echo", "hello", "world"]).unwrap();
        assert_eq!(cmd.program(), "echo");
        assert_eq!(cmd.args(), ["hello".to_string(), "world".to_string()]);
        assert_eq!(cmd.argv().len(), 3);
    }

    #[test]
    fn output_success_tracks_exit_code() {
        let ok = CommandOutput {
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: Some(0),
        };
        let failed = CommandOutput {
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: Some(2),
        };
        let signalled = CommandOutput {
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: None,
        };
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!signalled.success());
    }
}
