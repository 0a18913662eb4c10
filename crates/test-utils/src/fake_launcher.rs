use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::time::Instant;

use batchrun::errors::{BatchrunError, Result};
use batchrun::exec::ProcessLauncher;
use batchrun::types::{Command, CommandOutput};

/// One recorded launch: which program "ran" and when.
///
/// Instants come from `tokio::time::Instant`, so tests using
/// `#[tokio::test(start_paused = true)]` get deterministic timing.
#[derive(Debug, Clone)]
pub struct LaunchRecord {
    pub program: String,
    pub started: Instant,
    pub finished: Instant,
}

/// Scripted behaviour for one program name.
#[derive(Debug, Clone)]
pub struct FakeBehaviour {
    pub delay: Duration,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub exit_code: Option<i32>,
    pub fail_to_launch: bool,
}

impl Default for FakeBehaviour {
    fn default() -> Self {
        Self {
            delay: Duration::ZERO,
            stdout: Vec::new(),
            stderr: Vec::new(),
            exit_code: Some(0),
            fail_to_launch: false,
        }
    }
}

/// A fake launcher that:
/// - records every launch with start/finish instants
/// - sleeps for the scripted delay instead of spawning a real process
/// - resolves with the scripted output.
///
/// Programs without scripted behaviour complete immediately with their own
/// name plus a newline as stdout and exit code 0, so ordering assertions can
/// match results back to commands.
pub struct FakeLauncher {
    behaviours: HashMap<String, FakeBehaviour>,
    launches: Arc<Mutex<Vec<LaunchRecord>>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self {
            behaviours: HashMap::new(),
            launches: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Script full behaviour for a program name.
    pub fn with_behaviour(mut self, program: &str, behaviour: FakeBehaviour) -> Self {
        self.behaviours.insert(program.to_string(), behaviour);
        self
    }

    /// Shortcut: `program` sleeps for `delay`, then succeeds echoing its name.
    pub fn with_delay(self, program: &str, delay: Duration) -> Self {
        let behaviour = FakeBehaviour {
            delay,
            stdout: format!("{program}\n").into_bytes(),
            ..FakeBehaviour::default()
        };
        self.with_behaviour(program, behaviour)
    }

    /// Shared handle to the launch records.
    pub fn launches(&self) -> Arc<Mutex<Vec<LaunchRecord>>> {
        Arc::clone(&self.launches)
    }
}

impl Default for FakeLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessLauncher for FakeLauncher {
    fn launch<'a>(
        &'a self,
        command: &'a Command,
    ) -> Pin<Box<dyn Future<Output = Result<CommandOutput>> + Send + 'a>> {
        let behaviour = self
            .behaviours
            .get(command.program())
            .cloned()
            .unwrap_or_else(|| FakeBehaviour {
                stdout: format!("{}\n", command.program()).into_bytes(),
                ..FakeBehaviour::default()
            });
        let launches = Arc::clone(&self.launches);
        let program = command.program().to_string();

        Box::pin(async move {
            if behaviour.fail_to_launch {
                return Err(BatchrunError::LaunchError {
                    command: program,
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "scripted launch failure",
                    ),
                });
            }

            let started = Instant::now();
            tokio::time::sleep(behaviour.delay).await;
            let finished = Instant::now();

            launches.lock().unwrap().push(LaunchRecord {
                program,
                started,
                finished,
            });

            Ok(CommandOutput {
                stdout: behaviour.stdout,
                stderr: behaviour.stderr,
                exit_code: behaviour.exit_code,
            })
        })
    }
}
