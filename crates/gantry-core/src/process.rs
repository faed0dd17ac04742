//! Subprocess access behind a narrow capability interface.
//!
//! Everything external (git, the tracker CLI) is reached through
//! [`CommandRunner`] so that the classification and parsing cores can be
//! tested against fakes instead of real processes. A tool that is missing,
//! hung up on, or exiting non-zero is "feature unavailable", never a fatal
//! error; callers fall back to documented defaults.

use std::process::Command;

use tracing::debug;

/// Captured result of a finished subprocess.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Whether the process exited with status zero
    pub success: bool,
    /// Captured standard output
    pub stdout: String,
}

/// Narrow capability for running external tools.
pub trait CommandRunner {
    /// Run `program` with `args`, blocking until it exits.
    ///
    /// Returns `None` when the program cannot be spawned at all. A process
    /// that spawns but exits non-zero is reported through
    /// [`CommandOutput::success`].
    fn run(&self, program: &str, args: &[&str]) -> Option<CommandOutput>;

    /// Run and keep stdout only when the process exited successfully.
    fn capture(&self, program: &str, args: &[&str]) -> Option<String> {
        match self.run(program, args) {
            Some(out) if out.success => Some(out.stdout),
            _ => None,
        }
    }
}

/// Runs real processes via `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Option<CommandOutput> {
        debug!(program, ?args, "running external command");
        match Command::new(program).args(args).output() {
            Ok(output) => Some(CommandOutput {
                success: output.status.success(),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            }),
            Err(e) => {
                debug!(program, error = %e, "failed to spawn external command");
                None
            }
        }
    }
}

pub mod testing {
    //! Scripted runner for tests in this workspace.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::{CommandOutput, CommandRunner};

    /// A runner that replays canned responses keyed by the full command line.
    #[derive(Default)]
    pub struct FakeRunner {
        responses: HashMap<String, CommandOutput>,
        pub calls: RefCell<Vec<String>>,
    }

    impl FakeRunner {
        pub fn new() -> Self {
            Self::default()
        }

        /// Register a successful response for a command line.
        pub fn on_success(mut self, command_line: &str, stdout: &str) -> Self {
            self.responses.insert(
                command_line.to_string(),
                CommandOutput {
                    success: true,
                    stdout: stdout.to_string(),
                },
            );
            self
        }

        /// Register a non-zero exit for a command line.
        pub fn on_failure(mut self, command_line: &str) -> Self {
            self.responses.insert(
                command_line.to_string(),
                CommandOutput {
                    success: false,
                    stdout: String::new(),
                },
            );
            self
        }
    }

    impl CommandRunner for FakeRunner {
        fn run(&self, program: &str, args: &[&str]) -> Option<CommandOutput> {
            let line = std::iter::once(program)
                .chain(args.iter().copied())
                .collect::<Vec<_>>()
                .join(" ");
            self.calls.borrow_mut().push(line.clone());
            self.responses.get(&line).cloned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeRunner;
    use super::*;

    #[test]
    fn test_capture_requires_success() {
        let runner = FakeRunner::new()
            .on_success("git describe --tags", "v1.2.3\n")
            .on_failure("git log");

        assert_eq!(
            runner.capture("git", &["describe", "--tags"]).as_deref(),
            Some("v1.2.3\n")
        );
        assert_eq!(runner.capture("git", &["log"]), None);
        assert_eq!(runner.capture("git", &["status"]), None);
    }

    #[test]
    fn test_system_runner_missing_program() {
        let runner = SystemRunner::new();
        assert!(runner.run("definitely-not-a-real-binary-xyz", &[]).is_none());
    }
}
