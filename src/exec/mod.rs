//! Execution contexts
//!
//! An execution context decides *where* a command runs: directly on the
//! host, or inside an already-running container reached through the
//! runtime's `exec` indirection. Package managers are written against the
//! [`CommandContext`] contract only, so the same install logic works for
//! both.

mod container;
#[cfg(test)]
pub(crate) mod fake;
mod host;

pub use container::{ContainerContext, DEFAULT_RUNTIME};
pub use host::HostContext;

use std::fmt;
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::debug;

/// Failure of a single invocation or existence probe
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("could not start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {code} on {target}")]
    Exit {
        program: String,
        target: String,
        code: ProcessExit,
    },

    #[error("could not determine whether `{name}` exists on {target}: {reason}")]
    Lookup {
        name: String,
        target: String,
        reason: String,
    },
}

/// Exit code of a finished process; `None` when it was ended by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessExit(pub Option<i32>);

impl From<ExitStatus> for ProcessExit {
    fn from(status: ExitStatus) -> Self {
        ProcessExit(status.code())
    }
}

impl fmt::Display for ProcessExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "status {}", code),
            None => write!(f, "a signal"),
        }
    }
}

/// How the standard streams of an invoked process are wired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StreamMode {
    /// Pass stdin/stdout/stderr through untouched (needed for `sudo` prompts)
    #[default]
    Inherit,
    /// Bind every stream to the null device
    Quiet,
}

impl StreamMode {
    fn apply(self, command: &mut Command) {
        match self {
            StreamMode::Inherit => {
                command
                    .stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            StreamMode::Quiet => {
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
        }
    }
}

/// The capability shared by every execution context
pub trait CommandContext {
    /// Run `program` with `args`, succeeding only on exit status 0.
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError>;

    /// Whether `name` resolves to an executable in the target environment.
    ///
    /// Absence is `Ok(false)`. An error means the check itself could not be
    /// performed.
    fn command_exists(&self, name: &str) -> Result<bool, ExecError>;

    /// Human readable description of the target, used in messages
    fn target(&self) -> String;
}

/// The execution context selected once by the CLI layer
#[derive(Debug, Clone)]
pub enum ExecutionContext {
    Host(HostContext),
    Container(ContainerContext),
}

impl ExecutionContext {
    /// Run directly on the host
    pub fn host() -> Self {
        ExecutionContext::Host(HostContext::new())
    }

    /// Run inside the running container `name`, reached through `runtime`
    pub fn container(runtime: impl Into<String>, name: impl Into<String>) -> Self {
        ExecutionContext::Container(ContainerContext::new(name).with_runtime(runtime))
    }

    /// Same target, different stream wiring
    pub fn with_streams(self, streams: StreamMode) -> Self {
        match self {
            ExecutionContext::Host(host) => ExecutionContext::Host(host.with_streams(streams)),
            ExecutionContext::Container(container) => {
                ExecutionContext::Container(container.with_streams(streams))
            }
        }
    }
}

impl CommandContext for ExecutionContext {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        match self {
            ExecutionContext::Host(host) => host.run(program, args),
            ExecutionContext::Container(container) => container.run(program, args),
        }
    }

    fn command_exists(&self, name: &str) -> Result<bool, ExecError> {
        match self {
            ExecutionContext::Host(host) => host.command_exists(name),
            ExecutionContext::Container(container) => container.command_exists(name),
        }
    }

    fn target(&self) -> String {
        match self {
            ExecutionContext::Host(host) => host.target(),
            ExecutionContext::Container(container) => container.target(),
        }
    }
}

/// Spawn `program` in the foreground and wait for it
pub(crate) fn spawn_status(
    program: &str,
    args: &[&str],
    streams: StreamMode,
) -> Result<ExitStatus, ExecError> {
    debug!(program, ?args, "spawning process");

    let mut command = Command::new(program);
    command.args(args);
    streams.apply(&mut command);

    command.status().map_err(|source| ExecError::Spawn {
        program: program.to_string(),
        source,
    })
}

pub(crate) fn check_status(program: &str, target: &str, status: ExitStatus) -> Result<(), ExecError> {
    if status.success() {
        Ok(())
    } else {
        Err(ExecError::Exit {
            program: program.to_string(),
            target: target.to_string(),
            code: status.into(),
        })
    }
}
