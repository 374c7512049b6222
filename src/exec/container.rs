//! Container execution context
//!
//! Every invocation is indirected through `<runtime> exec -it <name> ...`
//! into a container that is already running. Existence checks run `which`
//! inside the container and read its exit code.

use tracing::debug;

use super::{check_status, spawn_status, ExecError, ProcessExit, StreamMode};

/// Runtime binary used when none is configured
pub const DEFAULT_RUNTIME: &str = "docker";

#[derive(Debug, Clone)]
pub struct ContainerContext {
    runtime: String,
    name: String,
    streams: StreamMode,
}

impl ContainerContext {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            runtime: DEFAULT_RUNTIME.to_string(),
            name: name.into(),
            streams: StreamMode::default(),
        }
    }

    pub fn with_runtime(mut self, runtime: impl Into<String>) -> Self {
        self.runtime = runtime.into();
        self
    }

    pub fn with_streams(mut self, streams: StreamMode) -> Self {
        self.streams = streams;
        self
    }

    pub fn runtime(&self) -> &str {
        &self.runtime
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments handed to the runtime to reach `program` inside the container
    pub fn exec_args<'a>(&'a self, program: &'a str, args: &[&'a str]) -> Vec<&'a str> {
        let mut full = vec!["exec", "-it", self.name.as_str(), program];
        full.extend_from_slice(args);
        full
    }

    pub fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        let status = spawn_status(&self.runtime, &self.exec_args(program, args), self.streams)?;
        check_status(program, &self.target(), status)
    }

    /// 0 means present, 1 means absent, anything else is indeterminate
    pub fn command_exists(&self, name: &str) -> Result<bool, ExecError> {
        let status = spawn_status(&self.runtime, &self.exec_args("which", &[name]), self.streams)
            .map_err(|err| ExecError::Lookup {
                name: name.to_string(),
                target: self.target(),
                reason: err.to_string(),
            })?;

        debug!(name, container = %self.name, code = ?status.code(), "probe finished");

        match status.code() {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            _ => Err(ExecError::Lookup {
                name: name.to_string(),
                target: self.target(),
                reason: format!("probe exited with {}", ProcessExit::from(status)),
            }),
        }
    }

    pub fn target(&self) -> String {
        format!("container `{}`", self.name)
    }
}
