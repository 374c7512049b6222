//! Host execution context

use std::path::PathBuf;

use tracing::debug;

use super::{check_status, spawn_status, ExecError, StreamMode};

const HOST_TARGET: &str = "the host";

/// Runs commands as direct children of this process
#[derive(Debug, Clone, Default)]
pub struct HostContext {
    streams: StreamMode,
}

impl HostContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_streams(mut self, streams: StreamMode) -> Self {
        self.streams = streams;
        self
    }

    pub fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        let status = spawn_status(program, args, self.streams)?;
        check_status(program, HOST_TARGET, status)
    }

    /// Resolve `name` on this process's own `PATH`
    pub fn command_exists(&self, name: &str) -> Result<bool, ExecError> {
        lookup_outcome(name, which::which(name))
    }

    pub fn target(&self) -> String {
        HOST_TARGET.to_string()
    }
}

/// Nothing to search or nothing found means absent; anything else is a
/// lookup that could not be completed.
fn lookup_outcome(name: &str, resolved: Result<PathBuf, which::Error>) -> Result<bool, ExecError> {
    match resolved {
        Ok(path) => {
            debug!(name, path = %path.display(), "resolved on host");
            Ok(true)
        }
        Err(which::Error::CannotFindBinaryPath | which::Error::CannotGetCurrentDirAndPathListEmpty) => {
            Ok(false)
        }
        Err(err) => Err(ExecError::Lookup {
            name: name.to_string(),
            target: HOST_TARGET.to_string(),
            reason: err.to_string(),
        }),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn test_existing_command() {
        let host = HostContext::new();
        assert!(host.command_exists("sh").unwrap());
    }

    #[test]
    fn test_missing_command_is_false_not_error() {
        let host = HostContext::new();
        assert!(!host.command_exists("contiker-definitely-missing").unwrap());
    }

    #[test]
    fn test_empty_search_path_is_false_not_error() {
        let resolved = which::which_in("sh", Some(""), "/");
        assert!(!lookup_outcome("sh", resolved).unwrap());
        assert!(!lookup_outcome("sh", Err(which::Error::CannotGetCurrentDirAndPathListEmpty)).unwrap());
    }

    #[test]
    fn test_canonicalize_failure_is_lookup_error() {
        let err = lookup_outcome("sh", Err(which::Error::CannotCanonicalize)).unwrap_err();
        match err {
            ExecError::Lookup { name, target, .. } => {
                assert_eq!(name, "sh");
                assert_eq!(target, "the host");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_success() {
        let host = HostContext::new().with_streams(StreamMode::Quiet);
        host.run("true", &[]).unwrap();
    }

    #[test]
    fn test_run_nonzero_exit() {
        let host = HostContext::new().with_streams(StreamMode::Quiet);
        let err = host.run("sh", &["-c", "exit 3"]).unwrap_err();
        match err {
            ExecError::Exit { program, code, .. } => {
                assert_eq!(program, "sh");
                assert_eq!(code.0, Some(3));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_run_missing_binary() {
        let host = HostContext::new().with_streams(StreamMode::Quiet);
        let err = host.run("contiker-definitely-missing", &[]).unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }
}
