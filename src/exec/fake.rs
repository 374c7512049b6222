//! Recording context for tests

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::{CommandContext, ExecError, ProcessExit};

/// Answers probes from a fixed set and records every call
#[derive(Debug, Default)]
pub struct RecordingContext {
    present: HashSet<String>,
    broken_probes: HashSet<String>,
    failing: HashMap<String, i32>,
    pub probes: RefCell<Vec<String>>,
    pub runs: RefCell<Vec<Vec<String>>>,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_command(mut self, name: &str) -> Self {
        self.present.insert(name.to_string());
        self
    }

    /// Probing `name` fails instead of answering
    pub fn with_broken_probe(mut self, name: &str) -> Self {
        self.broken_probes.insert(name.to_string());
        self
    }

    /// Running `program` exits with `code`
    pub fn with_failing_run(mut self, program: &str, code: i32) -> Self {
        self.failing.insert(program.to_string(), code);
        self
    }

    pub fn run_count(&self) -> usize {
        self.runs.borrow().len()
    }

    pub fn probe_count(&self) -> usize {
        self.probes.borrow().len()
    }

    pub fn last_run(&self) -> Option<Vec<String>> {
        self.runs.borrow().last().cloned()
    }
}

impl CommandContext for RecordingContext {
    fn run(&self, program: &str, args: &[&str]) -> Result<(), ExecError> {
        let mut call = vec![program.to_string()];
        call.extend(args.iter().map(|arg| arg.to_string()));
        self.runs.borrow_mut().push(call);

        match self.failing.get(program) {
            Some(code) => Err(ExecError::Exit {
                program: program.to_string(),
                target: self.target(),
                code: ProcessExit(Some(*code)),
            }),
            None => Ok(()),
        }
    }

    fn command_exists(&self, name: &str) -> Result<bool, ExecError> {
        self.probes.borrow_mut().push(name.to_string());

        if self.broken_probes.contains(name) {
            return Err(ExecError::Lookup {
                name: name.to_string(),
                target: self.target(),
                reason: "probe exited with status 125".to_string(),
            });
        }
        Ok(self.present.contains(name))
    }

    fn target(&self) -> String {
        "a recording context".to_string()
    }
}
