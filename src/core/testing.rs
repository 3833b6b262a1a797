//! Test helpers shared by the command and core tests

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use xshell::Shell;

use super::error::Result;
use super::runner::{Executor, Invocation, Outcome};

#[allow(unused_mut)]
pub fn shell_in(dir: &Path) -> Shell {
    let mut sh = Shell::new().unwrap();
    sh.change_dir(dir);
    sh
}

/// Write `contents` to `root/rel`, creating parent directories
pub fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

/// Records every invocation instead of running it
#[derive(Default)]
pub struct Recorder {
    calls: RefCell<Vec<Invocation>>,
    /// Invocations whose workdir equals this exit with code 101
    fail_in: Option<PathBuf>,
    /// Tools `locate` pretends are missing
    missing: Vec<String>,
}

impl Recorder {
    pub fn failing_in(dir: impl Into<PathBuf>) -> Self {
        Self {
            fail_in: Some(dir.into()),
            ..Self::default()
        }
    }

    pub fn missing(tool: &str) -> Self {
        Self {
            missing: vec![tool.to_string()],
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    /// Each call rendered with its workdir
    pub fn lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.to_string()).collect()
    }
}

impl Executor for Recorder {
    fn execute(&self, invocation: &Invocation) -> Result<Outcome> {
        self.calls.borrow_mut().push(invocation.clone());
        if self.fail_in.is_some() && invocation.workdir() == self.fail_in.as_deref() {
            return Ok(Outcome::Exited(Some(101)));
        }
        Ok(Outcome::Exited(Some(0)))
    }

    fn locate(&self, tool: &str) -> Result<PathBuf> {
        if self.missing.iter().any(|m| m == tool) {
            return Err(super::error::Error::ToolNotFound {
                tool: tool.to_string(),
            });
        }
        Ok(PathBuf::from(tool))
    }
}
