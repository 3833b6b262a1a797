//! Runner module - Executes external tools
//!
//! Every process the build touches goes through an [`Executor`]. The real one,
//! [`CommandRunner`], runs commands synchronously with inherited stdio and
//! honours `--dry-run`. Tests substitute a recording executor.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use xshell::Shell;

use super::config::Config;
use super::error::{Error, Result};
use super::utils;

/// Toolchain executable
pub const CARGO: &str = "cargo";

/// Hypervisor executable
pub const QEMU: &str = "qemu-system-x86_64";

/// An argument vector plus an optional working directory
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    argv: Vec<OsString>,
    workdir: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            argv: vec![program.into()],
            workdir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.argv.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.argv.extend(args.into_iter().map(Into::into));
        self
    }

    /// Directory to run in, relative to the project root
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn program(&self) -> &OsStr {
        &self.argv[0]
    }

    pub fn argv(&self) -> &[OsString] {
        &self.argv
    }

    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// The argument vector joined by spaces
    pub fn command_line(&self) -> String {
        self.argv
            .iter()
            .map(|a| a.to_string_lossy())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())?;
        if let Some(dir) = &self.workdir {
            write!(f, " in {}", dir.display())?;
        }
        Ok(())
    }
}

/// What happened to an invocation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The process ran; `None` when it was killed by a signal
    Exited(Option<i32>),
    /// Dry-run: only logged
    Skipped,
}

impl Outcome {
    pub fn success(self) -> bool {
        matches!(self, Outcome::Exited(Some(0)) | Outcome::Skipped)
    }
}

pub trait Executor {
    /// Run the invocation to completion and report how it ended
    fn execute(&self, invocation: &Invocation) -> Result<Outcome>;

    /// Find a tool on the search path
    fn locate(&self, tool: &str) -> Result<PathBuf> {
        locate(tool)
    }

    /// Like [`Executor::execute`], but a non-zero exit is an error
    fn run(&self, invocation: &Invocation) -> Result<()> {
        match self.execute(invocation)? {
            outcome if outcome.success() => Ok(()),
            Outcome::Exited(code) => Err(Error::ProcessFailure {
                command: invocation.command_line(),
                code,
            }),
            Outcome::Skipped => Ok(()),
        }
    }
}

/// Runs commands for real, relative to the shell's directory
pub struct CommandRunner<'a> {
    config: &'a Config,
    sh: &'a Shell,
}

impl<'a> CommandRunner<'a> {
    pub fn new(config: &'a Config, sh: &'a Shell) -> Self {
        Self { config, sh }
    }
}

impl Executor for CommandRunner<'_> {
    fn execute(&self, invocation: &Invocation) -> Result<Outcome> {
        utils::print_debug(self.config, "Executing", &invocation.to_string());

        if self.config.dry_run {
            return Ok(Outcome::Skipped);
        }

        let dir = match invocation.workdir() {
            Some(dir) => self.sh.current_dir().join(dir),
            None => self.sh.current_dir(),
        };

        let status = Command::new(invocation.program())
            .args(&invocation.argv()[1..])
            .current_dir(dir)
            .status()
            .map_err(|source| Error::Spawn {
                command: invocation.command_line(),
                source,
            })?;

        Ok(Outcome::Exited(status.code()))
    }
}

/// Find `tool` on PATH, then in platform-specific fallback directories
pub fn locate(tool: &str) -> Result<PathBuf> {
    if let Ok(path) = which::which(tool) {
        return Ok(path);
    }

    for dir in fallback_dirs(tool) {
        if let Ok(path) = which::which_in(tool, Some(dir), dir) {
            return Ok(path);
        }
    }

    Err(Error::ToolNotFound {
        tool: tool.to_string(),
    })
}

#[cfg(windows)]
fn fallback_dirs(tool: &str) -> &'static [&'static str] {
    match tool {
        QEMU => &[r"C:\Program Files\qemu"],
        _ => &[],
    }
}

#[cfg(not(windows))]
fn fallback_dirs(_tool: &str) -> &'static [&'static str] {
    &[]
}
