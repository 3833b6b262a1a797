//! Comando clippy - Formatação e linter em todos os componentes

use anyhow::{Context, Result};
use std::path::Path;
use xshell::Shell;

use crate::core::apps;
use crate::core::config::{Config, paths};
use crate::core::error;
use crate::core::runner::{CARGO, CommandRunner, Executor, Invocation};
use crate::core::utils;

pub fn run(config: &Config, sh: &Shell) -> Result<()> {
    let runner = CommandRunner::new(config, sh);
    lint(sh, &runner).context("clippy failed")
}

/// `cargo fmt` on the whole tree, then clippy on the kernel and every app
pub fn lint(sh: &Shell, executor: &impl Executor) -> error::Result<()> {
    let cargo = executor.locate(CARGO)?;

    utils::print_info("Running", "cargo fmt on root...");
    executor.run(&Invocation::new(&cargo).args(["+nightly", "fmt", "--all"]))?;

    utils::print_info("Running", "clippy on kernel...");
    executor.run(&Invocation::new(&cargo).arg("clippy").current_dir(paths::KERNEL))?;

    for app in apps::discover(sh)? {
        utils::print_info("Running", &format!("clippy on app {app}..."));
        let dir = Path::new(paths::APPS).join(&app);
        executor.run(&Invocation::new(&cargo).arg("clippy").current_dir(dir))?;
    }

    Ok(())
}
