//! Comando build - Compila o sistema e monta o volume de boot

use anyhow::{Context, Result};
use xshell::Shell;

use crate::core::builder::Builder;
use crate::core::config::Config;
use crate::core::deploy::Deployer;
use crate::core::runner::CommandRunner;
use crate::core::utils;

pub fn run(config: &Config, sh: &Shell) -> Result<()> {
    utils::print_debug(config, "Profile", config.profile.dir());

    let runner = CommandRunner::new(config, sh);
    Builder::new(config, sh, &runner)
        .build_all()
        .context("build failed")?;

    let root = Deployer::new(config, sh).root();
    utils::print_info("Done", &format!("boot volume ready at {}", root.display()));
    Ok(())
}
