//! Comando launch - Executa o volume de boot no QEMU

use anyhow::{Context, Result};
use xshell::Shell;

use crate::core::config::Config;
use crate::core::deploy::Deployer;
use crate::core::qemu;
use crate::core::runner::CommandRunner;
use crate::core::utils;

pub fn run(config: &Config, sh: &Shell) -> Result<()> {
    let root = Deployer::new(config, sh).root();
    if !config.dry_run && !sh.path_exists(&root) {
        utils::print_warning(
            "Launch",
            &format!("{} does not exist, run `ysos build` first", root.display()),
        );
    }

    utils::print_info("Launching", "qemu...");
    let runner = CommandRunner::new(config, sh);
    qemu::launch(config, &runner).context("launch failed")
}
