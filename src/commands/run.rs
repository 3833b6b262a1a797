//! Comando run - Build seguido de execução no QEMU

use anyhow::Result;
use xshell::Shell;

use crate::core::config::Config;

use super::{build, launch};

pub fn run(config: &Config, sh: &Shell) -> Result<()> {
    build::run(config, sh)?;
    launch::run(config, sh)
}
