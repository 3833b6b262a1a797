//! Comando clean - Limpa artefatos

use anyhow::{Context, Result};
use xshell::Shell;

use crate::core::config::Config;
use crate::core::deploy::Deployer;
use crate::core::error;
use crate::core::runner::{CARGO, CommandRunner, Executor, Invocation};
use crate::core::utils;

pub fn run(config: &Config, sh: &Shell) -> Result<()> {
    let runner = CommandRunner::new(config, sh);
    clean(config, sh, &runner).context("clean failed")
}

/// Remove the boot volume, then `cargo clean` at the project root
pub fn clean(config: &Config, sh: &Shell, executor: &impl Executor) -> error::Result<()> {
    let deployer = Deployer::new(config, sh);
    if deployer.remove_all()? {
        utils::print_info("Removed", &deployer.root().display().to_string());
    }

    let cargo = executor.locate(CARGO)?;
    utils::print_info("Running", "cargo clean...");
    executor.run(&Invocation::new(cargo).arg("clean"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::testing::{Recorder, shell_in, write};
    use tempfile::tempdir;

    #[test]
    fn test_clean_removes_boot_volume() {
        let dir = tempdir().unwrap();
        write(dir.path(), "esp/EFI/BOOT/BOOTX64.EFI", "efi");
        write(dir.path(), "esp/KERNEL.ELF", "kernel");
        write(dir.path(), "esp/APP/shell", "shell");
        let sh = shell_in(dir.path());
        let config = Config::default();
        let recorder = Recorder::default();

        clean(&config, &sh, &recorder).unwrap();

        for staged in ["esp/EFI/BOOT/BOOTX64.EFI", "esp/KERNEL.ELF", "esp/APP/shell", "esp"] {
            assert!(!dir.path().join(staged).exists(), "{staged} still exists");
        }
        assert_eq!(recorder.lines(), vec!["cargo clean"]);
    }

    #[test]
    fn test_clean_without_boot_volume() {
        let dir = tempdir().unwrap();
        let sh = shell_in(dir.path());
        let config = Config::default();
        let recorder = Recorder::default();

        clean(&config, &sh, &recorder).unwrap();
        assert_eq!(recorder.calls().len(), 1);
    }

    #[test]
    fn test_clean_without_cargo() {
        let dir = tempdir().unwrap();
        write(dir.path(), "esp/KERNEL.ELF", "kernel");
        let sh = shell_in(dir.path());
        let config = Config::default();
        let recorder = Recorder::missing(CARGO);

        let err = clean(&config, &sh, &recorder).unwrap_err();

        assert!(matches!(err, Error::ToolNotFound { .. }));
        assert!(!dir.path().join("esp").exists());
        assert!(recorder.calls().is_empty());
    }
}
