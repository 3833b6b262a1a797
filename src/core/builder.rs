//! Builder module - Core build functionality
//!
//! Builds the bootloader, the kernel and every app with cargo, in that order,
//! and stages each artifact into the boot volume as soon as it is compiled.

use std::path::{Path, PathBuf};
use xshell::Shell;

use super::apps::{self, App};
use super::config::{Config, Profile, boot_volume, packages, paths, targets};
use super::deploy::Deployer;
use super::error::Result;
use super::runner::{CARGO, Executor, Invocation};
use super::utils;

/// Get the project root directory
///
/// Walks up from `start` to the first directory holding `pkg/kernel`.
/// Falls back to `start` itself.
pub fn project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| dir.join(paths::KERNEL).is_dir())
        .unwrap_or(start)
        .to_path_buf()
}

/// Compiled output of `name`, relative to the project root
pub fn artifact(target: &str, profile: Profile, name: &str) -> PathBuf {
    Path::new(paths::TARGET)
        .join(target)
        .join(profile.dir())
        .join(name)
}

/// `cargo build [<profile flag>]` inside `dir`
pub fn cargo_build(cargo: &Path, profile: Profile, dir: impl Into<PathBuf>) -> Invocation {
    Invocation::new(cargo)
        .arg("build")
        .args(profile.flag())
        .current_dir(dir)
}

pub struct Builder<'a, E: Executor> {
    config: &'a Config,
    sh: &'a Shell,
    executor: &'a E,
    deployer: Deployer<'a>,
}

impl<'a, E: Executor> Builder<'a, E> {
    pub fn new(config: &'a Config, sh: &'a Shell, executor: &'a E) -> Self {
        Self {
            config,
            sh,
            executor,
            deployer: Deployer::new(config, sh),
        }
    }

    /// Build and stage everything. Stops at the first failure; whatever was
    /// staged before it stays in place.
    pub fn build_all(&self) -> Result<()> {
        let cargo = self.executor.locate(CARGO)?;

        self.build_bootloader(&cargo)?;
        self.build_kernel(&cargo)?;
        self.build_apps(&cargo)
    }

    /// The bootloader is always a release build
    pub fn build_bootloader(&self, cargo: &Path) -> Result<()> {
        utils::print_info("Building", "bootloader...");

        self.executor
            .run(&cargo_build(cargo, Profile::Release, paths::BOOTLOADER))?;

        let efi = format!("{}.efi", packages::BOOTLOADER);
        self.deployer.stage(
            artifact(targets::BOOTLOADER, Profile::Release, &efi),
            boot_volume::BOOTLOADER,
        )?;

        if self.sh.path_exists(paths::BOOT_CONFIG) {
            self.deployer
                .stage(paths::BOOT_CONFIG, boot_volume::BOOT_CONFIG)?;
        } else {
            utils::print_debug(self.config, "Skipping", "no kernel boot.conf");
        }

        Ok(())
    }

    pub fn build_kernel(&self, cargo: &Path) -> Result<()> {
        utils::print_info("Building", "kernel...");

        let profile = self.config.profile;
        self.executor
            .run(&cargo_build(cargo, profile, paths::KERNEL))?;
        self.deployer.stage(
            artifact(targets::KERNEL, profile, packages::KERNEL),
            boot_volume::KERNEL,
        )?;

        Ok(())
    }

    pub fn build_apps(&self, cargo: &Path) -> Result<()> {
        for dir in apps::discover(self.sh)? {
            let app = App::load(self.sh, &dir, self.config.manifest_scan)?;
            self.build_app(cargo, &app)?;
        }
        Ok(())
    }

    /// Artifact found by package name, staged by directory name
    pub fn build_app(&self, cargo: &Path, app: &App) -> Result<()> {
        utils::print_info("Building", &format!("app {}...", app.dir));

        let profile = self.config.profile;
        self.executor.run(&cargo_build(cargo, profile, app.path()))?;
        self.deployer.stage(
            artifact(targets::APP, profile, &app.package),
            boot_volume::app(&app.dir),
        )?;

        Ok(())
    }
}
