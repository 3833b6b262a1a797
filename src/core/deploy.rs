//! Deploy module - Stages compiled artifacts into the boot volume

use std::path::{Path, PathBuf};
use xshell::Shell;

use super::config::Config;
use super::error::{Error, Result};
use super::utils;

/// Copies files into the boot volume (`--boot`, `esp` by default)
pub struct Deployer<'a> {
    config: &'a Config,
    sh: &'a Shell,
}

impl<'a> Deployer<'a> {
    pub fn new(config: &'a Config, sh: &'a Shell) -> Self {
        Self { config, sh }
    }

    /// Absolute path of the boot volume root
    pub fn root(&self) -> PathBuf {
        self.sh.current_dir().join(&self.config.boot)
    }

    /// Absolute path of an entry inside the boot volume
    pub fn destination(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.root().join(rel)
    }

    /// Copy `src` (relative to the project root) to `rel` inside the boot
    /// volume, creating parent directories as needed.
    pub fn stage(&self, src: impl AsRef<Path>, rel: impl AsRef<Path>) -> Result<PathBuf> {
        let src = self.sh.current_dir().join(src);
        let dst = self.destination(rel);

        if self.config.dry_run {
            utils::print_debug(
                self.config,
                "Would copy",
                &format!("{} -> {}", src.display(), dst.display()),
            );
            return Ok(dst);
        }

        if let Some(parent) = dst.parent() {
            if !self.sh.path_exists(parent) {
                self.sh.create_dir(parent)?;
            }
        }

        if !src.is_file() {
            return Err(Error::NotAFile { path: src });
        }

        utils::print_debug(
            self.config,
            "Copying",
            &format!("{} -> {}", src.display(), dst.display()),
        );
        self.sh.copy_file(&src, &dst)?;

        Ok(dst)
    }

    /// Remove the whole boot volume. Returns whether anything was there.
    pub fn remove_all(&self) -> Result<bool> {
        let root = self.root();
        if !self.sh.path_exists(&root) {
            return Ok(false);
        }

        if self.config.dry_run {
            utils::print_debug(self.config, "Would remove", &root.display().to_string());
            return Ok(true);
        }

        utils::print_debug(self.config, "Removing", &root.display().to_string());
        self.sh.remove_path(&root)?;
        Ok(true)
    }
}
