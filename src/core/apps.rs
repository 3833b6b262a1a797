//! Apps module - Discovers user applications under `pkg/app`

use serde::Deserialize;
use std::path::{Path, PathBuf};
use xshell::Shell;

use super::config::{ManifestScan, paths};
use super::error::{Error, Result};

/// A buildable application.
///
/// `dir` names the directory under `pkg/app` and the staged file under
/// `APP/`; `package` names the compiled binary. The two may differ.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct App {
    pub dir: String,
    pub package: String,
}

impl App {
    /// Source directory, relative to the project root
    pub fn path(&self) -> PathBuf {
        Path::new(paths::APPS).join(&self.dir)
    }

    /// Read the package name from `pkg/app/<dir>/Cargo.toml`
    pub fn load(sh: &Shell, dir: &str, scan: ManifestScan) -> Result<Self> {
        let manifest = Path::new(paths::APPS).join(dir).join(paths::MANIFEST);
        let text = sh.read_file(&manifest)?;

        let package = match scan {
            ManifestScan::Literal => scan_name(&text),
            ManifestScan::Strict => parse_name(&text).map_err(|source| Error::Manifest {
                path: manifest.clone(),
                source,
            })?,
        }
        .ok_or(Error::MissingPackageName { path: manifest })?;

        Ok(Self {
            dir: dir.to_string(),
            package,
        })
    }
}

/// Directory names of all apps. Empty when `pkg/app` does not exist.
pub fn discover(sh: &Shell) -> Result<Vec<String>> {
    if !sh.path_exists(paths::APPS) {
        return Ok(Vec::new());
    }

    let apps = sh
        .read_dir(paths::APPS)?
        .into_iter()
        .filter(|path| path.is_dir())
        .filter_map(|path| Some(path.file_name()?.to_string_lossy().into_owned()))
        .filter(|name| !paths::RESERVED_APP_DIRS.contains(&name.as_str()))
        .collect();

    Ok(apps)
}

/// First quoted token on the first line mentioning `name`.
///
/// Any line containing the substring matches, so a comment or dependency
/// entry ahead of `[package]` wins. `ManifestScan::Strict` avoids that.
pub fn scan_name(manifest: &str) -> Option<String> {
    let line = manifest.lines().find(|line| line.contains("name"))?;
    line.split('"').nth(1).map(str::to_string)
}

#[derive(Deserialize)]
struct Manifest {
    package: Option<Package>,
}

#[derive(Deserialize)]
struct Package {
    name: String,
}

fn parse_name(manifest: &str) -> std::result::Result<Option<String>, toml::de::Error> {
    let manifest: Manifest = toml::from_str(manifest)?;
    Ok(manifest.package.map(|p| p.name))
}
