//! Configuration module - Build configuration and constants

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

/// Build targets
pub mod targets {
    /// UEFI bootloader target
    pub const BOOTLOADER: &str = "x86_64-unknown-uefi";

    /// Kernel target (bare metal)
    pub const KERNEL: &str = "x86_64-unknown-none";

    /// User applications target
    pub const APP: &str = "x86_64-unknown-ysos";
}

/// Package names of the fixed components
pub mod packages {
    /// Bootloader package (compiled as `<name>.efi`)
    pub const BOOTLOADER: &str = "ysos_boot";

    /// Kernel package
    pub const KERNEL: &str = "ysos_kernel";
}

/// Source tree paths, relative to the project root
pub mod paths {
    pub const BOOTLOADER: &str = "pkg/boot";
    pub const KERNEL: &str = "pkg/kernel";
    pub const APPS: &str = "pkg/app";
    pub const BOOT_CONFIG: &str = "pkg/kernel/config/boot.conf";
    pub const TARGET: &str = "target";
    pub const MANIFEST: &str = "Cargo.toml";

    /// Directories under `pkg/app` that are not applications
    pub const RESERVED_APP_DIRS: &[&str] = &["config", ".cargo"];
}

/// Boot volume layout, relative to the boot volume root
pub mod boot_volume {
    use std::path::PathBuf;

    pub const BOOTLOADER: &str = "EFI/BOOT/BOOTX64.EFI";
    pub const BOOT_CONFIG: &str = "EFI/BOOT/boot.conf";
    pub const KERNEL: &str = "KERNEL.ELF";
    pub const APPS: &str = "APP";

    /// Destination of an application, keyed by its directory name
    pub fn app(dir_name: &str) -> PathBuf {
        PathBuf::from(APPS).join(dir_name)
    }
}

/// Command line defaults
pub mod defaults {
    pub const MEMORY: &str = "96M";
    pub const OUTPUT: &str = "-nographic";
    pub const BIOS: &str = "assets/OVMF.fd";
    pub const BOOT: &str = "esp";
    pub const DEBUG_LISTEN: &str = "0.0.0.0:1234";
}

/// Build profile for the kernel and the apps
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Profile {
    #[default]
    Release,
    Debug,
    ReleaseWithDebug,
}

impl Profile {
    /// Flag passed to `cargo build`, if any
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Profile::Release => Some("--release"),
            Profile::Debug => None,
            Profile::ReleaseWithDebug => Some("--profile=release-with-debug"),
        }
    }

    /// Output subdirectory under `target/<triple>/`
    pub fn dir(self) -> &'static str {
        match self {
            Profile::Release => "release",
            Profile::Debug => "debug",
            Profile::ReleaseWithDebug => "release-with-debug",
        }
    }
}

/// How an app's package name is read from its manifest
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ManifestScan {
    /// First line containing `name`, first quoted token on it
    #[default]
    Literal,
    /// Parse the manifest and read `package.name`
    Strict,
}

/// Task to execute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Subcommand)]
pub enum Task {
    /// Compila bootloader, kernel e apps e monta o volume de boot
    #[default]
    Build,
    /// Remove o volume de boot e roda cargo clean
    Clean,
    /// Inicia o QEMU com o volume de boot atual
    Launch,
    /// Build seguido de launch
    Run,
    /// Roda cargo fmt e clippy em todos os componentes
    Clippy,
}

/// Resolved options for one run. Built once in `main`, read-only afterwards.
#[derive(Clone, Debug)]
pub struct Config {
    pub task: Task,
    /// Expose a gdb stub and halt at startup
    pub debug: bool,
    /// Trace interrupts and CPU resets, no reboot on triple fault
    pub intdbg: bool,
    pub memory: String,
    /// Raw QEMU output tokens, e.g. `-nographic`
    pub output: String,
    pub profile: Profile,
    pub verbose: bool,
    pub dry_run: bool,
    pub bios: PathBuf,
    pub boot: PathBuf,
    pub debug_listen: String,
    pub manifest_scan: ManifestScan,
}

impl Config {
    /// Whether `[?]` lines are printed
    pub fn show_debug(&self) -> bool {
        self.verbose || self.dry_run
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            task: Task::default(),
            debug: false,
            intdbg: false,
            memory: defaults::MEMORY.to_string(),
            output: defaults::OUTPUT.to_string(),
            profile: Profile::default(),
            verbose: false,
            dry_run: false,
            bios: PathBuf::from(defaults::BIOS),
            boot: PathBuf::from(defaults::BOOT),
            debug_listen: defaults::DEBUG_LISTEN.to_string(),
            manifest_scan: ManifestScan::default(),
        }
    }
}
