//! ysos - Build System do YSOS
//!
//! Compila o bootloader UEFI, o kernel e os apps, monta o volume de boot
//! (`esp/`) e executa tudo no QEMU.
//!
//! # Uso
//! ```bash
//! ysos build -p debug
//! ysos run --debug
//! ysos launch -i -m 256M
//! ysos clean --dry-run
//! ```

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use xshell::Shell;

mod commands;
mod core;

use crate::core::builder;
use crate::core::config::{Config, ManifestScan, Profile, Task, defaults};
use crate::core::utils;

#[derive(Parser)]
#[command(name = "ysos")]
#[command(about = "Build script for YSOS", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    task: Option<Task>,

    /// Enable debug for qemu (gdb stub, halt at startup)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable interrupt output for qemu
    #[arg(short, long, global = true)]
    intdbg: bool,

    /// Set memory size for qemu
    #[arg(short, long, global = true, default_value = defaults::MEMORY)]
    memory: String,

    /// Set output for qemu
    #[arg(short, long, global = true, default_value = defaults::OUTPUT, allow_hyphen_values = true)]
    output: String,

    /// Set build profile for kernel and apps
    #[arg(short, long, global = true, value_enum, default_value_t = Profile::Release)]
    profile: Profile,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print what would be done without doing it
    #[arg(long, global = true)]
    dry_run: bool,

    /// Set BIOS path
    #[arg(long, global = true, default_value = defaults::BIOS)]
    bios: PathBuf,

    /// Set boot path
    #[arg(long, global = true, default_value = defaults::BOOT)]
    boot: PathBuf,

    /// Set listen address for gdbserver
    #[arg(long, global = true, default_value = defaults::DEBUG_LISTEN)]
    debug_listen: String,

    /// How to read package names from app manifests
    #[arg(long, global = true, value_enum, default_value_t = ManifestScan::Literal)]
    manifest_scan: ManifestScan,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            task: cli.task.unwrap_or_default(),
            debug: cli.debug,
            intdbg: cli.intdbg,
            memory: cli.memory,
            output: cli.output,
            profile: cli.profile,
            verbose: cli.verbose,
            dry_run: cli.dry_run,
            bios: cli.bios,
            boot: cli.boot,
            debug_listen: cli.debug_listen,
            manifest_scan: cli.manifest_scan,
        }
    }
}

fn main() {
    let config = Config::from(Cli::parse());

    if let Err(err) = run(&config) {
        utils::print_error("Error", &format!("{err:#}"));
        std::process::exit(1);
    }
}

#[allow(unused_mut)]
fn run(config: &Config) -> Result<()> {
    let mut sh = Shell::new()?;
    let root = builder::project_root(&sh.current_dir());
    sh.change_dir(&root);
    utils::print_debug(config, "Root", &root.display().to_string());

    match config.task {
        Task::Build => commands::build::run(config, &sh)?,
        Task::Clean => commands::clean::run(config, &sh)?,
        Task::Launch => commands::launch::run(config, &sh)?,
        Task::Run => commands::run::run(config, &sh)?,
        Task::Clippy => commands::clippy::run(config, &sh)?,
    }

    Ok(())
}
