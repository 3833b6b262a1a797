//! QEMU module - Composes the hypervisor command line
//!
//! Argument assembly is a pure function of [`Config`]; only [`launch`] touches
//! the outside world, through an [`Executor`].

use std::ffi::OsString;

use super::config::Config;
use super::error::Result;
use super::runner::{Executor, Invocation, QEMU};

/// Debugging hook. At most one is active per launch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DebugHook {
    None,
    /// gdb stub on `tcp:<listen>`, CPU halted until a debugger continues
    GdbStub { listen: String },
    /// Log interrupts and CPU resets; stop instead of rebooting on triple fault
    InterruptTrace,
}

impl DebugHook {
    /// `--debug` wins over `--intdbg`
    pub fn from_config(config: &Config) -> Self {
        if config.debug {
            DebugHook::GdbStub {
                listen: config.debug_listen.clone(),
            }
        } else if config.intdbg {
            DebugHook::InterruptTrace
        } else {
            DebugHook::None
        }
    }

    pub fn args(&self) -> Vec<String> {
        match self {
            DebugHook::None => Vec::new(),
            DebugHook::GdbStub { listen } => {
                vec!["-gdb".to_string(), format!("tcp:{listen}"), "-S".to_string()]
            }
            DebugHook::InterruptTrace => vec![
                "-no-reboot".to_string(),
                "-d".to_string(),
                "int,cpu_reset".to_string(),
            ],
        }
    }
}

/// Everything after the executable name
pub fn arguments(config: &Config) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-bios".into(), config.bios.clone().into()];
    args.extend(["-net", "none"].map(OsString::from));
    args.extend(config.output.split_whitespace().map(OsString::from));
    args.extend(["-m", config.memory.as_str()].map(OsString::from));

    let mut drive = OsString::from("format=raw,file=fat:");
    drive.push(&config.boot);
    args.push("-drive".into());
    args.push(drive);
    args.push("-snapshot".into());

    args.extend(DebugHook::from_config(config).args().into_iter().map(OsString::from));
    args
}

/// Find QEMU and boot the staged volume
pub fn launch(config: &Config, executor: &impl Executor) -> Result<()> {
    let qemu = executor.locate(QEMU)?;
    executor.run(&Invocation::new(qemu).args(arguments(config)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;
    use crate::core::testing::Recorder;

    fn rendered(config: &Config) -> Vec<String> {
        arguments(config)
            .into_iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_default_arguments() {
        assert_eq!(
            rendered(&Config::default()),
            vec![
                "-bios",
                "assets/OVMF.fd",
                "-net",
                "none",
                "-nographic",
                "-m",
                "96M",
                "-drive",
                "format=raw,file=fat:esp",
                "-snapshot",
            ]
        );
    }

    #[test]
    fn test_output_tokens_are_split() {
        let config = Config {
            output: "-serial stdio  -display none".to_string(),
            memory: "256M".to_string(),
            boot: "build/esp".into(),
            ..Config::default()
        };
        let args = rendered(&config);
        assert_eq!(&args[4..8], ["-serial", "stdio", "-display", "none"]);
        assert_eq!(&args[8..10], ["-m", "256M"]);
        assert!(args.contains(&"format=raw,file=fat:build/esp".to_string()));
    }

    #[test]
    fn test_gdb_stub() {
        let config = Config {
            debug: true,
            intdbg: true,
            debug_listen: "127.0.0.1:9000".to_string(),
            ..Config::default()
        };
        let args = rendered(&config);
        assert_eq!(&args[args.len() - 3..], ["-gdb", "tcp:127.0.0.1:9000", "-S"]);
        assert!(!args.contains(&"-no-reboot".to_string()));
        assert!(!args.contains(&"int,cpu_reset".to_string()));
    }

    #[test]
    fn test_interrupt_trace() {
        let config = Config {
            intdbg: true,
            ..Config::default()
        };
        let args = rendered(&config);
        assert_eq!(&args[args.len() - 3..], ["-no-reboot", "-d", "int,cpu_reset"]);
        assert!(!args.contains(&"-gdb".to_string()));
        assert_eq!(DebugHook::from_config(&config), DebugHook::InterruptTrace);
    }

    #[test]
    fn test_no_hook() {
        assert_eq!(DebugHook::from_config(&Config::default()), DebugHook::None);
        assert!(DebugHook::None.args().is_empty());
    }

    #[test]
    fn test_launch_runs_qemu() {
        let recorder = Recorder::default();
        launch(&Config::default(), &recorder).unwrap();

        let calls = recorder.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].program(), QEMU);
        assert_eq!(calls[0].workdir(), None);
        assert!(calls[0].command_line().ends_with("fat:esp -snapshot"));
    }

    #[test]
    fn test_launch_without_qemu() {
        let recorder = Recorder::missing(QEMU);
        let err = launch(&Config::default(), &recorder).unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { ref tool } if tool == QEMU));
        assert!(recorder.calls().is_empty());
    }
}
