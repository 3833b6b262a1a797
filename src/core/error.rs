//! Error module - Failure kinds raised by the build pipeline

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required executable is not on the search path
    #[error("{tool} not found in PATH")]
    ToolNotFound { tool: String },

    /// An external command exited unsuccessfully
    #[error("`{command}` failed with {}", describe_exit(.code))]
    ProcessFailure { command: String, code: Option<i32> },

    /// A staging source is missing or not a regular file
    #[error("{} is not a file", .path.display())]
    NotAFile { path: PathBuf },

    #[error("failed to execute `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("no package name found in {}", .path.display())]
    MissingPackageName { path: PathBuf },

    #[error("failed to parse {}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Shell(#[from] xshell::Error),
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_failure_message() {
        let err = Error::ProcessFailure {
            command: "cargo build --release".to_string(),
            code: Some(101),
        };
        assert_eq!(
            err.to_string(),
            "`cargo build --release` failed with code 101"
        );
    }

    #[test]
    fn test_signal_termination_message() {
        let err = Error::ProcessFailure {
            command: "qemu-system-x86_64".to_string(),
            code: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn test_not_a_file_message() {
        let err = Error::NotAFile {
            path: PathBuf::from("target/missing"),
        };
        assert_eq!(err.to_string(), "target/missing is not a file");
    }
}
