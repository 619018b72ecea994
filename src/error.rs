//! Error types for rtype-setup
//!
//! All modules use `SetupResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for rtype-setup operations
pub type SetupResult<T> = Result<T, SetupError>;

/// All errors that can occur in rtype-setup
#[derive(Error, Debug)]
pub enum SetupError {
    // External tool errors
    #[error("Required tool not found on PATH: {name}")]
    ToolMissing { name: String },

    #[error("Failed to launch command: {command}")]
    CommandSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command failed: {command} (exit code {code})")]
    CommandExited { command: String, code: i32 },

    #[error("Command terminated by signal: {command}")]
    CommandSignaled { command: String },

    // Bootstrap environment errors
    #[error("vcpkg bootstrap script not found: {0}")]
    BootstrapScriptMissing(PathBuf),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // General errors
    #[error("{0}")]
    User(String),
}

impl SetupError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command spawn error
    pub fn spawn(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandSpawn {
            command: command.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::ToolMissing { name } => match name.as_str() {
                "git" => Some("Install git and re-run"),
                "cmake" => Some("Install CMake 3.21 or newer and re-run"),
                _ => None,
            },
            Self::BootstrapScriptMissing(_) => {
                Some("Run: git submodule update --init --recursive")
            }
            _ => None,
        }
    }

    /// Process exit code for this error
    ///
    /// A failed external command propagates its own exit code when it fits
    /// a process exit status; everything else exits 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CommandExited { code, .. } if (1..=255).contains(code) => *code as u8,
            _ => 1,
        }
    }
}
