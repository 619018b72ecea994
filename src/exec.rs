//! External command execution
//!
//! Every invocation is echoed to the user before it runs, inherits the
//! terminal for its output, and is awaited to completion. A non-zero exit
//! aborts the caller.

use crate::error::{SetupError, SetupResult};
use console::style;
use std::fmt;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// A fully specified external command line
#[derive(Debug, Clone)]
pub struct CommandLine {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandLine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Working directory for the command (defaults to the caller's)
    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Run a command to completion, echoing it first
///
/// Output streams straight to the user's terminal. A spawn failure, a
/// non-zero exit, or signal termination maps to the matching `SetupError`;
/// the caller decides whether that is fatal.
pub async fn run(line: &CommandLine) -> SetupResult<()> {
    println!("{} {}", style(">>").blue().bold(), style(line).blue());
    debug!(command = %line, "spawning");

    let mut cmd = Command::new(&line.program);
    cmd.args(&line.args);
    if let Some(dir) = &line.cwd {
        cmd.current_dir(dir);
    }
    cmd.stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());

    let status = cmd.status().await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SetupError::ToolMissing {
                name: line.program.clone(),
            }
        } else {
            SetupError::spawn(line.to_string(), e)
        }
    })?;

    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(code) => Err(SetupError::CommandExited {
            command: line.to_string(),
            code,
        }),
        None => Err(SetupError::CommandSignaled {
            command: line.to_string(),
        }),
    }
}

/// Probe a tool by running `<program> --version`
///
/// Returns the first line of its output, or `None` when the tool is absent
/// or the probe fails.
pub async fn version_line(program: &str) -> Option<String> {
    let output = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .output()
        .await
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout.lines().next().map(|line| line.trim().to_string())
}
