//! External tool invocation.
//!
//! Every build chore shells out to some tool (pybabel, pip, zip). Whether a
//! nonzero exit is fatal differs between commands, so the policy is explicit
//! per call instead of implicit per call site.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::{Error, Result};

/// How a nonzero exit code from the external tool is treated.
///
/// `Fatal` turns it into [`Error::ToolFailed`]; `Ignore` records it in the
/// [`ToolOutcome`] and logs a warning, but the call still succeeds. The
/// translation commands use `Fatal`; the packaging and cleanup commands use
/// `Ignore` and report success even when the underlying tool failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitPolicy {
    Fatal,
    Ignore,
}

/// Result of a tool invocation that was allowed to complete.
#[derive(Debug, Clone, Copy)]
pub struct ToolOutcome {
    /// Whether the tool exited with code 0.
    pub success: bool,
    /// Exit code of the tool (-1 if terminated by a signal).
    pub exit_code: i32,
}

/// Run an external tool with inherited stdio, blocking until it exits.
///
/// Output streams straight to the terminal; nothing is captured. No timeout
/// is applied, so a hanging tool stalls the whole command.
pub fn run_tool(
    program: &str,
    args: &[&str],
    cwd: &Path,
    policy: ExitPolicy,
) -> Result<ToolOutcome> {
    tracing::debug!(tool = program, ?args, "running external tool");

    let status = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| Error::ToolSpawn {
            tool: program.to_string(),
            source: e,
        })?;

    let exit_code = status.code().unwrap_or(-1);
    let outcome = ToolOutcome {
        success: status.success(),
        exit_code,
    };

    if !outcome.success {
        match policy {
            ExitPolicy::Fatal => {
                return Err(Error::ToolFailed {
                    tool: program.to_string(),
                    code: exit_code,
                });
            }
            ExitPolicy::Ignore => {
                tracing::warn!(tool = program, exit_code, "tool failed, ignoring");
            }
        }
    }

    Ok(outcome)
}
