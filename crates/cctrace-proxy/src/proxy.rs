use std::process::{Command, ExitStatus};

use anyhow::{Context, Result, anyhow};
use cctrace_core::{locate_tool, resolve_tool_name};

use crate::recorder;

/// Run the real tool and return the exit code the proxy must report.
///
/// The wrapped tool owns the process's observable behavior: argv passes
/// through positionally with index 0 substituted, environment and all three
/// standard streams are inherited, and the child's exit code propagates
/// verbatim. Recording happens only after a successful run and cannot change
/// the returned code.
pub fn run(argv: &[String]) -> Result<i32> {
    let invoked = argv.first().map(String::as_str).unwrap_or_default();
    let tool = resolve_tool_name(invoked);
    let tool_path =
        locate_tool(&tool).ok_or_else(|| anyhow!("could not find '{}' in PATH", tool))?;

    let status = Command::new(&tool_path)
        .args(&argv[1..])
        .status()
        .with_context(|| format!("could not spawn {}", tool_path.display()))?;

    let code = exit_code(status);
    if code == 0 {
        let mut effective = Vec::with_capacity(argv.len());
        effective.push(tool);
        effective.extend(argv[1..].iter().cloned());
        recorder::record(&effective);
    }

    Ok(code)
}

/// Translate a wait status into the proxy's exit code.
///
/// Normal exits propagate verbatim; a signal-terminated child reports the
/// generic failure code 1.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
