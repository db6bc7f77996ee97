use std::process::Command;

use anyhow::{Context, Result, bail};

/// Echoes a command in a copy-pasteable form.
pub(crate) fn print_cmd(cmd: &Command) {
    let args: Vec<_> = cmd
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    println!("> {} {}", cmd.get_program().to_string_lossy(), args.join(" "));
}

/// Echoes and runs a command, failing with context when it exits nonzero.
pub(crate) fn run_checked(cmd: &mut Command, what: &str) -> Result<()> {
    print_cmd(cmd);
    let status = cmd
        .status()
        .with_context(|| format!("failed to spawn {what}"))?;
    if !status.success() {
        bail!("{what} failed with {status}");
    }
    Ok(())
}
