use std::process::Command;

use anyhow::Result;

use crate::utils;

/// Targets we ship or cross-compile for; cargo-deny resolves a distinct
/// dependency graph per target.
const TARGETS: &[&str] = &[
    "aarch64-apple-darwin",
    "aarch64-apple-ios",
    "aarch64-apple-ios-sim",
    "x86_64-pc-windows-msvc",
    "x86_64-unknown-linux-gnu",
];

pub(crate) fn deny(extra: &[&str]) -> Result<()> {
    for target in TARGETS {
        let mut cmd = Command::new("cargo");
        cmd.args(["deny", "--all-features", "--target", target, "check"]);
        cmd.args(extra);
        utils::run_checked(&mut cmd, &format!("cargo deny ({target})"))?;
    }
    Ok(())
}
