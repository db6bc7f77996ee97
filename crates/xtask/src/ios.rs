//! iOS build and simulator tasks.
//!
//! `smoke` produces the artifacts a Swift host links against (static
//! libraries, generated header, XCFramework) and proves the smoke host
//! compiles for the simulator. `sim_launch` drives a full bundle → install →
//! launch cycle against CoreSimulator.

use std::{
    env,
    path::{Path, PathBuf},
    process::Command,
};

use anyhow::{Context, Result, bail};

use crate::utils;

const BUILD_SCRIPT: &str = "scripts/build_ios_host.sh";
const XCFRAMEWORK: &str = "target/ios/LamassuHost.xcframework";
const HEADER: &str = "target/ios/include/lamassu_host.h";

const SIM_TARGET: &str = "aarch64-apple-ios-sim";
const DEFAULT_DEVICE: &str = "iPhone 16";
const BUNDLE_ID: &str = "dev.lamassu.demo";
const BUNDLE_APP: &str = "target/aarch64-apple-ios-sim/debug/bundle/ios/Lamassu Demo.app";

pub(crate) fn smoke() -> Result<()> {
    ensure_macos()?;
    let root = workspace_root()?;

    run_build_script(&root)?;
    check_artifacts(&root)?;

    // The smoke host compiling for the simulator target is the cheap proxy
    // for "a host app can link and boot this".
    let mut cmd = Command::new("cargo");
    cmd.args(["build", "-p", "lamassu-smoke", "--target", SIM_TARGET])
        .current_dir(&root);
    utils::run_checked(&mut cmd, "simulator smoke build")?;

    println!("iOS smoke build finished successfully.");
    Ok(())
}

pub(crate) fn sim_launch() -> Result<()> {
    ensure_macos()?;
    let root = workspace_root()?;

    let mut cmd = Command::new("cargo");
    cmd.args(["bundle", "-p", "lamassu-demo", "--target", SIM_TARGET])
        .current_dir(&root);
    utils::run_checked(&mut cmd, "cargo bundle")?;

    let device =
        env::var("LAMASSU_SIM_DEVICE").unwrap_or_else(|_| DEFAULT_DEVICE.to_string());
    boot_simulator(&device);

    let app = root.join(BUNDLE_APP);
    if !app.exists() {
        bail!("bundle missing at {}; did cargo-bundle change layout?", app.display());
    }

    let mut cmd = Command::new("xcrun");
    cmd.args(["simctl", "install", "booted"]).arg(&app).current_dir(&root);
    utils::run_checked(&mut cmd, "simctl install")?;

    let mut cmd = Command::new("xcrun");
    cmd.args(["simctl", "launch", "--console", "booted", BUNDLE_ID])
        .current_dir(&root);
    utils::run_checked(&mut cmd, "simctl launch")?;

    Ok(())
}

fn ensure_macos() -> Result<()> {
    if cfg!(target_os = "macos") {
        Ok(())
    } else {
        bail!("iOS tasks require macOS with Xcode command-line tools")
    }
}

fn workspace_root() -> Result<PathBuf> {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .context("xtask workspace layout changed")
}

fn run_build_script(root: &Path) -> Result<()> {
    let script = root.join(BUILD_SCRIPT);
    if !script.exists() {
        bail!("missing helper script at {}", script.display());
    }

    let mut cmd = Command::new("bash");
    cmd.arg(script).current_dir(root);
    utils::run_checked(&mut cmd, "iOS artifact build script")
}

fn check_artifacts(root: &Path) -> Result<()> {
    for artifact in [XCFRAMEWORK, HEADER] {
        let path = root.join(artifact);
        if !path.exists() {
            bail!("expected artifact missing at {}", path.display());
        }
    }
    Ok(())
}

fn boot_simulator(device: &str) {
    let mut cmd = Command::new("xcrun");
    cmd.args(["simctl", "boot", device]);
    utils::print_cmd(&cmd);

    // `simctl boot` fails when the device is already booted; that is fine.
    match cmd.status() {
        Ok(status) if status.success() => {}
        _ => println!("simulator '{device}' may already be booted; continuing"),
    }
}
