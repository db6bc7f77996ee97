//! Workspace helper tasks, run as `cargo xtask <command>`.

use anyhow::{Result, bail};

mod deny;
mod ios;
pub(crate) mod utils;

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let arg_strings: Vec<_> = std::env::args().skip(1).collect();
    let args: Vec<_> = arg_strings.iter().map(String::as_str).collect();

    match args.as_slice() {
        [] | ["-h"] | ["--help"] => print_help(),
        ["deny", rest @ ..] => deny::deny(rest)?,
        ["ios-smoke"] => ios::smoke()?,
        ["ios-sim-launch"] => ios::sim_launch()?,
        other => bail!("unknown xtask command {other:?}; see --help"),
    }
    Ok(())
}

fn print_help() {
    let help = "
    xtask help

    Subcommands
    deny: Run cargo-deny for all supported targets
    ios-smoke: Build the iOS static libraries, header, and XCFramework, then compile the smoke host for the simulator
    ios-sim-launch: Bundle the demo app and install/launch it in the iOS simulator

    Options
    -h, --help: print help and exit
        ";
    println!("{help}");
}
