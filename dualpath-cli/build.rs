//! Build script for dualpath-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("dualpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manipulate POSIX and Windows paths as strings")
        .long_about(
            "String-level path manipulation with POSIX and Windows rules, \
             independent of the host platform",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("dialect")
                .long("dialect")
                .help("Path dialect to use (defaults to the host's)")
                .value_parser(["posix", "win32"])
                .global(true),
        )
        .arg(
            Arg::new("cwd")
                .long("cwd")
                .help("Working directory to resolve relative paths against")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file to read")
                .value_name("FILE")
                .global(true),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve paths into an absolute path")
                .long_about("Process paths right to left until an absolute path is formed"),
            Command::new("normalize")
                .about("Normalize a path")
                .long_about("Collapse separators and resolve '.' and '..' segments"),
            Command::new("is-absolute")
                .about("Test whether a path is absolute")
                .long_about("Print true or false; with --check, exit 1 for relative paths"),
            Command::new("join")
                .about("Join path segments")
                .long_about("Join segments with the dialect separator and normalize"),
            Command::new("relative")
                .about("Relative path from one location to another"),
            Command::new("to-namespaced-path")
                .about("Convert a path to its namespaced form")
                .long_about("Prefix resolved Windows paths with \\\\?\\ (unchanged on POSIX)"),
            Command::new("dirname").about("Directory portion of a path"),
            Command::new("basename").about("Last portion of a path"),
            Command::new("extname").about("Extension of a path"),
            Command::new("parse")
                .about("Split a path into its components")
                .long_about("Print root, dir, base, name and ext as text or JSON"),
            Command::new("format").about("Build a path from components"),
            Command::new("call")
                .about("Invoke an operation by name with JSON arguments")
                .long_about("Type-check JSON arguments, run the operation and print JSON"),
            Command::new("info").about("Show the dialect and host in effect"),
            Command::new("validate").about("Validate a configuration file"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var("OUT_DIR").map_err(|e| io::Error::new(io::ErrorKind::NotFound, e))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("dualpath.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
