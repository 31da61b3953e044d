//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BasenameCommand, CallCommand, CompletionsCommand, DirnameCommand, ExtnameCommand,
    FormatCommand, InfoCommand, IsAbsoluteCommand, JoinCommand, NormalizeCommand, ParseCommand,
    RelativeCommand, ResolveCommand, ToNamespacedPathCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use dualpath::DialectKind;
use std::path::PathBuf;

/// Command-line tool for POSIX and Windows path manipulation.
#[derive(Parser)]
#[command(name = "dualpath")]
#[command(version, about = "Manipulate POSIX and Windows paths as strings", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path dialect to use (defaults to the host's)
    #[arg(long, value_enum, global = true, ignore_case = true)]
    pub dialect: Option<DialectKind>,

    /// Working directory to resolve relative paths against
    #[arg(long, value_name = "PATH", global = true)]
    pub cwd: Option<String>,

    /// Configuration file to read
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve paths into an absolute path
    Resolve(ResolveCommand),

    /// Normalize a path
    Normalize(NormalizeCommand),

    /// Test whether a path is absolute
    IsAbsolute(IsAbsoluteCommand),

    /// Join path segments
    Join(JoinCommand),

    /// Relative path from one location to another
    Relative(RelativeCommand),

    /// Convert a path to its namespaced form
    ToNamespacedPath(ToNamespacedPathCommand),

    /// Directory portion of a path
    Dirname(DirnameCommand),

    /// Last portion of a path
    Basename(BasenameCommand),

    /// Extension of a path
    Extname(ExtnameCommand),

    /// Split a path into its components
    Parse(ParseCommand),

    /// Build a path from components
    Format(FormatCommand),

    /// Invoke an operation by name with JSON arguments
    Call(CallCommand),

    /// Show the dialect and host in effect
    Info(InfoCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
