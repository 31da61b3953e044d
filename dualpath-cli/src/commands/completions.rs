//! Shell completion generation command.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

const BIN_NAME: &str = "dualpath";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        eprintln!("# Generating {} completion script", self.shell);
        match self.shell {
            Shell::Bash => {
                eprintln!("#   dualpath completions bash > ~/.local/share/bash-completion/completions/dualpath");
            }
            Shell::Zsh => {
                eprintln!("#   dualpath completions zsh > ~/.zsh/completions/_dualpath");
            }
            Shell::Fish => {
                eprintln!("#   dualpath completions fish > ~/.config/fish/completions/dualpath.fish");
            }
            Shell::PowerShell => {
                eprintln!("#   dualpath completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());
        Ok(())
    }
}
