//! Credseal CLI - seal deployment passwords and rebuild IAM users from backups
//!
//! Invoked without a subcommand, `credseal` behaves as `credseal encrypt`:
//! it reads one JSON request from stdin and writes one JSON document to
//! stdout, so it can be wired in directly as an external program.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands, PasswordArgs};
use crate::commands::{backup, misc, passwords};
use crate::constants::exit_codes;
use crate::errors::CliError;

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);

    // Config errors are reported by the command that needs the config.
    if let Err(e) = logging::init(&ctx.log_level()) {
        eprintln!("Warning: {:#}", e);
    }

    if let Err(e) = run(&ctx, &cli) {
        match e.downcast_ref::<CliError>() {
            Some(cli_err) => cli_err.exit(),
            None => {
                eprintln!("Error: {:#}", e);
                std::process::exit(exit_codes::GENERAL);
            }
        }
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Encrypt(args)) => {
            passwords::handle_encrypt(ctx, args)?;
        }
        Some(Commands::Decrypt(args)) => {
            passwords::handle_decrypt(ctx, args)?;
        }
        Some(Commands::Restore(args)) => {
            backup::handle_restore(ctx, args)?;
        }
        Some(Commands::ShowBackup(args)) => {
            backup::handle_show_backup(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args.shell)?;
        }
        None => {
            passwords::handle_encrypt(ctx, &PasswordArgs::default())?;
        }
    }

    Ok(())
}
