use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use credseal_core::VERSION;

/// Credseal - seal deployment passwords and rebuild IAM users from backups
#[derive(Parser)]
#[command(name = "credseal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, global = true, env = "CREDSEAL_CONFIG")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Arguments for the `encrypt` and `decrypt` commands
#[derive(Args, Default)]
pub struct PasswordArgs {
    /// Read the request from a file instead of stdin
    #[arg(long, value_name = "FILE")]
    pub input: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Arguments for the `restore` command
#[derive(Args)]
pub struct RestoreArgs {
    /// Backup document to generate commands from
    #[arg(value_name = "BACKUP_FILE")]
    pub backup_file: String,

    /// Placeholder used for the console password
    #[arg(long, value_name = "TEXT")]
    pub password_placeholder: Option<String>,
}

/// Arguments for the `show-backup` command
#[derive(Args)]
pub struct ShowBackupArgs {
    /// Backup document to validate
    #[arg(value_name = "BACKUP_FILE")]
    pub backup_file: String,

    /// Write the normalised document here instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Seal password fields read as JSON from stdin (default command)
    Encrypt(PasswordArgs),

    /// Unseal password fields read as JSON from stdin
    Decrypt(PasswordArgs),

    /// Print the commands that recreate a backed-up IAM user
    Restore(RestoreArgs),

    /// Validate a backup document and print it normalised
    ShowBackup(ShowBackupArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
