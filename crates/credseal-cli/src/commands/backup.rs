use std::io;
use std::path::Path;

use credseal_core::backup::{manual_followups, recreation_commands, UserBackup};
use credseal_core::SealError;

use crate::app::AppContext;
use crate::cli::{RestoreArgs, ShowBackupArgs};
use crate::errors::CliError;

pub fn handle_restore(ctx: &AppContext, args: &RestoreArgs) -> anyhow::Result<()> {
    let backup = load_backup(&args.backup_file)?;
    let placeholder = match &args.password_placeholder {
        Some(value) => value.clone(),
        None => ctx.config()?.restore.password_placeholder.clone(),
    };

    let commands = recreation_commands(&backup, &placeholder);
    tracing::info!(
        user = %backup.user.user_name,
        commands = commands.len(),
        "generated recreation commands"
    );

    if !ctx.quiet() {
        println!("# Commands to recreate user: {}", backup.user.user_name);
    }
    for command in &commands {
        println!("{}", command);
    }
    if !ctx.quiet() {
        println!();
        for note in manual_followups(&backup) {
            println!("{}", note);
        }
    }
    Ok(())
}

pub fn handle_show_backup(ctx: &AppContext, args: &ShowBackupArgs) -> anyhow::Result<()> {
    let backup = load_backup(&args.backup_file)?;

    match &args.output {
        Some(destination) => {
            backup.save(Path::new(destination)).map_err(|e| {
                anyhow::anyhow!("Failed to write backup to {}: {}", destination, e)
            })?;
            if !ctx.quiet() {
                println!(
                    "Saved backup for {} to {}",
                    backup.user.user_name, destination
                );
            }
        }
        None => println!("{}", backup.to_json_pretty()?),
    }
    Ok(())
}

fn load_backup(path: &str) -> anyhow::Result<UserBackup> {
    UserBackup::load(Path::new(path)).map_err(|err| -> anyhow::Error {
        match err {
            SealError::Io { source } if source.kind() == io::ErrorKind::NotFound => {
                CliError::not_found(
                    format!("Backup file not found: {}", path),
                    "Hint: Pass the JSON document written by the IAM user backup export.",
                )
                .into()
            }
            SealError::InvalidInput(message) => CliError::invalid_input(message).into(),
            other => anyhow::anyhow!("Failed to load backup {}: {}", path, other),
        }
    })
}
