//! The stdin/stdout password commands.
//!
//! Both commands read one JSON request and write exactly one JSON document
//! to stdout: the five fields on success, or the failure document (error
//! plus five empty fields) with a non-zero exit code.

use std::io::Read;

use credseal_core::{FailureReport, FieldRequest, SealError};

use crate::app::AppContext;
use crate::cli::PasswordArgs;
use crate::constants::exit_codes;
use crate::errors::{seal_exit_code, CliError};
use crate::output::print_json;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Seal,
    Unseal,
}

pub fn handle_encrypt(ctx: &AppContext, args: &PasswordArgs) -> anyhow::Result<()> {
    process(ctx, args, Direction::Seal)
}

pub fn handle_decrypt(ctx: &AppContext, args: &PasswordArgs) -> anyhow::Result<()> {
    process(ctx, args, Direction::Unseal)
}

fn process(ctx: &AppContext, args: &PasswordArgs, direction: Direction) -> anyhow::Result<()> {
    let config = match ctx.config() {
        Ok(config) => config,
        Err(err) => {
            let report = FailureReport::new(err.to_string());
            return report_failure(&report, args.pretty, exit_codes::GENERAL);
        }
    };
    let pretty = args.pretty || config.output.pretty;

    let outcome = read_request(args.input.as_deref()).and_then(|request| {
        tracing::info!(
            ?direction,
            keyed = request.has_key(),
            "processing password fields"
        );
        match direction {
            Direction::Seal => request.encrypt(),
            Direction::Unseal => request.decrypt(),
        }
    });

    match outcome {
        Ok(fields) => print_json(&fields, pretty),
        Err(err) => {
            tracing::warn!(error = %err, "password request failed");
            report_failure(&FailureReport::from(&err), pretty, seal_exit_code(&err))
        }
    }
}

fn report_failure(report: &FailureReport, pretty: bool, code: i32) -> anyhow::Result<()> {
    print_json(report, pretty)?;
    Err(CliError::reported(report.error.clone(), code).into())
}

fn read_request(input: Option<&str>) -> credseal_core::Result<FieldRequest> {
    let bytes = match input {
        Some(path) => std::fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            buf
        }
    };
    let text = String::from_utf8(bytes)
        .map_err(|e| SealError::EncodingFailure(format!("Input is not UTF-8: {}", e)))?;
    FieldRequest::from_json(&text)
}
