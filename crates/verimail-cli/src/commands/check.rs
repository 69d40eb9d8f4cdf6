use crate::commands::{print_json, Context};
use crate::error::CliError;
use crate::input::{read_raw, InputArgs};
use anyhow::Result;
use clap::Args;
use tracing::debug;
use verimail_core::dto::GateDto;
use verimail_core::rules::has_any_valid;

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

/// Exits non-zero when nothing in the input would pass `verify`.
pub fn check(ctx: &Context<'_>, args: CheckArgs) -> Result<()> {
    let raw = read_raw(&ctx.config.input, &args.input)?;
    let has_valid = has_any_valid(&raw);
    debug!(has_valid, "gate evaluated");

    if ctx.json {
        print_json(&GateDto { has_valid })?;
    } else {
        println!("{}", if has_valid { "yes" } else { "no" });
    }

    if has_valid {
        Ok(())
    } else {
        Err(CliError::NoValidCandidates.into())
    }
}
