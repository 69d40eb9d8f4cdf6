use crate::commands::{print_json, Context};
use crate::input::{read_raw, InputArgs};
use anyhow::Result;
use clap::Args;
use verimail_core::rules::tokenize as split_candidates;

#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,
}

pub fn tokenize(ctx: &Context<'_>, args: TokenizeArgs) -> Result<()> {
    let raw = read_raw(&ctx.config.input, &args.input)?;
    let candidates = split_candidates(&raw);

    if ctx.json {
        return print_json(&candidates);
    }

    for candidate in candidates {
        println!("{candidate}");
    }
    Ok(())
}
