use crate::commands::{print_json, Context};
use crate::input::{read_raw, InputArgs};
use anyhow::Result;
use clap::Args;
use tracing::debug;
use verimail_core::dto::VerificationReportDto;
use verimail_core::rules::{verify_all, VerificationSummary};
use verimail_core::VerificationResult;

#[derive(Debug, Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Only print rows that failed the format check
    #[arg(long)]
    pub invalid_only: bool,
    #[arg(long)]
    pub no_summary: bool,
}

pub fn verify(ctx: &Context<'_>, args: VerifyArgs) -> Result<()> {
    let raw = read_raw(&ctx.config.input, &args.input)?;
    let report = VerificationReportDto::from_results(verify_all(&raw));
    debug!(
        total = report.summary.total,
        valid = report.summary.valid,
        "verification finished"
    );

    if ctx.json {
        return print_json(&report);
    }

    if report.results.is_empty() {
        println!("no email addresses");
        return Ok(());
    }

    let invalid_only = args.invalid_only || ctx.config.output.invalid_only;
    let show_summary = ctx.config.output.summary && !args.no_summary;
    for line in render_results(&report.results, invalid_only) {
        println!("{line}");
    }
    if show_summary {
        println!("{}", render_summary(&report.summary));
    }
    Ok(())
}

fn render_results(results: &[VerificationResult], invalid_only: bool) -> Vec<String> {
    results
        .iter()
        .filter(|result| !invalid_only || !result.is_valid())
        .map(|result| {
            format!(
                "{:<7}  {}  {}",
                result.status.as_str(),
                result.candidate,
                result.message
            )
        })
        .collect()
}

fn render_summary(summary: &VerificationSummary) -> String {
    format!(
        "{} checked, {} valid, {} invalid",
        summary.total, summary.valid, summary.invalid
    )
}
