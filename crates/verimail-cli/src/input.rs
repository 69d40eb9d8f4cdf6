use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use clap::Args;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;
use verimail_config::InputConfig;

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Addresses to check; stdin is read when none are given and no --file is set
    #[arg(value_name = "EMAILS")]
    pub emails: Vec<String>,
    /// Read raw text from a file (e.g. a one-column CSV)
    #[arg(long, conflicts_with = "emails")]
    pub file: Option<PathBuf>,
}

pub fn read_raw(config: &InputConfig, args: &InputArgs) -> Result<String> {
    if let Some(path) = args.file.as_deref() {
        return read_file(config, path);
    }
    if !args.emails.is_empty() {
        debug!(args = args.emails.len(), "reading input from arguments");
        return Ok(args.emails.join(" "));
    }
    read_stdin()
}

fn read_file(config: &InputConfig, path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(not_found(format!("input file {}", path.display())));
    }
    if !config.allows_path(path) {
        return Err(invalid_input(format!(
            "unsupported input file {} (allowed extensions: {})",
            path.display(),
            config.extensions.join(", ")
        )));
    }
    let bytes = fs::read(path).with_context(|| format!("read input file {}", path.display()))?;
    let raw = String::from_utf8(bytes)
        .map_err(|_| invalid_input(format!("input file {} is not valid UTF-8", path.display())))?;
    debug!(path = %path.display(), bytes = raw.len(), "reading input from file");
    Ok(raw)
}

fn read_stdin() -> Result<String> {
    let mut raw = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut raw)
        .with_context(|| "read stdin")?;
    debug!(bytes = raw.len(), "reading input from stdin");
    Ok(raw)
}
