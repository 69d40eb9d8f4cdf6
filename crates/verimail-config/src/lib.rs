use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "verimail";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_EXTENSIONS: [&str; 2] = ["csv", "txt"];
const SPREADSHEET_EXTENSIONS: [&str; 4] = ["xls", "xlsx", "xlsm", "ods"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub output: OutputConfig,
    pub input: InputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub summary: bool,
    pub invalid_only: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub extensions: Vec<String>,
}

impl InputConfig {
    pub fn allows_path(&self, path: &Path) -> bool {
        let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        let ext = ext.to_ascii_lowercase();
        self.extensions.iter().any(|allowed| *allowed == ext)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                summary: true,
                invalid_only: false,
            },
            input: InputConfig {
                extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid input extension: {0:?}")]
    InvalidExtension(String),
    #[error("input.extensions must not be empty")]
    EmptyExtensions,
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    output: Option<OutputFile>,
    input: Option<InputFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct OutputFile {
    summary: Option<bool>,
    invalid_only: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct InputFile {
    extensions: Option<Vec<String>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(output) = parsed.output {
        if let Some(summary) = output.summary {
            config.output.summary = summary;
        }
        if let Some(invalid_only) = output.invalid_only {
            config.output.invalid_only = invalid_only;
        }
    }

    if let Some(extensions) = parsed.input.and_then(|input| input.extensions) {
        if extensions.is_empty() {
            return Err(ConfigError::EmptyExtensions);
        }
        let mut normalized: Vec<String> = Vec::with_capacity(extensions.len());
        for raw in extensions {
            let ext = normalize_extension(&raw)?;
            if !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        config.input.extensions = normalized;
    }

    Ok(config)
}

pub fn normalize_extension(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if trimmed.is_empty() || trimmed.contains(['.', '/', '\\']) {
        return Err(ConfigError::InvalidExtension(raw.to_string()));
    }
    let ext = trimmed.to_ascii_lowercase();
    if SPREADSHEET_EXTENSIONS.contains(&ext.as_str()) {
        return Err(ConfigError::InvalidExtension(raw.to_string()));
    }
    Ok(ext)
}
