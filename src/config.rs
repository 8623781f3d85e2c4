use std::fmt::Write as _;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::cli::Cli;
use crate::error::{Error, Result};
use crate::locale::Language;
use crate::task::{DEFAULT_DATE_FORMAT, RenderStyle};

pub const DEFAULT_CONFIG_PATH: &str = "taskman.toml";

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub language: Option<Language>,
    pub date_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub language: Language,
    pub date_format: String,
}

impl Config {
    /// Load the config file named by `--config`, or the default path if it
    /// exists, then apply CLI overrides.
    pub fn load(cli: &Cli) -> Result<Self> {
        let file_config = match cli.config.as_deref() {
            Some(path) => {
                let path = Path::new(path);
                if !path.exists() {
                    return Err(Error::ConfigNotFound(path.to_path_buf()));
                }
                read_config(path)?
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    read_config(path)?
                } else {
                    ConfigFile::default()
                }
            }
        };

        merge(file_config, cli)
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle::new(self.language, self.date_format.clone())
    }
}

fn read_config(path: &Path) -> Result<ConfigFile> {
    debug!(path = %path.display(), "reading config file");
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

pub fn parse_config(content: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(content)?;
    if let Some(ref fmt) = config.date_format {
        validate_date_format(fmt)?;
    }
    Ok(config)
}

/// Reject formats chrono cannot render.
fn validate_date_format(fmt: &str) -> Result<()> {
    if fmt.trim().is_empty() {
        return Err(Error::ConfigValidation(
            "date_format must not be empty".to_string(),
        ));
    }
    let sample = chrono::NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| Error::ConfigValidation("invalid sample date".to_string()))?;
    let mut out = String::new();
    if write!(out, "{}", sample.format(fmt)).is_err() {
        return Err(Error::ConfigValidation(format!(
            "invalid date_format: {fmt}"
        )));
    }
    Ok(())
}

pub fn merge(file: ConfigFile, cli: &Cli) -> Result<Config> {
    let language = match cli.language.as_deref() {
        Some(raw) => Language::parse(raw).ok_or_else(|| {
            Error::ConfigValidation(format!("unknown language: {raw} (expected: pt, en)"))
        })?,
        None => file.language.unwrap_or_default(),
    };
    let date_format = match cli.date_format.clone() {
        Some(fmt) => {
            validate_date_format(&fmt)?;
            fmt
        }
        None => file
            .date_format
            .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
    };
    Ok(Config {
        language,
        date_format,
    })
}
