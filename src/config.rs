use crate::error::Result;
use crate::ranges::Width;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::path::Path;

pub const CONFIG_FILE: &str = "ieee-specials.toml";

#[derive(ValueEnum, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Toml,
}

#[derive(Parser, Deserialize, Debug, Default)]
#[command(author, version, about)]
#[serde(default)]
pub struct OptionalConfig {
    /// Width of the values, 32 or 64. Defaults to 64
    #[arg(short, long)]
    pub width: Option<Width>,

    /// Prints the range table of the selected width
    #[arg(short, long)]
    pub table: bool,

    /// Output format. Defaults to text
    #[arg(short, long, value_enum)]
    pub format: Option<Format>,

    /// Disables colored output
    #[arg(long)]
    pub no_color: bool,

    /// Values to classify: bit patterns (0x..., 0b...), float literals, or words like inf and -nan
    #[arg(allow_hyphen_values = true)]
    pub values: Vec<String>,
}

impl OptionalConfig {
    pub fn get_args() -> Self {
        Self::parse()
    }

    /// Reads the config file from `path`. A missing file is the same as an empty one.
    pub fn get_toml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config file");
                Self::from_toml(&config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn from_toml(config: &str) -> Result<Self> {
        Ok(toml::from_str(config)?)
    }

    /// Merges two configs, preferring the values in `self`
    pub fn merge(self, rhs: Self) -> Self {
        Self {
            width: self.width.or(rhs.width),
            table: self.table || rhs.table,
            format: self.format.or(rhs.format),
            no_color: self.no_color || rhs.no_color,
            values: if self.values.is_empty() {
                rhs.values
            } else {
                self.values
            },
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub width: Width,
    pub table: bool,
    pub format: Format,
    pub color: bool,
    pub values: Vec<String>,
}

impl From<OptionalConfig> for Config {
    fn from(config: OptionalConfig) -> Self {
        Self {
            width: config.width.unwrap_or_default(),
            // With nothing to classify, show the table instead
            table: config.table || config.values.is_empty(),
            format: config.format.unwrap_or_default(),
            color: !config.no_color && std::env::var_os("NO_COLOR").is_none(),
            values: config.values,
        }
    }
}

impl Config {
    pub fn get() -> Result<Self> {
        let toml = OptionalConfig::get_toml(CONFIG_FILE)?;
        Ok(OptionalConfig::get_args().merge(toml).into())
    }
}
