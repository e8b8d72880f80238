use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use time::Date;
use time::macros::format_description;

pub const DEFAULT_SOURCE: &str = "RABA-KGZ";
pub const DEFAULT_SOURCE_DATE: &str = "2014-09-11";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct TranslationConfig {
    #[serde(default)]
    pub field_index_policy: FieldIndexPolicy,
    #[serde(default)]
    pub provenance: ProvenanceConfig,
}

impl TranslationConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let settings = ::config::Config::builder()
            .add_source(::config::File::from(path))
            .build()
            .with_context(|| format!("Config: Failed to read {:?}", path))?;
        let config: Self = settings
            .try_deserialize()
            .with_context(|| format!("Config: Invalid translation config in {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.provenance.validate()
    }
}

/// Tags stamped on every translated feature.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ProvenanceConfig {
    #[serde(default = "default_source")]
    pub source: String,
    /// Snapshot date of the register extract, `YYYY-MM-DD`.
    #[serde(default = "default_source_date")]
    pub source_date: String,
}

impl Default for ProvenanceConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            source_date: default_source_date(),
        }
    }
}

impl ProvenanceConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.source.trim().is_empty(),
            "Config: provenance.source must not be empty"
        );
        parse_source_date(&self.source_date)?;
        Ok(())
    }
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_source_date() -> String {
    DEFAULT_SOURCE_DATE.to_string()
}

pub fn parse_source_date(value: &str) -> anyhow::Result<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .with_context(|| format!("Config: invalid provenance.source_date: {value}"))
}

/// How a field position reported by the source layer is interpreted.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FieldIndexPolicy {
    /// Any position is a found field.
    #[default]
    Strict,
    /// Position 0 also counts as missing, as the first RABA-KGZ
    /// conversion scripts did.
    Legacy,
}

impl FieldIndexPolicy {
    pub fn accepts(&self, index: usize) -> bool {
        match self {
            FieldIndexPolicy::Strict => true,
            FieldIndexPolicy::Legacy => index > 0,
        }
    }
}

impl FromStr for FieldIndexPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "strict" => Ok(FieldIndexPolicy::Strict),
            "legacy" => Ok(FieldIndexPolicy::Legacy),
            _ => Err(format!("invalid field_index_policy: {value}")),
        }
    }
}
