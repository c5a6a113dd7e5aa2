//! YAML Configuration File Support for IPT
//!
//! Loads every stage configuration (record ingestion, tagging, features and
//! batch settings) from a single YAML file.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "nyt-ingredients"
//!
//! record:
//!   version: 1
//!   strip_control_chars: true
//!
//! tagger:
//!   version: 1
//!   field_order: [index, name, qty, range_end, unit, comment]
//!
//! features:
//!   length_buckets: [4, 8, 12, 16, 20]
//!
//! batch:
//!   use_parallel: true
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{FeatureConfig, Field, PipelineConfig, RecordConfig, TaggerConfig, FIELD_PRIORITY};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration for a corpus run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IptConfig {
    /// Configuration format version
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub record: RecordYamlConfig,

    #[serde(default)]
    pub tagger: TaggerYamlConfig,

    #[serde(default)]
    pub features: FeatureYamlConfig,

    #[serde(default)]
    pub batch: BatchYamlConfig,
}

impl IptConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: IptConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.record.validate()?;
        self.tagger.validate()?;
        self.features.validate()?;
        Ok(())
    }

    pub fn to_record_config(&self) -> RecordConfig {
        RecordConfig {
            version: self.record.version,
            strip_control_chars: self.record.strip_control_chars,
        }
    }

    /// Resolves column names into fields and attaches the feature buckets.
    pub fn to_tagger_config(&self) -> Result<TaggerConfig, ConfigLoadError> {
        Ok(TaggerConfig {
            version: self.tagger.version,
            field_order: self.tagger.resolve_field_order()?,
            features: self.features.to_feature_config(),
        })
    }

    pub fn to_pipeline_config(&self) -> Result<PipelineConfig, ConfigLoadError> {
        Ok(PipelineConfig {
            record: self.to_record_config(),
            tagger: self.to_tagger_config()?,
            use_parallel: self.batch.use_parallel,
        })
    }
}

impl Default for IptConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            record: RecordYamlConfig::default(),
            tagger: TaggerYamlConfig::default(),
            features: FeatureYamlConfig::default(),
            batch: BatchYamlConfig::default(),
        }
    }
}

/// Record ingestion YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub strip_control_chars: bool,
}

impl RecordYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "record.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RecordYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_control_chars: true,
        }
    }
}

/// Tagger YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Column names in matching priority order.
    #[serde(default = "default_field_order")]
    pub field_order: Vec<String>,
}

impl TaggerYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "tagger.version must be >= 1".to_string(),
            ));
        }
        if self.field_order.is_empty() {
            return Err(ConfigLoadError::Validation(
                "tagger.field_order must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for field in self.resolve_field_order()? {
            if !seen.insert(field) {
                return Err(ConfigLoadError::Validation(format!(
                    "tagger.field_order lists `{}` more than once",
                    field.column()
                )));
            }
        }
        Ok(())
    }

    fn resolve_field_order(&self) -> Result<Vec<Field>, ConfigLoadError> {
        self.field_order
            .iter()
            .map(|name| {
                Field::from_column(name).ok_or_else(|| {
                    ConfigLoadError::Validation(format!(
                        "tagger.field_order has unknown field `{name}`"
                    ))
                })
            })
            .collect()
    }
}

impl Default for TaggerYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            field_order: default_field_order(),
        }
    }
}

/// Feature extraction YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureYamlConfig {
    /// Exclusive upper bounds of the `L<bucket>` token-count groups.
    #[serde(default = "default_length_buckets")]
    pub length_buckets: Vec<usize>,
}

impl FeatureYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        self.to_feature_config()
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("features: {e}")))
    }

    fn to_feature_config(&self) -> FeatureConfig {
        FeatureConfig {
            length_buckets: self.length_buckets.clone(),
        }
    }
}

impl Default for FeatureYamlConfig {
    fn default() -> Self {
        Self {
            length_buckets: default_length_buckets(),
        }
    }
}

/// Batch YAML configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchYamlConfig {
    #[serde(default)]
    pub use_parallel: bool,
}

fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_field_order() -> Vec<String> {
    FIELD_PRIORITY
        .iter()
        .map(|field| field.column().to_string())
        .collect()
}
fn default_length_buckets() -> Vec<usize> {
    FeatureConfig::default().length_buckets
}
