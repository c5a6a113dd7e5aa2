//! Configuration types for row ingestion.
//!
//! [`RecordConfig`] controls how raw tabular rows are cleaned before they are
//! turned into [`IngredientRecord`](crate::IngredientRecord) values.
use serde::{Deserialize, Serialize};

use crate::RecordError;

/// Runtime configuration for row ingestion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordConfig {
    /// Semantic version of the record configuration.
    pub version: u32,
    /// Whether to strip control characters from text columns.
    pub strip_control_chars: bool,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            version: 1,
            strip_control_chars: true,
        }
    }
}

impl RecordConfig {
    /// Validates this configuration. Version 0 is reserved and invalid.
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.version == 0 {
            return Err(RecordError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}
