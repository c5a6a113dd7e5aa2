use ipt_record::{Field, FIELD_PRIORITY};
use ipt_text::FeatureConfig;
use serde::{Deserialize, Serialize};

use crate::TaggerError;

/// Configuration for record translation.
///
/// `version` must be bumped whenever a change here can alter emitted labels
/// or feature columns, so corpora built under different settings are not
/// mixed by accident.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaggerConfig {
    /// Semantic version of the tagger configuration.
    pub version: u32,
    /// Fields tried for each token, in priority order.
    pub field_order: Vec<Field>,
    /// Feature extraction settings.
    #[serde(default)]
    pub features: FeatureConfig,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            version: 1,
            field_order: FIELD_PRIORITY.to_vec(),
            features: FeatureConfig::default(),
        }
    }
}

impl TaggerConfig {
    pub fn validate(&self) -> Result<(), TaggerError> {
        if self.version == 0 {
            return Err(TaggerError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.field_order.is_empty() {
            return Err(TaggerError::InvalidConfig(
                "field_order must name at least one field".into(),
            ));
        }
        for (idx, field) in self.field_order.iter().enumerate() {
            if self.field_order[..idx].contains(field) {
                return Err(TaggerError::InvalidConfig(format!(
                    "field_order lists {} more than once",
                    field.column()
                )));
            }
        }
        self.features.validate()?;
        Ok(())
    }
}
