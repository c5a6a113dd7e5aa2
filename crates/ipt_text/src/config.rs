use serde::{Deserialize, Serialize};

use crate::error::TextError;

/// Configuration for per-token feature extraction.
///
/// `length_buckets` are the upper bounds used for the token-count column: a
/// line of `n` tokens is reported as `L<b>` for the first bucket `b > n`, or
/// `LX` when `n` reaches past the last bucket. Changing the buckets changes
/// the feature vocabulary seen by the downstream model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FeatureConfig {
    /// Strictly increasing, non-zero token-count bounds.
    pub length_buckets: Vec<usize>,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            length_buckets: vec![4, 8, 12, 16, 20],
        }
    }
}

impl FeatureConfig {
    /// Checks that the bucket list is usable.
    pub fn validate(&self) -> Result<(), TextError> {
        if self.length_buckets.is_empty() {
            return Err(TextError::InvalidConfig(
                "length_buckets must not be empty".into(),
            ));
        }
        if self.length_buckets[0] == 0 {
            return Err(TextError::InvalidConfig(
                "length_buckets must be >= 1".into(),
            ));
        }
        if self.length_buckets.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(TextError::InvalidConfig(
                "length_buckets must be strictly increasing".into(),
            ));
        }
        Ok(())
    }
}
