//! # IPT Tagger (`ipt_tagger`)
//!
//! ## Purpose
//!
//! `ipt_tagger` turns one human-labeled ingredient (structured fields plus the
//! free-text display string they were read from) into token-per-line training
//! data for a BIO sequence labeler. The hard part is alignment: the labeler
//! never recorded which words of the display string belong to which field, so
//! every token is matched back against the fields heuristically.
//!
//! ## Stages
//!
//! 1. [`parse_number`]: reads integers, mixed numbers and single-digit
//!    fractions as decimals rounded to two places.
//! 2. [`match_token`] / [`PreparedRecord`]: scans fields in priority order and
//!    collects every field whose text or value matches the token.
//! 3. [`add_prefixes`]: assigns `B-`/`I-` to each candidate depending on the
//!    previous token's match set.
//! 4. [`best_tag`]: picks the single label to train on, preferring anything
//!    over the catch-all comment field.
//! 5. [`translate`]: runs the stages over a display string and renders lines.
//!
//! ## Example Usage
//!
//! ```
//! use ipt_record::{Field, FieldValue, IngredientRecord};
//! use ipt_tagger::{translate, TaggerConfig};
//! use rust_decimal::Decimal;
//!
//! let record = IngredientRecord::default()
//!     .with(Field::Qty, FieldValue::Number(Decimal::new(2, 0)))
//!     .with(Field::Unit, FieldValue::Text("cups".into()))
//!     .with(Field::Name, FieldValue::Text("flour".into()));
//!
//! let lines = translate("2 cups flour", &record, &TaggerConfig::default())
//!     .expect("translation succeeds");
//! assert_eq!(lines.lines().next(), Some("2\tI1\tL4\tNoCAP\tNoPAREN\tB-QTY"));
//! ```
//!
//! ## Observability
//!
//! Every call to [`translate_record`] runs inside an `ipt_tagger.translate`
//! tracing span and emits `translate_success` or `translate_failure`.

pub mod bio;
pub mod config;
pub mod matcher;
pub mod numeric;
pub mod resolve;
pub mod translate;
pub mod types;

use thiserror::Error;

pub use crate::bio::add_prefixes;
pub use crate::config::TaggerConfig;
pub use crate::matcher::{match_token, PreparedRecord};
pub use crate::numeric::{parse_number, NumericError};
pub use crate::resolve::best_tag;
pub use crate::translate::{translate, translate_record, translate_row};
pub use crate::types::{
    FieldMatchSet, FinalLabel, Label, Prefix, TaggedToken, TokenMatch, TranslatedRecord,
    TranslatedToken, OTHER_LABEL,
};

/// Errors that can occur while translating a record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TaggerError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("invalid feature configuration: {0}")]
    Features(#[from] ipt_text::TextError),
    #[error("token {token:?} could not be read as a number: {source}")]
    Numeric {
        token: String,
        #[source]
        source: NumericError,
    },
}
