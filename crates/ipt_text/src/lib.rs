//! # IPT Text
//!
//! Display-text utilities shared by every stage of the ingredient phrase
//! tagger. The tagger never looks at raw display strings directly; it goes
//! through the helpers in this crate so that display text and structured field
//! text are split and compared under exactly the same rules.
//!
//! ## Core Responsibilities
//!
//! - **Fraction cleanup**: [`normalize_unicode_fractions`] rewrites vulgar
//!   fraction glyphs ("½") to ASCII ("1/2") before tokenization.
//! - **Tokenization**: [`tokenize`] expands glued abbreviations ("100g"),
//!   clumps mixed numbers into a single token ("1 1/2" becomes "1$1/2"), and
//!   splits on whitespace with `,`, `(` and `)` as standalone tokens.
//! - **Token normalization**: [`normalize_token`] strips surrounding parentheses
//!   and singularizes common unit plurals for matching purposes only.
//!   [`unclump`] undoes the mixed-number clumping before numeric parsing.
//! - **Features**: [`compute_features`] produces the positional and contextual
//!   columns written next to each token, and [`join_line`] joins a line's
//!   columns with the training-file delimiter.
//!
//! ## Example Usage
//!
//! ```
//! use ipt_text::{compute_features, join_line, normalize_unicode_fractions, tokenize, FeatureConfig};
//!
//! let display = normalize_unicode_fractions("1½ cups flour");
//! let tokens = tokenize(&display);
//! assert_eq!(tokens, vec!["1$1/2", "cups", "flour"]);
//!
//! let features = compute_features(&tokens[0], 1, &tokens, &FeatureConfig::default());
//! assert_eq!(join_line(&features), "I1\tL4\tNoCAP\tNoPAREN");
//! ```

mod config;
mod error;
mod features;
mod fractions;
mod line;
mod normalize;
mod tokenize;

pub use crate::config::FeatureConfig;
pub use crate::error::TextError;
pub use crate::features::{compute_features, inside_parenthesis, is_capitalized, length_group};
pub use crate::fractions::normalize_unicode_fractions;
pub use crate::line::{join_line, FIELD_DELIMITER};
pub use crate::normalize::{normalize_token, singularize};
pub use crate::tokenize::{clump_fractions, tokenize, unclump};
