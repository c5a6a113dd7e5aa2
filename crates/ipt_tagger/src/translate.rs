use std::time::Instant;

use ipt_record::{IngredientRecord, IngredientRow};
use ipt_text::{compute_features, normalize_unicode_fractions, tokenize};
use tracing::{debug, info, warn, Level};

use crate::bio::add_prefixes;
use crate::config::TaggerConfig;
use crate::matcher::PreparedRecord;
use crate::resolve::best_tag;
use crate::types::{FinalLabel, TokenMatch, TranslatedRecord, TranslatedToken};
use crate::TaggerError;

/// Translates one labeled ingredient into training lines.
///
/// Returns one newline-terminated, tab-delimited line per display token:
/// the token, its feature columns, then its final label. A display string with
/// no tokens yields an empty string.
pub fn translate(
    display: &str,
    record: &IngredientRecord,
    cfg: &TaggerConfig,
) -> Result<String, TaggerError> {
    translate_record(display, record, cfg).map(|translated| translated.to_lines())
}

/// Same as [`translate`] for a validated row.
pub fn translate_row(row: &IngredientRow, cfg: &TaggerConfig) -> Result<String, TaggerError> {
    translate(&row.display, &row.record, cfg)
}

/// Structured form of [`translate`], keeping candidates and features per token.
pub fn translate_record(
    display: &str,
    record: &IngredientRecord,
    cfg: &TaggerConfig,
) -> Result<TranslatedRecord, TaggerError> {
    let start = Instant::now();
    // Bound outside `span!`, whose expansion shadows `display`.
    let display_len = display.len();
    let span = tracing::span!(Level::INFO, "ipt_tagger.translate", display_len);
    let _guard = span.enter();

    match translate_inner(display, record, cfg) {
        Ok(translated) => {
            info!(
                token_count = translated.len(),
                unmatched_tokens = translated
                    .tokens
                    .iter()
                    .filter(|t| t.candidates.is_empty())
                    .count(),
                other_labels = translated
                    .tokens
                    .iter()
                    .filter(|t| t.label == FinalLabel::Other)
                    .count(),
                elapsed_micros = start.elapsed().as_micros(),
                "translate_success"
            );
            Ok(translated)
        }
        Err(err) => {
            warn!(error = %err, "translate_failure");
            Err(err)
        }
    }
}

fn translate_inner(
    display: &str,
    record: &IngredientRecord,
    cfg: &TaggerConfig,
) -> Result<TranslatedRecord, TaggerError> {
    cfg.validate()?;

    let cleaned = normalize_unicode_fractions(display);
    let tokens = tokenize(&cleaned);
    let prepared = PreparedRecord::new(record, &cfg.field_order);

    let matches = tokens
        .iter()
        .map(|token| {
            let fields = prepared
                .match_token(token)
                .map_err(|source| TaggerError::Numeric {
                    token: token.clone(),
                    source,
                })?;
            debug!(token = %token, matched = fields.len(), "token_matched");
            Ok(TokenMatch {
                token: token.clone(),
                fields,
            })
        })
        .collect::<Result<Vec<_>, TaggerError>>()?;

    let translated = add_prefixes(&matches)
        .into_iter()
        .enumerate()
        .map(|(idx, tagged)| {
            let features = compute_features(&tagged.token, idx + 1, &tokens, &cfg.features);
            let label = best_tag(&tagged.labels);
            TranslatedToken {
                token: tagged.token,
                features,
                candidates: tagged.labels,
                label,
            }
        })
        .collect();

    Ok(TranslatedRecord { tokens: translated })
}
