use crate::types::{FinalLabel, Label};

/// Collapses a token's candidate labels into the one it is trained on.
///
/// A lone candidate wins as is, even a comment. With several candidates the
/// first non-comment label wins, since comment text is a catch-all that
/// overlaps most other fields. No candidates, or only comments, gives
/// [`FinalLabel::Other`].
pub fn best_tag(labels: &[Label]) -> FinalLabel {
    match labels {
        [only] => FinalLabel::Tagged(*only),
        _ => labels
            .iter()
            .find(|label| !label.is_comment())
            .map(|label| FinalLabel::Tagged(*label))
            .unwrap_or(FinalLabel::Other),
    }
}
