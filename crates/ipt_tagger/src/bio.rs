use crate::types::{FieldMatchSet, Label, Prefix, TaggedToken, TokenMatch};

/// Applies Begin/Inside prefixes to each token's matched fields.
///
/// A field gets `I` when it was also in the previous token's match set and `B`
/// otherwise; the first token is all `B`. The comparison uses the previous
/// token's raw match set, so a token that matched nothing resets every span.
/// Label order follows each token's own match order.
pub fn add_prefixes(matches: &[TokenMatch]) -> Vec<TaggedToken> {
    matches
        .iter()
        .scan(None::<&FieldMatchSet>, |previous, current| {
            let prev = *previous;
            let labels = current
                .fields
                .iter()
                .map(|field| {
                    let prefix = match prev {
                        Some(prev) if prev.contains(field) => Prefix::Inside,
                        _ => Prefix::Begin,
                    };
                    Label { prefix, field }
                })
                .collect();
            *previous = Some(&current.fields);
            Some(TaggedToken {
                token: current.token.clone(),
                labels,
            })
        })
        .collect()
}
