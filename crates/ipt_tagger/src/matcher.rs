use ipt_record::{Field, FieldValue, IngredientRecord};
use ipt_text::{normalize_token, tokenize};
use rust_decimal::Decimal;

use crate::numeric::{parse_number, NumericError};
use crate::types::FieldMatchSet;

/// Returns the fields of `record` that `token` matches, scanning `field_order`.
///
/// Text fields match when any of their tokens normalizes to the same string as
/// the normalized input token. Numeric fields match when the token parses to
/// exactly the stored decimal. Absent fields never match.
///
/// Translating a whole record should go through [`PreparedRecord`], which
/// tokenizes each field once instead of once per display token.
pub fn match_token(
    token: &str,
    record: &IngredientRecord,
    field_order: &[Field],
) -> Result<FieldMatchSet, NumericError> {
    PreparedRecord::new(record, field_order).match_token(token)
}

/// A record with its text fields pre-tokenized and normalized, in match order.
#[derive(Debug, Clone)]
pub struct PreparedRecord {
    fields: Vec<(Field, Prepared)>,
}

#[derive(Debug, Clone)]
enum Prepared {
    Tokens(Vec<String>),
    Number(Decimal),
    Absent,
}

impl PreparedRecord {
    pub fn new(record: &IngredientRecord, field_order: &[Field]) -> Self {
        let fields = field_order
            .iter()
            .map(|&field| {
                let prepared = match record.get(field) {
                    FieldValue::Text(text) => Prepared::Tokens(
                        tokenize(text)
                            .iter()
                            .map(|sub| normalize_token(sub).to_string())
                            .collect(),
                    ),
                    FieldValue::Number(value) => Prepared::Number(*value),
                    FieldValue::Absent => Prepared::Absent,
                };
                (field, prepared)
            })
            .collect();
        Self { fields }
    }

    /// Matches one display token against every prepared field.
    ///
    /// The token is parsed as a number once, even when no numeric field
    /// exists, so a malformed numeric token always surfaces as an error.
    pub fn match_token(&self, token: &str) -> Result<FieldMatchSet, NumericError> {
        let normalized = normalize_token(token);
        let number = parse_number(normalized)?;

        let mut matches = FieldMatchSet::new();
        for (field, prepared) in &self.fields {
            let hits = match prepared {
                Prepared::Tokens(subs) => subs.iter().filter(|sub| *sub == normalized).count(),
                Prepared::Number(value) => usize::from(number == Some(*value)),
                Prepared::Absent => 0,
            };
            for _ in 0..hits {
                matches.push(*field);
            }
        }
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use ipt_record::FIELD_PRIORITY;

    use super::*;

    fn dec(text: &str) -> Decimal {
        Decimal::from_str(text).expect("test decimal")
    }

    fn flour_record() -> IngredientRecord {
        IngredientRecord::default()
            .with(Field::Qty, FieldValue::Number(dec("2.00")))
            .with(Field::Unit, FieldValue::Text("cups".into()))
            .with(Field::Name, FieldValue::Text("flour".into()))
    }

    fn matched(token: &str, record: &IngredientRecord) -> Vec<Field> {
        match_token(token, record, &FIELD_PRIORITY)
            .expect("token matches without error")
            .as_slice()
            .to_vec()
    }

    #[test]
    fn each_token_finds_its_field() {
        let record = flour_record();
        assert_eq!(matched("2", &record), vec![Field::Qty]);
        assert_eq!(matched("cups", &record), vec![Field::Unit]);
        assert_eq!(matched("flour", &record), vec![Field::Name]);
    }

    #[test]
    fn unmatched_token_yields_empty_set() {
        assert!(matched("sifted", &flour_record()).is_empty());
        assert!(matched("3", &flour_record()).is_empty());
    }

    #[test]
    fn plural_display_matches_singular_field() {
        let record = IngredientRecord::default().with(Field::Unit, FieldValue::Text("cup".into()));
        assert_eq!(matched("cups", &record), vec![Field::Unit]);
        assert_eq!(matched("(cup)", &record), vec![Field::Unit]);
    }

    #[test]
    fn multiple_fields_in_priority_order() {
        let record = IngredientRecord::default()
            .with(Field::Comment, FieldValue::Text("fresh basil, torn".into()))
            .with(Field::Name, FieldValue::Text("basil".into()));
        assert_eq!(matched("basil", &record), vec![Field::Name, Field::Comment]);
    }

    #[test]
    fn repeated_word_in_field_matches_per_occurrence() {
        let record = IngredientRecord::default()
            .with(Field::Name, FieldValue::Text("onion".into()))
            .with(Field::Comment, FieldValue::Text("chopped, finely chopped".into()));
        assert_eq!(
            matched("chopped", &record),
            vec![Field::Comment, Field::Comment]
        );
        assert_eq!(matched("finely", &record), vec![Field::Comment]);
    }

    #[test]
    fn each_comma_in_field_is_a_match() {
        let record = IngredientRecord::default()
            .with(Field::Comment, FieldValue::Text("peeled, seeded, diced".into()));
        assert_eq!(matched(",", &record), vec![Field::Comment, Field::Comment]);
    }

    #[test]
    fn number_can_match_qty_and_range_end() {
        let record = IngredientRecord::default()
            .with(Field::Qty, FieldValue::Number(dec("2")))
            .with(Field::RangeEnd, FieldValue::Number(dec("2.0")));
        assert_eq!(matched("2", &record), vec![Field::Qty, Field::RangeEnd]);
    }

    #[test]
    fn fraction_matches_rounded_quantity() {
        let record = IngredientRecord::default().with(Field::Qty, FieldValue::Number(dec("0.33")));
        assert_eq!(matched("1/3", &record), vec![Field::Qty]);

        let unrounded =
            IngredientRecord::default().with(Field::Qty, FieldValue::Number(dec("0.333333")));
        assert!(matched("1/3", &unrounded).is_empty());
    }

    #[test]
    fn clumped_mixed_number_matches_qty() {
        let record = IngredientRecord::default().with(Field::Qty, FieldValue::Number(dec("1.5")));
        assert_eq!(matched("1$1/2", &record), vec![Field::Qty]);
    }

    #[test]
    fn textual_index_matches_digits() {
        // Legacy quirk: the row index is kept as text and still competes
        // with quantity for small numbers.
        let record = IngredientRecord::default()
            .with(Field::Index, FieldValue::Text("2".into()))
            .with(Field::Qty, FieldValue::Number(dec("2")));
        assert_eq!(matched("2", &record), vec![Field::Index, Field::Qty]);
    }

    #[test]
    fn field_order_is_respected() {
        let record = IngredientRecord::default()
            .with(Field::Comment, FieldValue::Text("basil".into()))
            .with(Field::Name, FieldValue::Text("basil".into()));
        let order = [Field::Comment, Field::Name];
        let set = match_token("basil", &record, &order).expect("match");
        assert_eq!(set.as_slice(), &[Field::Comment, Field::Name]);

        let name_only = [Field::Name];
        let set = match_token("basil", &record, &name_only).expect("match");
        assert_eq!(set.as_slice(), &[Field::Name]);
    }

    #[test]
    fn malformed_number_propagates() {
        let res = match_token("3/0", &flour_record(), &FIELD_PRIORITY);
        assert!(matches!(res, Err(NumericError::ZeroDenominator(_))));
    }
}
