//! Core data model types for the `ipt_record` crate.
//!
//! These types describe one human-labeled ingredient: the structured fields a
//! labeler filled in and the display string they were read from.
use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Structured fields of a labeled ingredient.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Index,
    Name,
    Qty,
    RangeEnd,
    Unit,
    Comment,
}

/// Order in which fields are tried when matching a token.
///
/// `Index` is first for parity with the legacy tagger even though a row index
/// is not a real ingredient attribute.
pub const FIELD_PRIORITY: [Field; 6] = [
    Field::Index,
    Field::Name,
    Field::Qty,
    Field::RangeEnd,
    Field::Unit,
    Field::Comment,
];

impl Field {
    /// Uppercased tag name used in training labels, e.g. `RANGE_END`.
    pub fn label(self) -> &'static str {
        match self {
            Field::Index => "INDEX",
            Field::Name => "NAME",
            Field::Qty => "QTY",
            Field::RangeEnd => "RANGE_END",
            Field::Unit => "UNIT",
            Field::Comment => "COMMENT",
        }
    }

    /// Column name of this field in a raw row.
    pub fn column(self) -> &'static str {
        match self {
            Field::Index => "index",
            Field::Name => "name",
            Field::Qty => "qty",
            Field::RangeEnd => "range_end",
            Field::Unit => "unit",
            Field::Comment => "comment",
        }
    }

    /// Looks a field up by its raw column name.
    pub fn from_column(column: &str) -> Option<Self> {
        FIELD_PRIORITY
            .into_iter()
            .find(|field| field.column() == column)
    }

    /// Whether the column holds a decimal rather than free text.
    pub fn is_numeric(self) -> bool {
        matches!(self, Field::Qty | Field::RangeEnd)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Value of one structured field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum FieldValue {
    /// Free text, matched token by token.
    Text(String),
    /// Exact decimal, matched against numeric tokens.
    Number(Decimal),
    /// Field left empty by the labeler.
    #[default]
    Absent,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

/// The structured side of a labeled ingredient, without its display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct IngredientRecord {
    pub index: FieldValue,
    pub name: FieldValue,
    pub qty: FieldValue,
    pub range_end: FieldValue,
    pub unit: FieldValue,
    pub comment: FieldValue,
}

impl IngredientRecord {
    /// Returns the value stored for `field`.
    pub fn get(&self, field: Field) -> &FieldValue {
        match field {
            Field::Index => &self.index,
            Field::Name => &self.name,
            Field::Qty => &self.qty,
            Field::RangeEnd => &self.range_end,
            Field::Unit => &self.unit,
            Field::Comment => &self.comment,
        }
    }

    /// Mutable access for builders and tests.
    pub fn get_mut(&mut self, field: Field) -> &mut FieldValue {
        match field {
            Field::Index => &mut self.index,
            Field::Name => &mut self.name,
            Field::Qty => &mut self.qty,
            Field::RangeEnd => &mut self.range_end,
            Field::Unit => &mut self.unit,
            Field::Comment => &mut self.comment,
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, field: Field, value: FieldValue) -> Self {
        *self.get_mut(field) = value;
        self
    }
}

/// A labeled row as it arrives from a tabular source: column name to raw text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct RawIngredientRow {
    pub columns: BTreeMap<String, String>,
}

impl RawIngredientRow {
    /// Builds a row from `(column, value)` pairs. Later duplicates win.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self {
            columns: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }
}

/// Validated row: the display string split off from its structured fields.
///
/// Keeping the display string outside [`IngredientRecord`] guarantees it never
/// matches itself during alignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngredientRow {
    pub display: String,
    pub record: IngredientRecord,
}
