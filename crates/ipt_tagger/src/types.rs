use std::fmt;

use ipt_record::Field;
use ipt_text::join_line;
use serde::{Deserialize, Serialize};

/// Literal label used when no field can be chosen for a token.
pub const OTHER_LABEL: &str = "OTHER";

/// Fields a single token plausibly came from, in field-priority order.
///
/// A field is recorded once per matching sub-token of its text, so a word
/// that occurs twice in the comment yields two comment entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMatchSet {
    fields: Vec<Field>,
}

impl FieldMatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn contains(&self, field: Field) -> bool {
        self.fields.contains(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.fields.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn as_slice(&self) -> &[Field] {
        &self.fields
    }
}

impl FromIterator<Field> for FieldMatchSet {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A display token paired with the fields it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMatch {
    pub token: String,
    pub fields: FieldMatchSet,
}

/// Begin/Inside chunk prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prefix {
    Begin,
    Inside,
}

impl Prefix {
    pub fn as_str(self) -> &'static str {
        match self {
            Prefix::Begin => "B",
            Prefix::Inside => "I",
        }
    }
}

/// A BIO-prefixed field label such as `B-QTY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub prefix: Prefix,
    pub field: Field,
}

impl Label {
    pub fn begin(field: Field) -> Self {
        Self {
            prefix: Prefix::Begin,
            field,
        }
    }

    pub fn inside(field: Field) -> Self {
        Self {
            prefix: Prefix::Inside,
            field,
        }
    }

    pub fn is_comment(&self) -> bool {
        self.field == Field::Comment
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.prefix.as_str(), self.field.label())
    }
}

/// A token with its ordered candidate labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub token: String,
    pub labels: Vec<Label>,
}

/// The single training label chosen for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FinalLabel {
    Tagged(Label),
    Other,
}

impl FinalLabel {
    /// The field behind this label with its BIO prefix dropped.
    pub fn field(&self) -> Option<Field> {
        match self {
            FinalLabel::Tagged(label) => Some(label.field),
            FinalLabel::Other => None,
        }
    }
}

impl fmt::Display for FinalLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinalLabel::Tagged(label) => label.fmt(f),
            FinalLabel::Other => f.write_str(OTHER_LABEL),
        }
    }
}

/// One output line worth of data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedToken {
    /// The token as it appears in the display string (not normalized).
    pub token: String,
    /// Feature columns, in output order.
    pub features: Vec<String>,
    /// Every prefixed label the token could carry.
    pub candidates: Vec<Label>,
    pub label: FinalLabel,
}

impl TranslatedToken {
    /// Token, features, then the final label.
    pub fn columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.features.len() + 2);
        columns.push(self.token.clone());
        columns.extend(self.features.iter().cloned());
        columns.push(self.label.to_string());
        columns
    }

    pub fn to_line(&self) -> String {
        join_line(&self.columns())
    }
}

/// Translation of one record, one entry per display token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedRecord {
    pub tokens: Vec<TranslatedToken>,
}

impl TranslatedRecord {
    /// Renders one newline-terminated line per token.
    pub fn to_lines(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            out.push_str(&token.to_line());
            out.push('\n');
        }
        out
    }

    /// Final labels with BIO prefixes stripped, in token order.
    pub fn fields(&self) -> Vec<Option<Field>> {
        self.tokens.iter().map(|t| t.label.field()).collect()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for TranslatedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lines())
    }
}
