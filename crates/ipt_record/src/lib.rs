//! Record layer for the ingredient phrase tagger.
//!
//! Receives labeled rows as raw column maps, validates that every required
//! column is present, types each structured field as text, decimal, or absent,
//! and splits the display string off so the tagger can align it against the
//! remaining fields.

mod config;
mod types;

use std::collections::BTreeMap;
use std::str::FromStr;
use std::time::Instant;

use rust_decimal::Decimal;
use thiserror::Error;
use tracing::{info, warn, Level};

pub use crate::config::RecordConfig;
pub use crate::types::{
    Field, FieldValue, IngredientRecord, IngredientRow, RawIngredientRow, FIELD_PRIORITY,
};

/// Column holding the free-text display string.
pub const INPUT_COLUMN: &str = "input";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("row is missing required column `{0}`")]
    MissingField(&'static str),
    #[error("column `{column}` is not a decimal: {value:?}")]
    InvalidNumber { column: &'static str, value: String },
}

/// Validates a raw row and splits it into display string and structured record.
///
/// Every structured column and the `input` column must be present, even if
/// empty. Text columns are cleaned and trimmed; numeric columns are parsed as
/// exact decimals without rounding. Empty columns become [`FieldValue::Absent`].
pub fn ingest_row(raw: RawIngredientRow, cfg: &RecordConfig) -> Result<IngredientRow, RecordError> {
    let start = Instant::now();
    let span = tracing::span!(
        Level::INFO,
        "ipt_record.ingest",
        columns = raw.columns.len()
    );
    let _guard = span.enter();

    match ingest_inner(raw, cfg) {
        Ok(row) => {
            info!(
                display_len = row.display.len(),
                present_fields = present_field_count(&row.record),
                elapsed_micros = start.elapsed().as_micros(),
                "ingest_success"
            );
            Ok(row)
        }
        Err(err) => {
            warn!(error = %err, "ingest_failure");
            Err(err)
        }
    }
}

fn ingest_inner(raw: RawIngredientRow, cfg: &RecordConfig) -> Result<IngredientRow, RecordError> {
    cfg.validate()?;

    let mut columns = raw.columns;
    let display = take_column(&mut columns, INPUT_COLUMN)?;

    let mut record = IngredientRecord::default();
    for field in FIELD_PRIORITY {
        let raw_value = take_column(&mut columns, field.column())?;
        *record.get_mut(field) = if field.is_numeric() {
            parse_numeric_column(field, &raw_value)?
        } else {
            parse_text_column(raw_value, cfg.strip_control_chars)
        };
    }

    Ok(IngredientRow { display, record })
}

fn take_column(
    columns: &mut BTreeMap<String, String>,
    column: &'static str,
) -> Result<String, RecordError> {
    columns
        .remove(column)
        .ok_or(RecordError::MissingField(column))
}

fn parse_text_column(raw: String, strip_control: bool) -> FieldValue {
    let cleaned = if strip_control {
        raw.chars()
            .filter_map(|c| match c {
                c if c.is_whitespace() => Some(' '),
                c if c.is_control() => None,
                c => Some(c),
            })
            .collect::<String>()
    } else {
        raw
    };

    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        FieldValue::Absent
    } else {
        FieldValue::Text(trimmed.to_string())
    }
}

fn parse_numeric_column(field: Field, raw: &str) -> Result<FieldValue, RecordError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(FieldValue::Absent);
    }

    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map(FieldValue::Number)
        .map_err(|_| RecordError::InvalidNumber {
            column: field.column(),
            value: trimmed.to_string(),
        })
}

fn present_field_count(record: &IngredientRecord) -> usize {
    FIELD_PRIORITY
        .iter()
        .filter(|field| !record.get(**field).is_absent())
        .count()
}
