use std::str::FromStr;

use ipt_text::unclump;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+$").expect("integer pattern compiles"));
// Anchored at the start only: "1 1/2cups" still reads as 1.5.
static MIXED_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)\s+([0-9])/([0-9])").expect("mixed number pattern compiles")
});
static SIMPLE_FRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9])/([0-9])$").expect("simple fraction pattern compiles"));

/// A token looked numeric but could not be turned into a decimal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NumericError {
    #[error("numeric token {0:?} does not fit in a decimal")]
    OutOfRange(String),
    #[error("numeric token {0:?} has a zero denominator")]
    ZeroDenominator(String),
}

/// Parses a display token as a quantity rounded to two decimal places.
///
/// The token is unclumped first, so `"1$1/2"` is read as `"1 1/2"`. Forms are
/// tried in order and the first match wins:
/// 1. integer digits: `"2"`
/// 2. mixed number with single-digit fraction: `"1 1/2"`
/// 3. single-digit fraction: `"1/3"`
///
/// Anything else, including multi-digit fractions like `"10/20"`, is not a
/// number and yields `Ok(None)`.
pub fn parse_number(token: &str) -> Result<Option<Decimal>, NumericError> {
    let text = unclump(token);

    if INTEGER.is_match(&text) {
        let value = Decimal::from_str(&text).map_err(|_| NumericError::OutOfRange(text.clone()))?;
        return Ok(Some(round_quantity(value)));
    }

    if let Some(caps) = MIXED_NUMBER.captures(&text) {
        let whole =
            Decimal::from_str(&caps[1]).map_err(|_| NumericError::OutOfRange(text.clone()))?;
        let fraction = fraction_value(&caps[2], &caps[3], &text)?;
        let value = whole
            .checked_add(fraction)
            .ok_or_else(|| NumericError::OutOfRange(text.clone()))?;
        return Ok(Some(round_quantity(value)));
    }

    if let Some(caps) = SIMPLE_FRACTION.captures(&text) {
        let value = fraction_value(&caps[1], &caps[2], &text)?;
        return Ok(Some(round_quantity(value)));
    }

    Ok(None)
}

fn fraction_value(numerator: &str, denominator: &str, text: &str) -> Result<Decimal, NumericError> {
    let numerator =
        Decimal::from_str(numerator).map_err(|_| NumericError::OutOfRange(text.to_string()))?;
    let denominator =
        Decimal::from_str(denominator).map_err(|_| NumericError::OutOfRange(text.to_string()))?;
    if denominator.is_zero() {
        return Err(NumericError::ZeroDenominator(text.to_string()));
    }
    numerator
        .checked_div(denominator)
        .ok_or_else(|| NumericError::OutOfRange(text.to_string()))
}

/// Two places, ties away from zero: `1/8` reads as `0.13`.
fn round_quantity(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
