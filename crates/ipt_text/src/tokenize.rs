use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

static GLUED_GRAMS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)g").expect("glued grams pattern compiles"));
static GLUED_OUNCES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)oz").expect("glued ounces pattern compiles"));
static GLUED_MILLILITERS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)ml").expect("glued milliliters pattern compiles"));
static MIXED_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([0-9]+)\s+([0-9])/([0-9])").expect("mixed number pattern compiles")
});

/// Unit words that are sometimes written with a trailing slash ("1 cup/240ml").
const SLASHED_UNITS: [&str; 7] = [
    "cup",
    "tablespoon",
    "teaspoon",
    "pound",
    "ounce",
    "quart",
    "pint",
];

/// Splits display text into tokens.
///
/// Glued abbreviations are expanded first ("100g" reads as "100 grams"), a
/// slash right after an American unit word becomes a space, and mixed numbers
/// are clumped into a single token with [`clump_fractions`]. The prepared text
/// is then split on whitespace; `,`, `(` and `)` always form tokens of their
/// own. Token order follows the text.
pub fn tokenize(text: &str) -> Vec<String> {
    let expanded = expand_abbreviations(text);
    let prepared = clump_fractions(&expanded);

    let mut tokens = Vec::new();
    let mut current = String::new();
    for ch in prepared.chars() {
        if ch.is_whitespace() {
            flush(&mut tokens, &mut current);
        } else if matches!(ch, ',' | '(' | ')') {
            flush(&mut tokens, &mut current);
            tokens.push(ch.to_string());
        } else {
            current.push(ch);
        }
    }
    flush(&mut tokens, &mut current);

    tokens
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

fn expand_abbreviations(text: &str) -> String {
    let text = GLUED_GRAMS.replace_all(text, "${1} grams");
    let text = GLUED_OUNCES.replace_all(&text, "${1} ounces");
    let mut text = GLUED_MILLILITERS
        .replace_all(&text, "${1} milliliters")
        .into_owned();

    for unit in SLASHED_UNITS {
        text = text.replace(&format!("{unit}/"), &format!("{unit} "));
        text = text.replace(&format!("{unit}s/"), &format!("{unit}s "));
    }
    text
}

/// Joins the integer and fractional part of a mixed number with `$` so the
/// tokenizer keeps them together: `"aaa 1 2/3 bbb"` becomes `"aaa 1$2/3 bbb"`.
///
/// Only single-digit numerators and denominators are recognized.
pub fn clump_fractions(text: &str) -> Cow<'_, str> {
    MIXED_NUMBER.replace_all(text, "${1}$$${2}/${3}")
}

/// Reverses [`clump_fractions`] on a single token: `"1$1/2"` becomes `"1 1/2"`.
pub fn unclump(token: &str) -> String {
    token.replace('$', " ")
}
