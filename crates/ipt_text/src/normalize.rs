/// Normalizes a token for comparison against structured field text.
///
/// Surrounding parentheses are stripped (a bare `(` or `)` is kept as is) and
/// common unit plurals are singularized. The result is only used for matching;
/// the original token is what ends up in the output.
pub fn normalize_token(token: &str) -> &str {
    let stripped = token.trim_start_matches('(').trim_end_matches(')');
    let stripped = if stripped.is_empty() { token } else { stripped };
    singularize(stripped)
}

/// Maps a plural unit word to its singular form. Other words pass through.
///
/// The table is case-sensitive and limited to units seen in recipe data.
pub fn singularize(word: &str) -> &str {
    match word {
        "cups" => "cup",
        "tablespoons" => "tablespoon",
        "teaspoons" => "teaspoon",
        "pounds" => "pound",
        "ounces" => "ounce",
        "cloves" => "clove",
        "sprigs" => "sprig",
        "pinches" => "pinch",
        "bunches" => "bunch",
        "slices" => "slice",
        "grams" => "gram",
        "heads" => "head",
        "quarts" => "quart",
        "stalks" => "stalk",
        "pints" => "pint",
        "pieces" => "piece",
        "sticks" => "stick",
        "dashes" => "dash",
        "fillets" => "fillet",
        "cans" => "can",
        "ears" => "ear",
        "packages" => "package",
        "strips" => "strip",
        "bulbs" => "bulb",
        "bottles" => "bottle",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_surrounding_parens() {
        assert_eq!(normalize_token("(optional)"), "optional");
        assert_eq!(normalize_token("(about"), "about");
        assert_eq!(normalize_token("cup)"), "cup");
    }

    #[test]
    fn bare_parens_survive() {
        assert_eq!(normalize_token("("), "(");
        assert_eq!(normalize_token(")"), ")");
    }

    #[test]
    fn unit_plurals_singularized() {
        assert_eq!(normalize_token("cups"), "cup");
        assert_eq!(normalize_token("(tablespoons)"), "tablespoon");
        assert_eq!(normalize_token("cloves"), "clove");
    }

    #[test]
    fn other_words_untouched() {
        assert_eq!(normalize_token("flour"), "flour");
        assert_eq!(normalize_token("Cups"), "Cups");
        assert_eq!(normalize_token("1$1/2"), "1$1/2");
    }
}
