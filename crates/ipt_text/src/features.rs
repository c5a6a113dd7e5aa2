use crate::config::FeatureConfig;

/// Computes the feature columns for the token at 1-based `position` within
/// `tokens`.
///
/// Columns, in order:
/// 1. `I<position>`
/// 2. `L<bucket>`, see [`length_group`]
/// 3. `YesCAP` / `NoCAP`
/// 4. `YesPAREN` / `NoPAREN`
pub fn compute_features<S: AsRef<str>>(
    token: &str,
    position: usize,
    tokens: &[S],
    cfg: &FeatureConfig,
) -> Vec<String> {
    vec![
        format!("I{position}"),
        format!("L{}", length_group(tokens.len(), &cfg.length_buckets)),
        format!("{}CAP", yes_no(is_capitalized(token))),
        format!("{}PAREN", yes_no(inside_parenthesis(token, tokens))),
    ]
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Returns the first bucket strictly greater than `token_count`, or `"X"`.
pub fn length_group(token_count: usize, buckets: &[usize]) -> String {
    buckets
        .iter()
        .find(|bound| token_count < **bound)
        .map(|bound| bound.to_string())
        .unwrap_or_else(|| "X".to_string())
}

/// True when the token starts with an ASCII uppercase letter.
pub fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(|ch| ch.is_ascii_uppercase())
}

/// True when the token is a parenthesis, or when the space-joined line
/// contains an opening parenthesis, then the token, then a closing one.
///
/// The check is textual: any occurrence of the token inside the parenthesized
/// stretch counts, not only the occurrence at this token's position.
pub fn inside_parenthesis<S: AsRef<str>>(token: &str, tokens: &[S]) -> bool {
    if token == "(" || token == ")" {
        return true;
    }

    let line = tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");

    let Some(open) = line.find('(') else {
        return false;
    };
    let after_open = &line[open + 1..];
    let Some(at) = after_open.find(token) else {
        return false;
    };
    after_open[at + token.len()..].contains(')')
}
