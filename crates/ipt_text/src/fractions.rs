/// Vulgar fraction glyphs and their ASCII spelling.
const FRACTIONS: [(char, &str); 15] = [
    ('\u{215B}', "1/8"),
    ('\u{215C}', "3/8"),
    ('\u{215D}', "5/8"),
    ('\u{215E}', "7/8"),
    ('\u{2159}', "1/6"),
    ('\u{215A}', "5/6"),
    ('\u{2155}', "1/5"),
    ('\u{2156}', "2/5"),
    ('\u{2157}', "3/5"),
    ('\u{2158}', "4/5"),
    ('\u{00BC}', "1/4"),
    ('\u{00BE}', "3/4"),
    ('\u{2153}', "1/3"),
    ('\u{2154}', "2/3"),
    ('\u{00BD}', "1/2"),
];

/// Replaces Unicode vulgar fraction glyphs with a space followed by the ASCII
/// fraction, so "1½" reads as the mixed number "1 1/2".
///
/// Text without fraction glyphs is returned unchanged.
pub fn normalize_unicode_fractions(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match FRACTIONS.iter().find(|(glyph, _)| *glyph == ch) {
            Some((_, ascii)) => {
                normalized.push(' ');
                normalized.push_str(ascii);
            }
            None => normalized.push(ch),
        }
    }
    normalized
}
