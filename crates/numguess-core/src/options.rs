//! Answer-option parsing.
//!
//! Each raw option string carries a fixed-width 4-character label prefix
//! (`"A ) "` in the tokenized dataset format) that is stripped before the
//! remainder is parsed into a numeric value.
//!
//! The parse order across the five options is deliberately asymmetric:
//! options 0..=3 are parsed first
//! and assembled into a 4-element list; a failure on any of them empties
//! the result for the whole problem. Only then is option 4 attempted, and
//! its failure is absorbed, keeping the 4-element list. The returned list
//! therefore always has length 0, 4, or 5.

use crate::tokenize::tokenize;

/// Strip the fixed-width 4-character label prefix from a raw option.
///
/// Char-boundary safe; strings of 4 characters or fewer strip to empty.
pub fn strip_label(option: &str) -> &str {
    option
        .char_indices()
        .nth(4)
        .map(|(i, _)| &option[i..])
        .unwrap_or("")
}

/// Parse one stripped option string into a numeric value.
///
/// Tokens are scanned left to right; the first one that parses as a float
/// wins, trying the raw token and then the token with commas removed
/// (treating comma as a thousands separator). If no token parses, the
/// entire stripped string is tried as a single float.
pub fn parse_option(stripped: &str) -> Option<f64> {
    for token in tokenize(stripped) {
        if let Ok(value) = token.parse::<f64>() {
            return Some(value);
        }
        let unseparated = token.replace(',', "");
        if let Ok(value) = unseparated.parse::<f64>() {
            return Some(value);
        }
    }
    stripped.trim().parse::<f64>().ok()
}

/// Parse the five raw option strings into numeric values.
///
/// Returns a list of length 5 (all parsed), 4 (fifth option unparseable,
/// silently dropped), or 0 (one of the first four unparseable).
pub fn parse_options(options: &[String]) -> Vec<f64> {
    let mut first_four = Vec::with_capacity(5);
    for raw in options.iter().take(4) {
        match parse_option(strip_label(raw)) {
            Some(value) => first_four.push(value),
            None => return Vec::new(),
        }
    }
    if first_four.len() < 4 {
        return Vec::new();
    }

    let mut parsed = first_four;
    if let Some(fifth) = options.get(4).and_then(|raw| parse_option(strip_label(raw))) {
        parsed.push(fifth);
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(options: [&str; 5]) -> Vec<String> {
        options.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn strips_four_character_label() {
        assert_eq!(strip_label("A ) 25"), "25");
        assert_eq!(strip_label("E ) 1,000 km"), "1,000 km");
    }

    #[test]
    fn short_option_strips_to_empty() {
        assert_eq!(strip_label("A)5"), "");
        assert_eq!(strip_label(""), "");
    }

    #[test]
    fn first_parsing_token_wins() {
        assert_eq!(parse_option("5 km / hr"), Some(5.0));
        assert_eq!(parse_option("about 12 or 13"), Some(12.0));
    }

    #[test]
    fn comma_thousands_separator() {
        assert_eq!(parse_option("1,000"), Some(1000.0));
        assert_eq!(parse_option("Rs . 2,500"), Some(2500.0));
    }

    #[test]
    fn unparseable_option_is_none() {
        assert_eq!(parse_option("none of these"), None);
        assert_eq!(parse_option(""), None);
    }

    #[test]
    fn decimal_options() {
        assert_eq!(parse_option("3.5"), Some(3.5));
        assert_eq!(parse_option("0.2"), Some(0.2));
    }

    #[test]
    fn all_five_parse() {
        let parsed = parse_options(&raw(["A ) 1", "B ) 2", "C ) 3", "D ) 4", "E ) 5"]));
        assert_eq!(parsed, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn fifth_failure_keeps_first_four() {
        let parsed = parse_options(&raw([
            "A ) 1",
            "B ) 2",
            "C ) 3",
            "D ) 4",
            "E ) none of these",
        ]));
        assert_eq!(parsed, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn early_failure_empties_result() {
        let parsed = parse_options(&raw([
            "A ) 1",
            "B ) cannot be determined",
            "C ) 3",
            "D ) 4",
            "E ) 5",
        ]));
        assert!(parsed.is_empty());
    }

    #[test]
    fn fewer_than_four_options_empties_result() {
        let short = vec!["A ) 1".to_string(), "B ) 2".to_string()];
        assert!(parse_options(&short).is_empty());
    }
}
