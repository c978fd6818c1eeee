//! Numeric extraction from question tokens.
//!
//! Each token is tried as an integer, then as a float; everything else is
//! skipped. A numeric token immediately followed by a literal `%` token is
//! classified as a percentage value, all others as plain values. The
//! lookahead is index-based over a materialized token slice so that
//! end-of-sequence lookahead is a safe no-op.

use crate::model::{NumericKind, NumericValue};
use crate::tokenize::tokenize;

/// The two ordered value sequences extracted from a question.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedNumbers {
    /// Plain numeric values, in token order, duplicates preserved.
    pub plain: Vec<f64>,
    /// Percentage values, in token order, duplicates preserved.
    pub percent: Vec<f64>,
}

/// Extract every numeric token as a [`NumericValue`] with kind and
/// percentage tag.
pub fn extract_values(tokens: &[String]) -> Vec<NumericValue> {
    let mut values = Vec::new();
    for (i, token) in tokens.iter().enumerate() {
        let parsed = if let Ok(v) = token.parse::<i64>() {
            Some((v as f64, NumericKind::Int))
        } else if let Ok(v) = token.parse::<f64>() {
            Some((v, NumericKind::Float))
        } else {
            None
        };
        if let Some((value, kind)) = parsed {
            let percentage = tokens.get(i + 1).is_some_and(|next| next == "%");
            values.push(NumericValue {
                value,
                kind,
                percentage,
            });
        }
    }
    values
}

/// Partition the numeric tokens of `tokens` into plain and percentage
/// value sequences.
pub fn extract_numbers(tokens: &[String]) -> ExtractedNumbers {
    let mut extracted = ExtractedNumbers::default();
    for value in extract_values(tokens) {
        if value.percentage {
            extracted.percent.push(value.value);
        } else {
            extracted.plain.push(value.value);
        }
    }
    extracted
}

/// Tokenize `text` and extract its numbers in one step.
pub fn extract_from_text(text: &str) -> ExtractedNumbers {
    let tokens: Vec<String> = tokenize(text).collect();
    extract_numbers(&tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers_in_token_order() {
        let extracted = extract_from_text("John has 3 apples and 5 oranges");
        assert_eq!(extracted.plain, vec![3.0, 5.0]);
        assert!(extracted.percent.is_empty());
    }

    #[test]
    fn percentage_lookahead() {
        let extracted = extract_from_text("What is 20 % of 50 ?");
        assert_eq!(extracted.percent, vec![20.0]);
        assert_eq!(extracted.plain, vec![50.0]);
    }

    #[test]
    fn trailing_number_lookahead_is_safe() {
        let extracted = extract_from_text("the answer is 42");
        assert_eq!(extracted.plain, vec![42.0]);
    }

    #[test]
    fn duplicates_preserved() {
        let extracted = extract_from_text("add 2 and 2");
        assert_eq!(extracted.plain, vec![2.0, 2.0]);
    }

    #[test]
    fn floats_and_ints_both_extracted() {
        let tokens: Vec<String> = tokenize("3.5 km in 2 hours").collect();
        let values = extract_values(&tokens);
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].value, 3.5);
        assert_eq!(values[0].kind, NumericKind::Float);
        assert_eq!(values[1].value, 2.0);
        assert_eq!(values[1].kind, NumericKind::Int);
    }

    #[test]
    fn non_numeric_tokens_skipped() {
        let extracted = extract_from_text("no numbers here at all");
        assert!(extracted.plain.is_empty());
        assert!(extracted.percent.is_empty());
    }

    #[test]
    fn comma_grouped_numbers_are_not_extracted() {
        // Only the option parser strips thousands separators; question
        // tokens are tried verbatim, so "1,200" is not numeric here.
        let extracted = extract_from_text("he earns Rs . 1,200 monthly");
        assert!(extracted.plain.is_empty());
    }

    #[test]
    fn percent_without_preceding_number_is_inert() {
        let extracted = extract_from_text("a % sign alone and 7 after");
        assert_eq!(extracted.plain, vec![7.0]);
        assert!(extracted.percent.is_empty());
    }
}
