//! Core data model types for numguess.
//!
//! These are the fundamental types the whole system uses to represent
//! problems, extracted numbers, and per-problem analysis results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An answer-option label, `A` through `E`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Letter {
    A,
    B,
    C,
    D,
    E,
}

impl Letter {
    /// All letters in option order.
    pub const ALL: [Letter; 5] = [Letter::A, Letter::B, Letter::C, Letter::D, Letter::E];

    /// Zero-based option index (`A` → 0 … `E` → 4).
    pub fn index(self) -> usize {
        match self {
            Letter::A => 0,
            Letter::B => 1,
            Letter::C => 2,
            Letter::D => 3,
            Letter::E => 4,
        }
    }

    /// Letter for a zero-based option index, if in range.
    pub fn from_index(index: usize) -> Option<Letter> {
        Letter::ALL.get(index).copied()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Letter::A => write!(f, "A"),
            Letter::B => write!(f, "B"),
            Letter::C => write!(f, "C"),
            Letter::D => write!(f, "D"),
            Letter::E => write!(f, "E"),
        }
    }
}

impl FromStr for Letter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" | "a" => Ok(Letter::A),
            "B" | "b" => Ok(Letter::B),
            "C" | "c" => Ok(Letter::C),
            "D" | "d" => Ok(Letter::D),
            "E" | "e" => Ok(Letter::E),
            other => Err(format!("unknown option letter: {other}")),
        }
    }
}

/// One multiple-choice arithmetic word problem.
///
/// Immutable input record; the pipeline never mutates it and attaches all
/// derived data to a separate [`ProblemAnalysis`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    /// The question text.
    pub question: String,
    /// The five answer options, each carrying a 4-character label prefix
    /// (e.g. `"A ) "` in the tokenized dataset format).
    pub options: Vec<String>,
    /// The official correct option letter.
    pub correct: Letter,
    /// Worked solution text accompanying the problem.
    #[serde(default)]
    pub rationale: String,
}

/// Which parse succeeded first when a token was read as a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericKind {
    Int,
    Float,
}

/// A number extracted from question text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericValue {
    /// The parsed value.
    pub value: f64,
    /// Whether the token parsed as an integer or only as a float.
    pub kind: NumericKind,
    /// True when the token was immediately followed by a literal `%` token.
    pub percentage: bool,
}

/// Which option indices matched a generated candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Indices of options whose parsed value equals some candidate.
    pub matched: Vec<usize>,
    /// Zero-based index of the official correct option.
    pub correct_index: usize,
    /// True iff `correct_index` is among `matched`.
    pub correct_matched: bool,
}

/// Everything the pipeline derives from one problem.
///
/// Held only for the duration of a run; the source [`Problem`] stays
/// untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemAnalysis {
    /// Plain (non-percentage) numeric values, in token order.
    pub plain_values: Vec<f64>,
    /// Percentage values, in token order.
    pub percent_values: Vec<f64>,
    /// Parsed option values; length 0, 4, or 5.
    pub parsed_options: Vec<f64>,
    /// Generated candidate answers, in generation order.
    pub candidates: Vec<f64>,
    /// Match outcome against the parsed options.
    pub match_result: MatchResult,
}

impl ProblemAnalysis {
    /// Number of matched option indices.
    pub fn match_count(&self) -> usize {
        self.match_result.matched.len()
    }

    /// True when the question contained at least one percentage value.
    pub fn has_percentages(&self) -> bool {
        !self.percent_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letter_display_and_parse() {
        assert_eq!(Letter::A.to_string(), "A");
        assert_eq!(Letter::E.to_string(), "E");
        assert_eq!("C".parse::<Letter>().unwrap(), Letter::C);
        assert_eq!("b".parse::<Letter>().unwrap(), Letter::B);
        assert!("F".parse::<Letter>().is_err());
    }

    #[test]
    fn letter_index_roundtrip() {
        for (i, letter) in Letter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
            assert_eq!(Letter::from_index(i), Some(*letter));
        }
        assert_eq!(Letter::from_index(5), None);
    }

    #[test]
    fn problem_serde_roundtrip() {
        let problem = Problem {
            question: "What is 2 + 2 ?".into(),
            options: vec![
                "A ) 3".into(),
                "B ) 4".into(),
                "C ) 5".into(),
                "D ) 6".into(),
                "E ) 7".into(),
            ],
            correct: Letter::B,
            rationale: "2 + 2 = 4".into(),
        };
        let json = serde_json::to_string(&problem).unwrap();
        let back: Problem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.correct, Letter::B);
        assert_eq!(back.options.len(), 5);
    }

    #[test]
    fn rationale_defaults_to_empty() {
        let json = r#"{"question":"q","options":["A ) 1","B ) 2","C ) 3","D ) 4","E ) 5"],"correct":"A"}"#;
        let problem: Problem = serde_json::from_str(json).unwrap();
        assert!(problem.rationale.is_empty());
    }
}
