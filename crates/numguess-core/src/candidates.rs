//! Candidate answer generation and option matching.
//!
//! Candidates are synthesized from the extracted numbers and compared
//! against the parsed options. When any percentage value is present the
//! generator takes the percentage branch exclusively; otherwise it forms
//! every ordered pair of plain values (with repetition) under the four
//! basic operators.

use crate::model::{Letter, MatchResult};

/// Generate candidate answers from the extracted value sequences.
///
/// Generation order is deterministic (outer loop over plain values, inner
/// over the second operand) so traces are reproducible; matching treats
/// the output as a set.
pub fn generate_candidates(plain: &[f64], percent: &[f64]) -> Vec<f64> {
    let mut candidates = Vec::new();
    if !percent.is_empty() {
        for &n in plain {
            for &p in percent {
                candidates.push(n * p / 100.0);
                candidates.push(n * (100.0 - p) / 100.0);
            }
        }
    } else {
        for &n in plain {
            for &n2 in plain {
                candidates.push(n + n2);
                candidates.push(n - n2);
                candidates.push(n * n2);
                if n2 != 0.0 {
                    candidates.push(n / n2);
                }
            }
        }
    }
    candidates
}

/// Determine which option indices match a generated candidate.
///
/// Comparison is exact `f64` equality with no tolerance. An option whose
/// text is `0.2` will not match a computed `0.19999999999999998`; loosening
/// this would change the reported accuracy statistics, so it stays exact.
pub fn match_options(parsed_options: &[f64], candidates: &[f64], correct: Letter) -> MatchResult {
    let matched: Vec<usize> = parsed_options
        .iter()
        .enumerate()
        .filter(|&(_, &value)| candidates.iter().any(|&c| c == value))
        .map(|(i, _)| i)
        .collect();
    let correct_index = correct.index();
    let correct_matched = matched.contains(&correct_index);
    MatchResult {
        matched,
        correct_index,
        correct_matched,
    }
}
