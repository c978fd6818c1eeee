//! Aggregate statistics over a full analysis run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Letter, ProblemAnalysis};

/// One cell of the match-count distribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchBucket {
    /// Problems whose matched-index count fell in this bucket.
    pub problems: usize,
    /// Of those, problems where the correct option was among the matches.
    pub correct: usize,
}

/// Running counts accumulated across all problems.
///
/// Recording is append-only and per-problem, so partial stats from
/// independent partitions of a dataset can be combined with [`merge`]
/// (associative and commutative).
///
/// [`merge`]: AggregateStats::merge
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    /// Total problems analyzed.
    pub total: usize,
    /// Problems by official correct letter.
    pub correct_by_letter: BTreeMap<Letter, usize>,
    /// Problems with at least one percentage value.
    pub with_percentages: usize,
    /// Distribution of matched-index count (0..=5) crossed with whether
    /// the correct option was matched.
    pub by_match_count: [MatchBucket; 6],
}

impl AggregateStats {
    /// Fold one problem's analysis into the counters.
    pub fn record(&mut self, analysis: &ProblemAnalysis) {
        self.total += 1;
        if let Some(letter) = Letter::from_index(analysis.match_result.correct_index) {
            *self.correct_by_letter.entry(letter).or_insert(0) += 1;
        }
        if analysis.has_percentages() {
            self.with_percentages += 1;
        }
        let bucket = &mut self.by_match_count[analysis.match_count().min(5)];
        bucket.problems += 1;
        if analysis.match_result.correct_matched {
            bucket.correct += 1;
        }
    }

    /// Build stats from scratch over a sequence of analyses.
    pub fn collect<'a, I>(analyses: I) -> Self
    where
        I: IntoIterator<Item = &'a ProblemAnalysis>,
    {
        let mut stats = Self::default();
        for analysis in analyses {
            stats.record(analysis);
        }
        stats
    }

    /// Problems with exactly one matched index.
    pub fn exactly_one(&self) -> usize {
        self.by_match_count[1].problems
    }

    /// Problems with exactly one matched index that was the correct one.
    pub fn exactly_one_correct(&self) -> usize {
        self.by_match_count[1].correct
    }

    /// Problems with at least one matched index.
    pub fn at_least_one(&self) -> usize {
        self.by_match_count[1..].iter().map(|b| b.problems).sum()
    }

    /// Problems with at least one matched index, the correct one included.
    pub fn at_least_one_correct(&self) -> usize {
        self.by_match_count[1..].iter().map(|b| b.correct).sum()
    }

    /// Combine counters from an independently processed partition.
    pub fn merge(&mut self, other: &AggregateStats) {
        self.total += other.total;
        for (letter, count) in &other.correct_by_letter {
            *self.correct_by_letter.entry(*letter).or_insert(0) += count;
        }
        self.with_percentages += other.with_percentages;
        for (bucket, other_bucket) in self.by_match_count.iter_mut().zip(&other.by_match_count) {
            bucket.problems += other_bucket.problems;
            bucket.correct += other_bucket.correct;
        }
    }
}
