//! Per-problem pipeline and the whole-dataset analysis entry point.
//!
//! The pipeline is a linear pass per problem: tokenize the question,
//! extract numbers, parse the options, generate candidates, match. The
//! dataset-level entry point is an explicit fold with no process-wide
//! state; aggregate counters live in the returned [`AggregateStats`].

use crate::candidates::{generate_candidates, match_options};
use crate::extract::extract_numbers;
use crate::model::{Problem, ProblemAnalysis};
use crate::options::parse_options;
use crate::statistics::AggregateStats;
use crate::tokenize::tokenize;

/// Run the heuristic pipeline over one problem.
pub fn analyze_problem(problem: &Problem) -> ProblemAnalysis {
    let tokens: Vec<String> = tokenize(&problem.question).collect();
    let numbers = extract_numbers(&tokens);
    let parsed_options = parse_options(&problem.options);
    let candidates = generate_candidates(&numbers.plain, &numbers.percent);
    let match_result = match_options(&parsed_options, &candidates, problem.correct);

    tracing::debug!(
        plain = numbers.plain.len(),
        percent = numbers.percent.len(),
        options = parsed_options.len(),
        candidates = candidates.len(),
        matched = match_result.matched.len(),
        correct_matched = match_result.correct_matched,
        "analyzed problem"
    );

    ProblemAnalysis {
        plain_values: numbers.plain,
        percent_values: numbers.percent,
        parsed_options,
        candidates,
        match_result,
    }
}

/// The outcome of analyzing a full problem sequence.
#[derive(Debug, Clone)]
pub struct AnalysisRun {
    /// Per-problem derived records, in input order.
    pub analyses: Vec<ProblemAnalysis>,
    /// Aggregate counters over all problems.
    pub stats: AggregateStats,
}

/// Analyze every problem and accumulate aggregate statistics.
pub fn run_analysis(problems: &[Problem]) -> AnalysisRun {
    let mut stats = AggregateStats::default();
    let analyses = problems
        .iter()
        .map(|problem| {
            let analysis = analyze_problem(problem);
            stats.record(&analysis);
            analysis
        })
        .collect();
    AnalysisRun { analyses, stats }
}
