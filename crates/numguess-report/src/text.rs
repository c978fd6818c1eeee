//! Plain-text summary and per-problem detail rendering.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use numguess_core::model::{Letter, Problem, ProblemAnalysis};
use numguess_core::report::AnalysisReport;

/// Render the aggregate summary of a report as plain text.
pub fn render_summary(report: &AnalysisReport) -> String {
    let stats = &report.stats;
    let mut out = String::new();

    let _ = writeln!(out, "Dataset analyzed: {}", report.dataset.path);
    let _ = writeln!(out);

    let _ = writeln!(out, "Correct answers by answer choice:");
    for letter in Letter::ALL {
        let count = stats.correct_by_letter.get(&letter).copied().unwrap_or(0);
        let _ = writeln!(out, "  {letter} {count}");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Total number of questions: {}", stats.total);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Questions with at least one percentage value: {}",
        stats.with_percentages
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Questions with exactly one generated guess: {}",
        stats.exactly_one()
    );
    let _ = writeln!(
        out,
        "  of which the guess was correct: {}",
        stats.exactly_one_correct()
    );

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Questions with at least one generated guess: {}",
        stats.at_least_one()
    );
    let _ = writeln!(
        out,
        "  of which the correct option was guessed: {}",
        stats.at_least_one_correct()
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "Guess-count distribution:");
    for (count, bucket) in stats.by_match_count.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {count} matched: {} questions ({} correct)",
            bucket.problems, bucket.correct
        );
    }

    out
}

/// Render one problem with everything the pipeline derived from it.
pub fn render_problem(problem: &Problem, analysis: &ProblemAnalysis) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Question: {}", problem.question);
    for option in &problem.options {
        let _ = writeln!(out, "  {option}");
    }
    let _ = writeln!(out, "Correct: {}", problem.correct);
    if !problem.rationale.is_empty() {
        let _ = writeln!(out, "Rationale: {}", problem.rationale);
    }
    let _ = writeln!(out, "Plain values: {:?}", analysis.plain_values);
    let _ = writeln!(out, "Percentage values: {:?}", analysis.percent_values);
    let _ = writeln!(out, "Parsed options: {:?}", analysis.parsed_options);
    let _ = writeln!(out, "Candidates: {:?}", analysis.candidates);
    let _ = writeln!(out, "Matched indices: {:?}", analysis.match_result.matched);
    let _ = writeln!(
        out,
        "Correct option matched: {}",
        analysis.match_result.correct_matched
    );

    out
}

/// Write the text summary to a file.
pub fn write_text_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let text = render_summary(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, text)
        .with_context(|| format!("failed to write text report to {}", path.display()))?;
    Ok(())
}
