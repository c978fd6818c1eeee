//! Markdown report rendering.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use numguess_core::model::Letter;
use numguess_core::report::AnalysisReport;

/// Render an analysis report as a markdown document.
pub fn to_markdown(report: &AnalysisReport) -> String {
    let stats = &report.stats;
    let mut md = String::new();

    let _ = writeln!(md, "# Heuristic analysis — {}", report.dataset.path);
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "{} questions | {} with percentage values | generated {}",
        stats.total,
        stats.with_percentages,
        report.created_at.format("%Y-%m-%d %H:%M UTC")
    );
    let _ = writeln!(md);

    let _ = writeln!(md, "## Correct answers by letter");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Letter | Questions |");
    let _ = writeln!(md, "|--------|-----------|");
    for letter in Letter::ALL {
        let count = stats.correct_by_letter.get(&letter).copied().unwrap_or(0);
        let _ = writeln!(md, "| {letter} | {count} |");
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Guess outcomes");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Matched options | Questions | Correct guessed |");
    let _ = writeln!(md, "|-----------------|-----------|-----------------|");
    for (count, bucket) in stats.by_match_count.iter().enumerate() {
        let _ = writeln!(md, "| {count} | {} | {} |", bucket.problems, bucket.correct);
    }
    let _ = writeln!(md);

    let _ = writeln!(
        md,
        "**Exactly one guess:** {} ({} correct). \
         **At least one guess:** {} ({} correct).",
        stats.exactly_one(),
        stats.exactly_one_correct(),
        stats.at_least_one(),
        stats.at_least_one_correct()
    );

    md
}

/// Write the markdown report to a file.
pub fn write_markdown_report(report: &AnalysisReport, path: &Path) -> Result<()> {
    let md = to_markdown(report);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, md)
        .with_context(|| format!("failed to write markdown report to {}", path.display()))?;
    Ok(())
}
