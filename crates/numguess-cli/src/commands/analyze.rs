//! The `numguess analyze` command.

use std::path::PathBuf;

use anyhow::Result;

use numguess_core::dataset::load_dataset;
use numguess_core::pipeline::run_analysis;
use numguess_core::report::AnalysisReport;
use numguess_report::markdown::write_markdown_report;
use numguess_report::text::{render_problem, render_summary, write_text_report};

pub fn execute(
    dataset_path: PathBuf,
    output: Option<PathBuf>,
    format: String,
    show_sample: bool,
) -> Result<()> {
    let problems = load_dataset(&dataset_path)?;
    eprintln!(
        "numguess v0.1.0 — analyzing {} problems from {}",
        problems.len(),
        dataset_path.display()
    );

    let run = run_analysis(&problems);
    let report = AnalysisReport::new(&dataset_path.display().to_string(), run);

    print_summary_table(&report);
    println!("{}", render_summary(&report));

    if show_sample {
        if let (Some(problem), Some(analysis)) = (problems.first(), report.analyses.first()) {
            println!("Sample problem:");
            println!("{}", render_problem(problem, analysis));
        }
    }

    if let Some(output) = output {
        std::fs::create_dir_all(&output)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");

        for fmt in format.split(',').map(|s| s.trim()) {
            match fmt {
                "json" => {
                    let path = output.join(format!("report-{timestamp}.json"));
                    report.save_json(&path)?;
                    eprintln!("JSON report: {}", path.display());
                }
                "text" => {
                    let path = output.join(format!("report-{timestamp}.txt"));
                    write_text_report(&report, &path)?;
                    eprintln!("Text report: {}", path.display());
                }
                "markdown" | "md" => {
                    let path = output.join(format!("report-{timestamp}.md"));
                    write_markdown_report(&report, &path)?;
                    eprintln!("Markdown report: {}", path.display());
                }
                other => {
                    eprintln!("Unknown format: {other}");
                }
            }
        }
    }

    Ok(())
}

fn print_summary_table(report: &AnalysisReport) {
    use comfy_table::{Cell, Table};

    let stats = &report.stats;
    let mut table = Table::new();
    table.set_header(vec![
        "Questions",
        "With %",
        "Exactly 1 guess",
        "Correct (of 1)",
        ">= 1 guess",
        "Correct (of >= 1)",
    ]);

    table.add_row(vec![
        Cell::new(stats.total),
        Cell::new(stats.with_percentages),
        Cell::new(stats.exactly_one()),
        Cell::new(stats.exactly_one_correct()),
        Cell::new(stats.at_least_one()),
        Cell::new(stats.at_least_one_correct()),
    ]);

    eprintln!("\n{table}");
}
