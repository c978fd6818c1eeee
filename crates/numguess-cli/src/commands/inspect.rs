//! The `numguess inspect` command.

use std::path::PathBuf;

use anyhow::Result;

use numguess_core::dataset::load_dataset;
use numguess_core::pipeline::analyze_problem;
use numguess_report::text::render_problem;

pub fn execute(dataset_path: PathBuf, index: usize) -> Result<()> {
    let problems = load_dataset(&dataset_path)?;

    let problem = problems.get(index).ok_or_else(|| {
        anyhow::anyhow!(
            "problem index {index} out of range (dataset has {} problems)",
            problems.len()
        )
    })?;

    let analysis = analyze_problem(problem);
    println!("{}", render_problem(problem, &analysis));

    Ok(())
}
