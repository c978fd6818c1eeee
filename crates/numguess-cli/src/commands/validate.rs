//! The `numguess validate` command.

use std::path::PathBuf;

use anyhow::Result;

use numguess_core::dataset::{load_dataset, validate_dataset};

pub fn execute(dataset_path: PathBuf) -> Result<()> {
    let problems = load_dataset(&dataset_path)?;
    println!(
        "Dataset: {} ({} problems)",
        dataset_path.display(),
        problems.len()
    );

    let warnings = validate_dataset(&problems);
    for w in &warnings {
        println!("  [{}] WARNING: {}", w.index, w.message);
    }

    if warnings.is_empty() {
        println!("Dataset valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
