//! Analysis report with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::ProblemAnalysis;
use crate::pipeline::AnalysisRun;
use crate::statistics::AggregateStats;

/// A complete analysis report over one dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the analyzed dataset.
    pub dataset: DatasetSummary,
    /// Per-problem derived records, in dataset order.
    pub analyses: Vec<ProblemAnalysis>,
    /// Aggregate statistics.
    pub stats: AggregateStats,
}

/// Where the problems came from and how many there were.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub path: String,
    pub problem_count: usize,
}

impl AnalysisReport {
    /// Wrap a finished run in a timestamped report.
    pub fn new(dataset_path: &str, run: AnalysisRun) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            dataset: DatasetSummary {
                path: dataset_path.to_string(),
                problem_count: run.analyses.len(),
            },
            analyses: run.analyses,
            stats: run.stats,
        }
    }

    /// Save the report as pretty JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: AnalysisReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
