//! Line-delimited JSON dataset loading and validation.
//!
//! Each line of the dataset decodes to one [`Problem`]; blank lines are
//! skipped. Decoding failures carry the 1-based line number. Validation is
//! a separate, non-fatal lint pass producing warnings only.

use std::path::Path;

use crate::error::DatasetError;
use crate::extract::extract_from_text;
use crate::model::{Letter, Problem};

/// Load a dataset from a `.json`/`.jsonl` file, one problem per line.
pub fn load_dataset(path: &Path) -> Result<Vec<Problem>, DatasetError> {
    let content = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let problems = parse_dataset_str(&content)?;
    tracing::debug!(count = problems.len(), path = %path.display(), "loaded dataset");
    Ok(problems)
}

/// Parse dataset content from a string (useful for testing).
pub fn parse_dataset_str(content: &str) -> Result<Vec<Problem>, DatasetError> {
    let mut problems = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let problem: Problem = serde_json::from_str(line)
            .map_err(|source| DatasetError::Record { line: i + 1, source })?;
        if problem.options.len() != 5 {
            return Err(DatasetError::OptionCount {
                line: i + 1,
                found: problem.options.len(),
            });
        }
        problems.push(problem);
    }
    Ok(problems)
}

/// A non-fatal finding from dataset validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// Zero-based index of the problem in the dataset.
    pub index: usize,
    /// Warning message.
    pub message: String,
}

/// Lint a dataset for records the heuristic cannot do anything with.
pub fn validate_dataset(problems: &[Problem]) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    for (index, problem) in problems.iter().enumerate() {
        if problem.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "question is empty".into(),
            });
        }

        for (letter, option) in Letter::ALL.iter().zip(&problem.options) {
            let expected = letter.to_string();
            if !option.starts_with(&expected) {
                warnings.push(ValidationWarning {
                    index,
                    message: format!("option {letter} does not start with its label: {option:?}"),
                });
            }
        }

        let extracted = extract_from_text(&problem.question);
        if extracted.plain.is_empty() && extracted.percent.is_empty() {
            warnings.push(ValidationWarning {
                index,
                message: "question contains no extractable numbers".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_LINE: &str = r#"{"question":"What is 10 % of 50 ?","options":["A ) 5","B ) 10","C ) 15","D ) 20","E ) 25"],"correct":"A","rationale":"10 % of 50 is 5 ."}"#;

    #[test]
    fn parse_single_line() {
        let problems = parse_dataset_str(VALID_LINE).unwrap();
        assert_eq!(problems.len(), 1);
        assert_eq!(problems[0].correct, Letter::A);
        assert_eq!(problems[0].options.len(), 5);
    }

    #[test]
    fn blank_lines_skipped() {
        let content = format!("\n{VALID_LINE}\n\n{VALID_LINE}\n");
        let problems = parse_dataset_str(&content).unwrap();
        assert_eq!(problems.len(), 2);
    }

    #[test]
    fn malformed_line_reports_line_number() {
        let content = format!("{VALID_LINE}\nnot json at all");
        let err = parse_dataset_str(&content).unwrap_err();
        assert_eq!(err.line(), Some(2));
        assert!(matches!(err, DatasetError::Record { .. }));
    }

    #[test]
    fn wrong_option_count_rejected() {
        let content = r#"{"question":"q 1","options":["A ) 1","B ) 2"],"correct":"A"}"#;
        let err = parse_dataset_str(content).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::OptionCount { line: 1, found: 2 }
        ));
    }

    #[test]
    fn unknown_correct_letter_rejected() {
        let content = r#"{"question":"q 1","options":["A ) 1","B ) 2","C ) 3","D ) 4","E ) 5"],"correct":"F"}"#;
        let err = parse_dataset_str(content).unwrap_err();
        assert!(matches!(err, DatasetError::Record { line: 1, .. }));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("train.tok.json");
        std::fs::write(&path, VALID_LINE).unwrap();

        let problems = load_dataset(&path).unwrap();
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_dataset(Path::new("no-such-file.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn validation_flags_label_and_numberless_questions() {
        let content = r#"{"question":"no numbers here","options":["A ) 1","X ) 2","C ) 3","D ) 4","E ) 5"],"correct":"A"}"#;
        let problems = parse_dataset_str(content).unwrap();
        let warnings = validate_dataset(&problems);
        assert!(warnings.iter().any(|w| w.message.contains("label")));
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("no extractable numbers")));
    }

    #[test]
    fn clean_dataset_has_no_warnings() {
        let problems = parse_dataset_str(VALID_LINE).unwrap();
        assert!(validate_dataset(&problems).is_empty());
    }
}
