//! numguess-core — Numeric extraction, option parsing, and candidate matching.
//!
//! This crate implements the heuristic answer-guessing pipeline for
//! multiple-choice arithmetic word problems: numbers are pulled out of the
//! question text, recombined with a small set of arithmetic operators, and
//! checked against the parsed answer options.

pub mod candidates;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod pipeline;
pub mod report;
pub mod statistics;
pub mod tokenize;

pub use error::DatasetError;
pub use model::{Letter, Problem};
