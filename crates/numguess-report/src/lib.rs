//! numguess-report — Human-readable rendering of analysis reports.
//!
//! Core exposes the statistics and per-problem records as plain data; this
//! crate owns all formatting.

pub mod markdown;
pub mod text;
