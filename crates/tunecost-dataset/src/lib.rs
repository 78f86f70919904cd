//! JSONL dataset scanning
//!
//! Splits a tuning dataset into per-line outcomes so the caller decides
//! what a decode failure means. Blank lines never surface.

pub mod jsonl;

pub use jsonl::{DatasetLine, scan};
