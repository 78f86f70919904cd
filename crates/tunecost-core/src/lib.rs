//! Core domain models and logic for tunecost
//!
//! This crate contains:
//! - Training record shapes (`systemInstruction` / `contents` / `parts`)
//! - Extraction of the texts submitted for token counting
//! - The estimate report and the shared error taxonomy

pub mod error;
pub mod record;
pub mod report;

pub use error::{Error, Result};
pub use record::{Content, Part, SystemInstruction, TrainingRecord};
pub use report::{EPOCHS, EstimateReport, group_thousands};
