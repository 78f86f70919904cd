//! Estimation pipeline: dataset scan -> token counting -> totals
//!
//! Sequential by design: each record's counting call completes before
//! the next line is considered, and any counting failure aborts the
//! whole run. Only JSON decode failures are survivable.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tunecost_core::EstimateReport;
use tunecost_dataset::{DatasetLine, scan};
use tunecost_vertex::TokenCounter;

pub struct Estimator {
    counter: Arc<dyn TokenCounter>,
    model: String,
}

impl Estimator {
    pub fn new(counter: Arc<dyn TokenCounter>, model: impl Into<String>) -> Self {
        Self {
            counter,
            model: model.into(),
        }
    }

    /// Scan the dataset and accumulate provider token counts.
    pub async fn run(&self, dataset: &Path) -> Result<EstimateReport> {
        let lines = scan(dataset).await?;

        let mut total_tokens: u64 = 0;
        let mut total_examples: u64 = 0;

        for line in lines {
            let record = match line {
                DatasetLine::Record(record) => record,
                DatasetLine::Invalid(e) => {
                    // Numbered by position among decoded examples, not
                    // by file line.
                    tracing::warn!(
                        "skipping line {}: invalid JSON format ({e}); run a schema validator",
                        total_examples + 1
                    );
                    continue;
                }
            };

            let texts = record.countable_texts();
            let tokens = self
                .counter
                .count_tokens(&self.model, &texts)
                .await
                .with_context(|| format!("countTokens failed on example {}", total_examples + 1))?;

            total_tokens += tokens;
            total_examples += 1;
        }

        Ok(EstimateReport {
            dataset: dataset.to_path_buf(),
            model: self.model.clone(),
            total_examples,
            total_tokens,
        })
    }
}
