use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tunecost_config::{Config, GcpContext};
use tunecost_core::{EPOCHS, EstimateReport, group_thousands};
use tunecost_engine::Estimator;
use tunecost_vertex::VertexClient;

use crate::cli::Cli;

pub async fn handle(cli: Cli, config: &Config) -> Result<()> {
    let dataset = resolve_dataset(cli.file_path.as_deref(), &config.default_dataset);
    let dataset = Path::new(&dataset);
    let model = cli.model.unwrap_or_else(|| config.default_model.clone());

    // Fatal-path ordering: file, then environment, then client. No
    // counting call is issued unless all three hold.
    if !dataset.exists() {
        anyhow::bail!("Dataset file not found at path: {}", dataset.display());
    }

    let context = GcpContext::from_env()?;

    let client = VertexClient::from_env(
        &context.project,
        &context.location,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    tracing::info!("counting tokens for model {model} in {}", context.location);

    let estimator = Estimator::new(Arc::new(client), model);
    let report = estimator.run(dataset).await?;

    print_report(&report);
    Ok(())
}

/// An empty or whitespace-only positional falls back to the configured
/// default (workflow dispatch passes the argument through verbatim).
fn resolve_dataset(arg: Option<&str>, default: &str) -> String {
    match arg {
        Some(path) if !path.trim().is_empty() => path.to_string(),
        _ => default.to_string(),
    }
}

fn print_report(report: &EstimateReport) {
    println!();
    println!("==========================================");
    println!("  Training token estimate");
    println!("==========================================");
    println!("File: {}", report.dataset.display());
    println!("Model: {}", report.model);
    println!("Total Examples: {}", report.total_examples);
    println!(
        "Total Training Tokens: {}",
        group_thousands(report.total_tokens)
    );
    println!(
        "Estimated Tokens ({EPOCHS} Epochs): {}",
        group_thousands(report.projected_tokens())
    );
    println!("==========================================");
}
