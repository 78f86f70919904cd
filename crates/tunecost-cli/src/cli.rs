use clap::Parser;

#[derive(Parser)]
#[command(name = "tunecost")]
#[command(about = "Estimate training tokens for a Gemini JSONL tuning dataset", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the training data JSONL file (defaults to data/training.jsonl)
    pub file_path: Option<String>,

    /// The base Gemini model used for tuning
    #[arg(long)]
    pub model: Option<String>,
}
