//! Training record shapes for Gemini supervised-tuning JSONL

use serde::Deserialize;

/// One line of a tuning dataset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingRecord {
    #[serde(default)]
    pub system_instruction: Option<SystemInstruction>,
    #[serde(default)]
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SystemInstruction {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One conversation turn (user or model).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

impl TrainingRecord {
    /// Texts submitted for token counting, in dataset order: the system
    /// instruction first (when non-empty), then the first part of every
    /// content entry.
    ///
    /// Extra parts beyond the first are not counted; a warning is
    /// logged when that actually drops data.
    pub fn countable_texts(&self) -> Vec<String> {
        let mut texts = Vec::new();

        if let Some(instruction) = &self.system_instruction {
            if let Some(part) = instruction.parts.first() {
                if !part.text.is_empty() {
                    texts.push(part.text.clone());
                }
            }
        }

        for content in &self.contents {
            if let Some(part) = content.parts.first() {
                if content.parts.len() > 1 {
                    tracing::warn!(
                        "content entry has {} parts; only the first is counted",
                        content.parts.len()
                    );
                }
                texts.push(part.text.clone());
            }
        }

        texts
    }
}
