//! Turns a raw chat-completion reply into a verdict and, for positive
//! headlines, the rewrite to display.

use serde_json::Value;
use thiserror::Error;

/// Shown when the model says POSITIVE but writes nothing after it.
pub const REWRITE_PLACEHOLDER: &str = "Uplifting summary not provided.";

const POSITIVE: &str = "POSITIVE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationResult {
    pub verdict: Verdict,
    /// Present iff `verdict` is `Positive`.
    pub rewrite: Option<String>,
}

impl ClassificationResult {
    pub fn positive(rewrite: impl Into<String>) -> Self {
        Self {
            verdict: Verdict::Positive,
            rewrite: Some(rewrite.into()),
        }
    }

    pub fn negative() -> Self {
        Self {
            verdict: Verdict::Negative,
            rewrite: None,
        }
    }

    pub fn is_positive(&self) -> bool {
        self.verdict == Verdict::Positive
    }
}

/// The reply did not have the `choices[0].message.content` shape.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("reply has no choices[0].message.content")]
pub struct UnparsedReply {
    pub raw: Value,
}

/// Reads the first completion's message content, trimmed.
pub fn extract_content(raw: &Value) -> Result<String, UnparsedReply> {
    raw.get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .map(|content| content.trim().to_string())
        .ok_or_else(|| UnparsedReply { raw: raw.clone() })
}

/// The text to interpret: the model's content, or the raw payload when the
/// reply has an unexpected shape. A bare JSON string is used as-is, anything
/// else is rendered as compact JSON.
pub fn reply_text(raw: &Value) -> String {
    match extract_content(raw) {
        Ok(content) => content,
        Err(UnparsedReply { raw }) => {
            tracing::debug!("Falling back to raw reply text");
            raw.as_str()
                .map(str::to_string)
                .unwrap_or_else(|| raw.to_string())
        }
    }
}

pub fn interpret_text(text: &str) -> ClassificationResult {
    if !text.to_uppercase().starts_with(POSITIVE) {
        return ClassificationResult::negative();
    }

    // A lone '\r' also ends a line.
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let rewrite = normalized.lines().skip(1).collect::<Vec<_>>().join("\n");
    let rewrite = rewrite.trim();
    if rewrite.is_empty() {
        ClassificationResult::positive(REWRITE_PLACEHOLDER)
    } else {
        ClassificationResult::positive(rewrite)
    }
}

pub fn interpret(raw: &Value) -> ClassificationResult {
    interpret_text(&reply_text(raw))
}
