//! LLM-assisted extraction strategy.
//!
//! Sends the recognized text to an OpenAI-compatible chat-completions
//! endpoint and parses a JSON object out of the reply. Transport and parse
//! failures surface as [`ExtractionError::Llm`]; a reply that simply lacks a
//! field yields an absent field, same as the rule-based path.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::{ExtractionStrategy, Result};
use crate::error::ExtractionError;
use crate::models::check::CheckFields;
use crate::models::config::ExtractionConfig;

const SYSTEM_PROMPT: &str = "You extract fields from scanned bank checks. \
Given OCR text of a check, reply with a JSON object with exactly two keys: \
\"payee\" (the name in the pay-to-the-order-of field) and \"check_number\" \
(the 3-6 digit check number). Use null for a field you cannot determine. \
Reply with the JSON object only.";

/// LLM-backed extraction strategy.
pub struct LlmStrategy {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
    api_url: String,
}

impl LlmStrategy {
    /// Build a strategy from extraction configuration.
    ///
    /// Fails when no credential is configured; callers decide whether to fall
    /// back to [`super::RegexStrategy`] before construction, never after.
    pub fn from_config(config: &ExtractionConfig) -> std::result::Result<Self, ExtractionError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| ExtractionError::Llm("no API credential configured".to_string()))?;

        Ok(Self {
            client: reqwest::blocking::Client::new(),
            api_key,
            model: config.model.clone(),
            api_url: config.api_url.clone(),
        })
    }

    fn request_fields(&self, text: &str) -> std::result::Result<CheckFields, ExtractionError> {
        let body = json!({
            "model": self.model,
            "temperature": 0,
            "response_format": {"type": "json_object"},
            "messages": [
                {"role": "system", "content": SYSTEM_PROMPT},
                {"role": "user", "content": format!("Extract the payee and check number from this text:\n\n{text}")},
            ],
        });

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ExtractionError::Llm(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Llm(format!("API returned {status}")));
        }

        let reply: ChatResponse = response
            .json()
            .map_err(|e| ExtractionError::Llm(e.to_string()))?;

        let content = reply
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ExtractionError::Llm("response contained no choices".to_string()))?;

        parse_reply(content)
    }
}

impl ExtractionStrategy for LlmStrategy {
    fn extract(&self, text: &str) -> Result<CheckFields> {
        let fields = self.request_fields(text)?;
        debug!(
            "LLM extraction: payee={:?}, check_number={:?}",
            fields.payee, fields.check_number
        );
        Ok(fields)
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Deserialize)]
struct ReplyFields {
    payee: Option<String>,
    check_number: Option<ReplyNumber>,
}

/// Models sometimes return the number as a JSON integer despite instructions.
#[derive(Deserialize)]
#[serde(untagged)]
enum ReplyNumber {
    Text(String),
    Digits(u64),
}

/// Parse the model's reply content into fields, tolerating code fences and
/// whitespace-only values.
fn parse_reply(content: &str) -> std::result::Result<CheckFields, ExtractionError> {
    let stripped = strip_code_fence(content);

    let reply: ReplyFields = serde_json::from_str(stripped)
        .map_err(|e| ExtractionError::Llm(format!("unparseable reply: {e}")))?;

    let payee = reply
        .payee
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty());

    let check_number = reply.check_number.map(|n| match n {
        ReplyNumber::Text(s) => s.trim().to_string(),
        ReplyNumber::Digits(d) => d.to_string(),
    });
    let check_number = check_number.filter(|n| !n.is_empty());

    Ok(CheckFields {
        payee,
        check_number,
    })
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
