use serde::{Deserialize, Serialize};
use skald_core::{Message, Usage};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
    pub stream: bool,
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct WireUsage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

impl From<WireUsage> for Usage {
    fn from(u: WireUsage) -> Self {
        Usage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<ChatChoice>,
    pub usage: Option<WireUsage>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    pub choices: Vec<CompletionChoice>,
    pub usage: Option<WireUsage>,
}

/// Pull the assistant text and usage out of a chat response body.
pub fn chat_text(body: ChatResponse) -> anyhow::Result<(String, Option<Usage>)> {
    let usage = body.usage.map(Usage::from);
    let content = body
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.and_then(|m| m.content))
        .ok_or_else(|| anyhow::anyhow!("response has no content"))?;
    Ok((content, usage))
}

/// Pull the completion text and usage out of a completion response body.
pub fn completion_text(body: CompletionResponse) -> anyhow::Result<(String, Option<Usage>)> {
    let usage = body.usage.map(Usage::from);
    let text = body
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.text)
        .ok_or_else(|| anyhow::anyhow!("response has no text"))?;
    Ok((text, usage))
}
