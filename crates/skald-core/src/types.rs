use serde::{Deserialize, Serialize};

/// Well-known chat roles. Roles are plain strings on the wire; these are
/// the ones skald itself produces.
pub mod role {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// One chat turn. Order within a request is conversation order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(role::SYSTEM, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(role::USER, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(role::ASSISTANT, content)
    }
}

/// What was sent to the endpoint: a multi-turn chat request or a single
/// completion prompt (which legacy endpoints may omit entirely).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RequestKind {
    Chat {
        messages: Vec<Message>,
    },
    Completion {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        prompt: Option<String>,
    },
}

/// Token accounting as reported by the endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Usage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_tokens: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u32>,
}

/// One captured round of communication with the model (one JSONL line in a
/// session file).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    pub ts: String,
    pub model: String,
    #[serde(flatten)]
    pub request: RequestKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl Interaction {
    /// A completed chat round.
    pub fn chat(model: &str, messages: Vec<Message>, response: String, usage: Option<Usage>) -> Self {
        Self {
            ts: crate::ids::timestamp_now(),
            model: model.to_string(),
            request: RequestKind::Chat { messages },
            response: Some(response),
            usage,
        }
    }

    /// A completed text-completion round.
    pub fn completion(model: &str, prompt: String, response: String, usage: Option<Usage>) -> Self {
        Self {
            ts: crate::ids::timestamp_now(),
            model: model.to_string(),
            request: RequestKind::Completion {
                prompt: Some(prompt),
            },
            response: Some(response),
            usage,
        }
    }
}
