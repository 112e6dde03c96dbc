use anyhow::{anyhow, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use skald_core::{History, Interaction, Message};

use crate::config::ClientConfig;
use crate::wire::{
    chat_text, completion_text, ChatRequest, ChatResponse, CompletionRequest, CompletionResponse,
};

const CHAT_PATH: &str = "/chat/completions";
const COMPLETIONS_PATH: &str = "/completions";

/// Client for an OpenAI-compatible endpoint. Every successful round is
/// recorded into an append-only history.
pub struct LmClient {
    http: reqwest::Client,
    config: ClientConfig,
    history: History,
}

fn build_endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

fn build_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", api_key))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

impl LmClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .pool_max_idle_per_host(8)
            .build()?;
        Ok(Self {
            http,
            config,
            history: History::new(),
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Send a chat-completion request and return the assistant text.
    pub async fn chat(&mut self, messages: Vec<Message>) -> Result<String> {
        let endpoint = build_endpoint(&self.config.base_url, CHAT_PATH);
        tracing::debug!(model = %self.config.model, turns = messages.len(), "chat request");

        let req = ChatRequest {
            model: &self.config.model,
            messages: &messages,
            stream: false,
        };
        let body: ChatResponse = self.post(&endpoint, &req).await?;
        let (text, usage) = chat_text(body)?;

        self.history
            .record(Interaction::chat(&self.config.model, messages, text.clone(), usage));
        Ok(text)
    }

    /// Send a legacy text-completion request and return the completion text.
    pub async fn complete(&mut self, prompt: &str) -> Result<String> {
        let endpoint = build_endpoint(&self.config.base_url, COMPLETIONS_PATH);
        tracing::debug!(model = %self.config.model, "completion request");

        let req = CompletionRequest {
            model: &self.config.model,
            prompt,
            max_tokens: self.config.max_tokens,
        };
        let body: CompletionResponse = self.post(&endpoint, &req).await?;
        let (text, usage) = completion_text(body)?;

        self.history.record(Interaction::completion(
            &self.config.model,
            prompt.to_string(),
            text.clone(),
            usage,
        ));
        Ok(text)
    }

    async fn post<Req, Resp>(&self, endpoint: &str, req: &Req) -> Result<Resp>
    where
        Req: serde::Serialize,
        Resp: serde::de::DeserializeOwned,
    {
        let headers = build_headers(&self.config.api_key)?;
        let resp = self
            .http
            .post(endpoint)
            .headers(headers)
            .json(req)
            .send()
            .await
            .map_err(|e| anyhow!("network error: {}", e))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(anyhow!("provider error {}: {}", status, text));
        }

        Ok(resp.json().await?)
    }
}
