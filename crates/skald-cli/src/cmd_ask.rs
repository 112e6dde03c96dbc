use std::path::Path;

use anyhow::Context;
use skald_client::{ClientConfig, LmClient, DEFAULT_BASE_URL, DEFAULT_MODEL};
use skald_predict::{ChainOfThought, Predict, Prediction, Signature};
use skald_transcript::{append_interaction, export_last, format_recent, session_path};

use crate::settings::Settings;

pub struct AskParams<'a> {
    pub question: &'a str,
    pub model: Option<&'a str>,
    pub base_url: Option<&'a str>,
    pub no_reasoning: bool,
    pub show_prompt: bool,
    pub debug_file: Option<&'a Path>,
    pub json: bool,
}

/// The fixed question-answering task.
fn qa_signature() -> Signature {
    Signature::new("Answer the question with a short factoid answer.")
        .input("question", "the question to answer")
        .output("answer", "a short answer, often between 1 and 5 words")
}

/// `skald ask <question>` — run the QA task, print reasoning and answer,
/// record the session, optionally export the request transcript.
pub fn execute(root: &Path, params: AskParams) -> anyhow::Result<()> {
    let settings = Settings::load(root);

    let key_env = settings.api_key_env();
    let api_key = std::env::var(key_env)
        .with_context(|| format!("no API key found: set the {key_env} environment variable"))?;

    let model = params
        .model
        .or(settings.model.as_deref())
        .unwrap_or(DEFAULT_MODEL);
    let base_url = params
        .base_url
        .or(settings.base_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);

    let config = ClientConfig::new(api_key)
        .with_model(model)
        .with_base_url(base_url);
    let mut client = LmClient::new(config)?;

    let inputs = [("question", params.question)];
    let rt = tokio::runtime::Runtime::new()?;
    let prediction = if params.no_reasoning {
        rt.block_on(Predict::new(qa_signature()).call(&mut client, &inputs))?
    } else {
        rt.block_on(ChainOfThought::new(qa_signature()).call(&mut client, &inputs))?
    };

    if params.json {
        println!("{}", serde_json::to_string_pretty(&to_json(params.question, model, &prediction))?);
    } else {
        if let Some(reasoning) = prediction.reasoning() {
            println!("Reasoning: {reasoning}");
        }
        println!("Answer: {}", prediction.get("answer").unwrap_or_else(|| prediction.raw()));
    }

    record_session(root, &client)?;

    if params.show_prompt {
        print!("{}", format_recent(client.history(), 1));
    }

    // Best-effort debug aid: a failed export must not fail the command.
    if let Some(dest) = params.debug_file {
        match export_last(client.history(), dest) {
            Ok(()) => println!("Prompt transcript saved to {}", dest.display()),
            Err(err) => eprintln!("warning: {:#}", anyhow::Error::new(err)),
        }
    }

    Ok(())
}

fn to_json(question: &str, model: &str, prediction: &Prediction) -> serde_json::Value {
    let mut fields = serde_json::Map::new();
    for (name, value) in prediction.fields() {
        fields.insert(name.clone(), serde_json::Value::String(value.clone()));
    }
    serde_json::json!({
        "question": question,
        "model": model,
        "fields": fields,
    })
}

fn record_session(root: &Path, client: &LmClient) -> anyhow::Result<()> {
    let session_id = skald_core::ids::new_session_id();
    let path = session_path(root, &session_id);
    for interaction in client.history().entries() {
        append_interaction(&path, interaction)?;
    }
    tracing::debug!(session = %session_id, "session recorded");
    Ok(())
}
