use anyhow::Result;
use skald_client::LmClient;

use crate::parse::parse_fields;
use crate::prompt::{system_message, user_message};
use crate::signature::{Signature, REASONING_FIELD};

/// Parsed output fields of one module call, in signature order, plus the
/// raw model response.
#[derive(Debug)]
pub struct Prediction {
    fields: Vec<(String, String)>,
    raw: String,
}

impl Prediction {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The chain-of-thought text, when the model produced one.
    pub fn reasoning(&self) -> Option<&str> {
        self.get(REASONING_FIELD)
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Formats a signature into chat messages, calls the model, and parses the
/// response back into output fields.
pub struct Predict {
    signature: Signature,
}

impl Predict {
    pub fn new(signature: Signature) -> Self {
        Self { signature }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub async fn call(&self, lm: &mut LmClient, inputs: &[(&str, &str)]) -> Result<Prediction> {
        let messages = vec![
            system_message(&self.signature),
            user_message(&self.signature, inputs)?,
        ];
        let raw = lm.chat(messages).await?;
        tracing::debug!(chars = raw.len(), "model response received");

        let fields = parse_fields(&self.signature.outputs, &raw);
        Ok(Prediction { fields, raw })
    }
}

/// `Predict` with a `reasoning` output field prepended to the signature,
/// so the model reasons before answering.
pub struct ChainOfThought {
    inner: Predict,
}

impl ChainOfThought {
    pub fn new(signature: Signature) -> Self {
        Self {
            inner: Predict::new(signature.with_reasoning()),
        }
    }

    pub fn signature(&self) -> &Signature {
        self.inner.signature()
    }

    pub async fn call(&self, lm: &mut LmClient, inputs: &[(&str, &str)]) -> Result<Prediction> {
        self.inner.call(lm, inputs).await
    }
}
