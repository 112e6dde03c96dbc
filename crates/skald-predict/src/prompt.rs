use anyhow::{bail, Result};
use skald_core::Message;

use crate::signature::Signature;

/// Render the system message: instructions, the field inventory, and the
/// required response layout.
pub fn system_message(sig: &Signature) -> Message {
    let mut text = String::new();
    text.push_str(sig.instructions.trim());

    if !sig.inputs.is_empty() {
        text.push_str("\n\nYou will be given:\n");
        for f in &sig.inputs {
            text.push_str(&format!("- {}: {}\n", f.name, f.desc));
        }
    }

    text.push_str("\nReply with one section per field below, in this order, each starting with the field name and a colon:\n");
    for f in &sig.outputs {
        text.push_str(&format!("- {}: {}\n", f.name, f.desc));
    }

    Message::system(text)
}

/// Render the user message from `name, value` input pairs. Every input
/// field of the signature must be supplied.
pub fn user_message(sig: &Signature, inputs: &[(&str, &str)]) -> Result<Message> {
    let mut lines = Vec::with_capacity(sig.inputs.len());
    for field in &sig.inputs {
        match inputs.iter().find(|(name, _)| *name == field.name) {
            Some((_, value)) => lines.push(format!("{}: {}", field.name, value)),
            None => bail!("missing input field `{}`", field.name),
        }
    }
    Ok(Message::user(lines.join("\n\n")))
}
