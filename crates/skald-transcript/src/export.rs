use std::path::{Path, PathBuf};

use skald_core::{History, RequestKind};

/// Block separator in exported chat transcripts.
pub const SEPARATOR: &str = "====================";

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("history is empty, nothing to export")]
    NoHistory,
    #[error("failed to write transcript to {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
}

/// Write the most recent interaction's request to `dest` for human
/// inspection. One-shot best effort: the file is truncated on open, there
/// are no retries, and an empty history leaves the filesystem untouched.
pub fn export_last(history: &History, dest: &Path) -> Result<(), ExportError> {
    let last = history.last().ok_or(ExportError::NoHistory)?;
    std::fs::write(dest, render_request(&last.request)).map_err(|cause| {
        ExportError::WriteFailed {
            path: dest.to_path_buf(),
            cause,
        }
    })
}

/// Render a request as transcript text: chat requests as role-labelled
/// blocks in conversation order, completion requests as the verbatim
/// prompt (or a placeholder when the prompt is absent).
pub fn render_request(request: &RequestKind) -> String {
    match request {
        RequestKind::Chat { messages } => {
            let mut out = String::new();
            for msg in messages {
                out.push_str(&format!(
                    "[{}]\n{}\n\n{}\n\n",
                    msg.role.to_uppercase(),
                    msg.content,
                    SEPARATOR
                ));
            }
            out
        }
        RequestKind::Completion { prompt: Some(p) } => p.clone(),
        RequestKind::Completion { prompt: None } => "No prompt found".to_string(),
    }
}
