use std::path::{Path, PathBuf};

use skald_transcript::{format_recent, load_history, session_path};

/// `skald history` — render recent interactions from a recorded session.
pub fn execute(
    root: &Path,
    session: Option<&str>,
    limit: usize,
    json: bool,
) -> anyhow::Result<()> {
    let path = resolve_session(root, session)?;
    let history = load_history(&path)?;

    if history.is_empty() {
        println!("(no interactions)");
        return Ok(());
    }

    if json {
        let entries = history.entries();
        let start = entries.len().saturating_sub(limit);
        for interaction in &entries[start..] {
            println!("{}", serde_json::to_string(interaction)?);
        }
    } else {
        print!("{}", format_recent(&history, limit));
    }
    Ok(())
}

/// Resolve `--session` to a session file, defaulting to the most recent.
pub fn resolve_session(root: &Path, session: Option<&str>) -> anyhow::Result<PathBuf> {
    match session {
        Some(id) => Ok(session_path(root, id)),
        None => skald_store::latest_session(root).ok_or_else(|| {
            anyhow::anyhow!(
                "no recorded sessions under {}. Run `skald ask` first.",
                skald_store::sessions_dir(root).display()
            )
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_session_resolves_without_store() {
        let tmp = tempfile::tempdir().unwrap();
        let path = resolve_session(tmp.path(), Some("ses_abc")).unwrap();
        assert!(path.ends_with("sessions/ses_abc.jsonl"));
    }

    #[test]
    fn missing_store_with_no_session_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = resolve_session(tmp.path(), None).unwrap_err();
        assert!(err.to_string().contains("no recorded sessions"));
    }
}
