use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use skald_core::{History, Interaction};

/// Session file path: `<root>/sessions/<session_id>.jsonl`
pub fn session_path(root: &Path, session_id: &str) -> PathBuf {
    skald_store::sessions_dir(root).join(format!("{session_id}.jsonl"))
}

/// Append one interaction as a JSONL line. Creates the sessions directory
/// on first use.
pub fn append_interaction(path: &Path, interaction: &Interaction) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open session file {}", path.display()))?;

    let line = serde_json::to_string(interaction)?;
    file.write_all(line.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// Load a stored session into a history. Unparseable lines are skipped so
/// a corrupt tail never hides the rest of the session.
pub fn load_history(path: &Path) -> anyhow::Result<History> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("cannot open session file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut entries: Vec<Interaction> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str(&line) {
            Ok(interaction) => entries.push(interaction),
            Err(_) => continue,
        }
    }
    Ok(History::from(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_core::Message;

    #[test]
    fn append_then_load_preserves_order() {
        let tmp = tempfile::tempdir().unwrap();
        let path = session_path(tmp.path(), "ses_test");

        for i in 0..3 {
            append_interaction(
                &path,
                &Interaction::chat(
                    "m",
                    vec![Message::user(format!("q{i}"))],
                    format!("a{i}"),
                    None,
                ),
            )
            .unwrap();
        }

        let history = load_history(&path).unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.last().unwrap().response.as_deref(), Some("a2"));
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let path = session_path(tmp.path(), "ses_test");

        append_interaction(
            &path,
            &Interaction::completion("m", "p".into(), "r".into(), None),
        )
        .unwrap();
        let mut f = std::fs::OpenOptions::new().append(true).open(&path).unwrap();
        writeln!(f, "{{not json").unwrap();

        let history = load_history(&path).unwrap();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn missing_session_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_history(&tmp.path().join("ses_nope.jsonl")).unwrap_err();
        assert!(err.to_string().contains("ses_nope"));
    }
}
