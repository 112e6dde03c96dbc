use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Environment variable overriding the store root (useful for tests and
/// sandboxed runs).
pub const ROOT_ENV: &str = "SKALD_HOME";

/// Return the per-user store root: `<data_dir>/skald/`
/// Falls back to `~/.skald/`, then `./.skald-store`.
pub fn store_root() -> PathBuf {
    if let Ok(root) = std::env::var(ROOT_ENV) {
        return PathBuf::from(root);
    }
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("skald")
    } else if let Some(home) = dirs::home_dir() {
        home.join(".skald")
    } else {
        PathBuf::from(".skald-store")
    }
}

/// Session JSONL files live under `store_root/sessions/`.
pub fn sessions_dir(root: &Path) -> PathBuf {
    root.join("sessions")
}

/// JSON config file at `store_root/config.json`.
pub fn config_path(root: &Path) -> PathBuf {
    root.join("config.json")
}

/// Create the store directories. Idempotent.
pub fn ensure_layout(root: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(sessions_dir(root))?;
    Ok(())
}

/// Atomic write: write to temp file in same dir, then rename.
pub fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| anyhow::anyhow!("no parent dir for {}", path.display()))?;
    fs::create_dir_all(parent)?;
    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.persist(path)?;
    Ok(())
}

/// Most recently modified session file under `sessions/`, if any.
pub fn latest_session(root: &Path) -> Option<PathBuf> {
    let dir = sessions_dir(root);
    let entries = fs::read_dir(dir).ok()?;

    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("jsonl") {
            continue;
        }
        let mtime = match entry.metadata().and_then(|m| m.modified()) {
            Ok(t) => t,
            Err(_) => continue,
        };
        if newest.as_ref().map(|(t, _)| mtime > *t).unwrap_or(true) {
            newest = Some((mtime, path));
        }
    }
    newest.map(|(_, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_root_is_not_empty() {
        let root = store_root();
        assert!(!root.as_os_str().is_empty());
    }

    #[test]
    fn ensure_layout_creates_sessions_dir() {
        let tmp = tempfile::tempdir().unwrap();
        ensure_layout(tmp.path()).unwrap();
        assert!(sessions_dir(tmp.path()).is_dir());
    }

    #[test]
    fn write_atomic_creates_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("test.txt");
        write_atomic(&path, b"hello world").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
    }

    #[test]
    fn latest_session_picks_most_recent() {
        let tmp = tempfile::tempdir().unwrap();
        ensure_layout(tmp.path()).unwrap();
        let dir = sessions_dir(tmp.path());

        let older = dir.join("ses_a.jsonl");
        fs::write(&older, "{}\n").unwrap();
        let newer = dir.join("ses_b.jsonl");
        fs::write(&newer, "{}\n").unwrap();
        // Push the second file's mtime clearly past the first.
        let later = std::time::SystemTime::now() + std::time::Duration::from_secs(10);
        let f = fs::File::options().append(true).open(&newer).unwrap();
        f.set_modified(later).unwrap();

        assert_eq!(latest_session(tmp.path()), Some(newer));
    }

    #[test]
    fn latest_session_empty_dir_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        ensure_layout(tmp.path()).unwrap();
        assert!(latest_session(tmp.path()).is_none());
    }
}
