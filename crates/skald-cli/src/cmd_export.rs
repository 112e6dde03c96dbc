use std::path::Path;

use anyhow::Context;
use skald_transcript::{export_last, load_history};

use crate::cmd_history::resolve_session;

/// `skald export <dest>` — write the most recent interaction of a recorded
/// session to a text file.
pub fn execute(root: &Path, dest: &Path, session: Option<&str>) -> anyhow::Result<()> {
    let path = resolve_session(root, session)?;
    let history = load_history(&path)?;

    export_last(&history, dest)
        .with_context(|| format!("cannot export session {}", path.display()))?;

    println!("Transcript saved to {}", dest.display());
    Ok(())
}
