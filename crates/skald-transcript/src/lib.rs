mod export;
mod inspect;
mod store;

pub use export::{export_last, render_request, ExportError, SEPARATOR};
pub use inspect::format_recent;
pub use store::{append_interaction, load_history, session_path};
