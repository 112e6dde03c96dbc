pub mod history;
pub mod ids;
pub mod types;

pub use history::History;
pub use types::*;
