mod module;
mod parse;
mod prompt;
mod signature;

pub use module::{ChainOfThought, Predict, Prediction};
pub use signature::{Field, Signature, REASONING_FIELD};
