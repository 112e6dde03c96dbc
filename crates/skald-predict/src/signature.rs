/// Output field injected by `ChainOfThought`.
pub const REASONING_FIELD: &str = "reasoning";

/// One named input or output field of a signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub desc: String,
}

impl Field {
    pub fn new(name: impl Into<String>, desc: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
        }
    }
}

/// A task signature: what the model is given and what it must produce,
/// described in natural language.
#[derive(Debug, Clone)]
pub struct Signature {
    pub instructions: String,
    pub inputs: Vec<Field>,
    pub outputs: Vec<Field>,
}

impl Signature {
    pub fn new(instructions: impl Into<String>) -> Self {
        Self {
            instructions: instructions.into(),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn input(mut self, name: &str, desc: &str) -> Self {
        self.inputs.push(Field::new(name, desc));
        self
    }

    pub fn output(mut self, name: &str, desc: &str) -> Self {
        self.outputs.push(Field::new(name, desc));
        self
    }

    /// Prepend a `reasoning` output field so the model thinks before it
    /// answers. Idempotent.
    pub fn with_reasoning(mut self) -> Self {
        if self.outputs.iter().any(|f| f.name == REASONING_FIELD) {
            return self;
        }
        self.outputs.insert(
            0,
            Field::new(
                REASONING_FIELD,
                "step-by-step thinking that leads to the answer",
            ),
        );
        self
    }
}
