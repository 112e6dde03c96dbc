use crate::types::Interaction;

/// Ordered, append-only log of interactions accumulated by a client.
///
/// Entries are only ever pushed; readers get shared slices and never
/// mutate past rounds.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<Interaction>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, interaction: Interaction) {
        self.entries.push(interaction);
    }

    pub fn last(&self) -> Option<&Interaction> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[Interaction] {
        &self.entries
    }
}

impl From<Vec<Interaction>> for History {
    fn from(entries: Vec<Interaction>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Message;

    #[test]
    fn record_appends_in_order() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record(Interaction::chat(
            "m",
            vec![Message::user("first")],
            "a".into(),
            None,
        ));
        history.record(Interaction::chat(
            "m",
            vec![Message::user("second")],
            "b".into(),
            None,
        ));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().response.as_deref(), Some("b"));
        match &history.entries()[0].request {
            crate::types::RequestKind::Chat { messages } => {
                assert_eq!(messages[0].content, "first")
            }
            _ => panic!("expected chat request"),
        }
    }
}
