use skald_core::{History, RequestKind};

use crate::export::SEPARATOR;

/// Render the last `n` interactions for terminal inspection: a header line
/// per interaction, role-labelled blocks for the request, the response as
/// an assistant block, one separator between interactions.
pub fn format_recent(history: &History, n: usize) -> String {
    let entries = history.entries();
    let start = entries.len().saturating_sub(n);

    let mut out = String::new();
    for interaction in &entries[start..] {
        out.push_str(&format!("{}  {}\n\n", interaction.ts, interaction.model));

        match &interaction.request {
            RequestKind::Chat { messages } => {
                for msg in messages {
                    push_block(&mut out, &msg.role, &msg.content);
                }
            }
            RequestKind::Completion { prompt } => {
                push_block(&mut out, "prompt", prompt.as_deref().unwrap_or("No prompt found"));
            }
        }

        if let Some(response) = &interaction.response {
            push_block(&mut out, "assistant", response);
        }

        out.push_str(SEPARATOR);
        out.push_str("\n\n");
    }
    out
}

fn push_block(out: &mut String, role: &str, content: &str) {
    out.push_str(&format!("[{}]\n{}\n\n", role.to_uppercase(), content));
}

#[cfg(test)]
mod tests {
    use super::*;
    use skald_core::{Interaction, Message};

    fn history_of(n: usize) -> History {
        History::from(
            (0..n)
                .map(|i| {
                    Interaction::chat(
                        "m",
                        vec![Message::user(format!("question {i}"))],
                        format!("answer {i}"),
                        None,
                    )
                })
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn shows_only_last_n_interactions() {
        let rendered = format_recent(&history_of(5), 2);
        assert!(!rendered.contains("question 2"));
        assert!(rendered.contains("question 3"));
        assert!(rendered.contains("question 4"));
        assert_eq!(rendered.matches(SEPARATOR).count(), 2);
    }

    #[test]
    fn response_appears_as_assistant_block() {
        let rendered = format_recent(&history_of(1), 1);
        assert!(rendered.contains("[USER]\nquestion 0"));
        assert!(rendered.contains("[ASSISTANT]\nanswer 0"));
    }

    #[test]
    fn empty_history_renders_nothing() {
        assert_eq!(format_recent(&History::new(), 5), "");
    }

    #[test]
    fn completion_without_prompt_shows_placeholder() {
        let history = History::from(vec![Interaction {
            ts: "2026-01-01T00:00:00Z".into(),
            model: "m".into(),
            request: RequestKind::Completion { prompt: None },
            response: None,
            usage: None,
        }]);
        let rendered = format_recent(&history, 1);
        assert!(rendered.contains("[PROMPT]\nNo prompt found"));
    }
}
