//! Conversation transcript in the Mistral instruction-tag convention.

/// Beginning-of-sequence marker, emitted once at the start of a conversation.
const BOS: &str = "<s>";
/// End-of-sequence marker, appended after each assistant reply.
const EOS: &str = "</s>";

/// A growing conversation transcript in Mistral's `[INST]` format.
///
/// The transcript is a single owned buffer touched only by the REPL loop.
/// Each user turn is wrapped `[INST] text [/INST]`, each assistant reply is
/// folded back followed by `</s> `, and `<s>` appears exactly once at the
/// head of the conversation.
///
/// The buffer grows without bound for the life of the process; no windowing
/// or truncation is applied. History is never persisted across runs.
///
/// # Examples
///
/// ```
/// use tintoretto_core::Transcript;
///
/// let mut transcript = Transcript::new();
/// transcript.push_user("Hello");
/// assert_eq!(transcript.prompt(), "<s>[INST] Hello [/INST]");
///
/// transcript.push_assistant(" Hi there!");
/// assert_eq!(transcript.prompt(), "<s>[INST] Hello [/INST] Hi there!</s> ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    buffer: String,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a user turn, wrapped in instruction tags.
    ///
    /// The first turn prefixes the beginning-of-sequence marker. Empty or
    /// whitespace-only input passes through unvalidated.
    pub fn push_user(&mut self, text: &str) {
        if self.buffer.is_empty() {
            self.buffer.push_str(BOS);
        }
        self.buffer.push_str("[INST] ");
        self.buffer.push_str(text);
        self.buffer.push_str(" [/INST]");
    }

    /// Folds an assistant reply back into the transcript, closing the
    /// exchange with an end-of-sequence marker and a separating space.
    pub fn push_assistant(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push_str(EOS);
        self.buffer.push(' ');
    }

    /// The full dialogue-so-far, serialized as this turn's prompt.
    pub fn prompt(&self) -> &str {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_turn_prompt_framing() {
        let mut transcript = Transcript::new();
        transcript.push_user("u1");
        transcript.push_assistant("reply1");
        transcript.push_user("u2");

        assert_eq!(
            transcript.prompt(),
            "<s>[INST] u1 [/INST]reply1</s> [INST] u2 [/INST]"
        );
    }

    #[test]
    fn bos_appears_exactly_once() {
        let mut transcript = Transcript::new();
        transcript.push_user("a");
        transcript.push_assistant("b");
        transcript.push_user("c");
        transcript.push_assistant("d");
        transcript.push_user("e");

        assert_eq!(transcript.prompt().matches("<s>").count(), 1);
        assert_eq!(transcript.prompt().matches("</s>").count(), 2);
    }

    #[test]
    fn whitespace_input_passes_through() {
        let mut transcript = Transcript::new();
        transcript.push_user("");
        assert_eq!(transcript.prompt(), "<s>[INST]  [/INST]");
    }

    #[test]
    fn first_turn_fold_back() {
        let mut transcript = Transcript::new();
        transcript.push_user("Hello");
        assert_eq!(transcript.prompt(), "<s>[INST] Hello [/INST]");

        transcript.push_assistant(" Hi there!");
        assert_eq!(
            transcript.prompt(),
            "<s>[INST] Hello [/INST] Hi there!</s> "
        );
    }
}
