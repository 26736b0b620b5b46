//! Assistant panel draft.
//!
//! The panel has no backend; it only keeps the message being typed and
//! offers suggestion chips that seed it.

pub const SUGGESTIONS: [&str; 4] = ["Summarize", "Analyze Code", "Ideate", "Research"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChatDraft {
    text: String,
}

impl ChatDraft {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn apply_suggestion(&mut self, index: usize) {
        if let Some(suggestion) = SUGGESTIONS.get(index) {
            self.text = format!("{suggestion} ");
        }
    }

    pub fn can_send(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Take the draft for sending. Blank drafts stay put.
    pub fn take(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        Some(std::mem::take(&mut self.text).trim().to_string())
    }
}
