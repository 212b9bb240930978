//! Single-line text entry for the high-score name prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest accepted name
pub const NAME_MAX_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEvent {
    Edited,
    Submitted(String),
    Cancelled,
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct NameEntry {
    text: String,
}

impl NameEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Enter submits a non-blank name, Esc or Ctrl-C cancels.
    pub fn handle_key(&mut self, key: KeyEvent) -> EntryEvent {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return EntryEvent::Cancelled;
        }
        match key.code {
            KeyCode::Esc => EntryEvent::Cancelled,
            KeyCode::Enter => {
                let name = self.text.trim();
                if name.is_empty() {
                    EntryEvent::Ignored
                } else {
                    EntryEvent::Submitted(name.to_string())
                }
            }
            KeyCode::Backspace => {
                if self.text.pop().is_some() {
                    EntryEvent::Edited
                } else {
                    EntryEvent::Ignored
                }
            }
            KeyCode::Char(c) if !c.is_control() && self.text.chars().count() < NAME_MAX_LEN => {
                self.text.push(c);
                EntryEvent::Edited
            }
            _ => EntryEvent::Ignored,
        }
    }
}
