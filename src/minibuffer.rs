use crate::key::Key;

/// What a keystroke did to the prompt line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptState {
    Editing,
    Submitted,
    Cancelled,
}

/// Single line input shown in the message bar while a prompt is active.
#[derive(Default)]
pub struct Minibuffer {
    input: String,
}

impl Minibuffer {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn into_input(self) -> String {
        self.input
    }

    /// Renders `template` with its `{}` replaced by the current input.
    pub fn prompt(&self, template: &str) -> String {
        template.replacen("{}", &self.input, 1)
    }

    /// Enter with nothing typed keeps the prompt open.
    pub fn process_keypress(&mut self, key: Key) -> PromptState {
        match key {
            Key::Backspace | Key::Delete | Key::Ctrl(b'H') => {
                self.input.pop();
            }
            Key::Escape => return PromptState::Cancelled,
            Key::Enter if !self.input.is_empty() => return PromptState::Submitted,
            Key::Char(ch) if ch.is_ascii() => self.input.push(ch as char),
            _ => (),
        }
        PromptState::Editing
    }
}
