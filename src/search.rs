use crate::buffer::Buffer;
use crate::hl::Hl;
use crate::key::Key;

/// Incremental search state, fed one keystroke at a time by the prompt.
pub struct Search {
    last_match: Option<usize>,
    forward: bool,
    saved_hl: Option<(usize, Vec<Hl>)>,
}

impl Default for Search {
    fn default() -> Self {
        Self::new()
    }
}

impl Search {
    pub fn new() -> Self {
        Self {
            last_match: None,
            forward: true,
            saved_hl: None,
        }
    }

    pub fn update(&mut self, buffer: &mut Buffer, query: &str, key: Key) {
        if let Some((at, hl)) = self.saved_hl.take() {
            if let Some(row) = buffer.row_mut(at) {
                row.restore_hl(hl);
            }
        }

        match key {
            Key::Enter | Key::Escape => {
                self.last_match = None;
                self.forward = true;
                return;
            }
            Key::ArrowRight | Key::ArrowDown => self.forward = true,
            Key::ArrowLeft | Key::ArrowUp => self.forward = false,
            _ => {
                self.last_match = None;
                self.forward = true;
            }
        }

        if self.last_match.is_none() {
            self.forward = true;
        }

        let query = query.as_bytes();
        let n_rows = buffer.rows().len();
        let mut current = self.last_match;

        for _ in 0..n_rows {
            let at = match current {
                None => 0,
                Some(at) if self.forward => (at + 1) % n_rows,
                Some(at) => (at + n_rows - 1) % n_rows,
            };
            current = Some(at);

            let row = &buffer.rows()[at];
            let Some(rx) = find(row.render(), query) else {
                continue;
            };
            let cx = row.rx_to_cx(rx);

            self.last_match = Some(at);
            buffer.jump_to(cx, at);
            if let Some(row) = buffer.row_mut(at) {
                let saved = row.overlay(rx..rx + query.len(), Hl::Match);
                self.saved_hl = Some((at, saved));
            }
            break;
        }
    }
}

/// An empty needle matches at the start of any row.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
