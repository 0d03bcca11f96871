use std::io;

use crate::terminal::ByteSource;

const ESC: u8 = 0x1b;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Home,
    End,
    PageUp,
    PageDown,
    Backspace,
    Delete,
    Enter,
    Escape,
    /// Control combination, holding the upper case letter (`Ctrl(b'Q')`).
    Ctrl(u8),
    Char(u8),
}

/// The byte a terminal sends for Ctrl plus `letter`.
pub const fn ctrl_key(letter: u8) -> u8 {
    letter & 0x1f
}

impl Key {
    fn from_byte(byte: u8) -> Self {
        match byte {
            b'\r' => Key::Enter,
            ESC => Key::Escape,
            0x7f => Key::Backspace,
            0..=0x1f => Key::Ctrl(byte | 0x40),
            _ => Key::Char(byte),
        }
    }
}

/// Lookahead storage for the bytes following an escape.
struct EscapeSeq {
    bytes: [u8; 3],
    len: usize,
}

impl EscapeSeq {
    fn new() -> Self {
        Self {
            bytes: [0; 3],
            len: 0,
        }
    }

    /// Reads one more byte. A timeout or a failed read leaves the sequence
    /// incomplete and returns false.
    fn fill<S: ByteSource>(&mut self, src: &mut S) -> bool {
        if self.len == self.bytes.len() {
            return false;
        }
        match src.read_byte() {
            Ok(Some(byte)) => {
                self.bytes[self.len] = byte;
                self.len += 1;
                true
            }
            Ok(None) => false,
            Err(e) => {
                tracing::debug!(error = %e, "escape sequence read failed");
                false
            }
        }
    }

    fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Returns `Ok(None)` if no byte arrived within one poll window.
pub fn poll_key<S: ByteSource>(src: &mut S) -> io::Result<Option<Key>> {
    match src.read_byte()? {
        Some(ESC) => Ok(Some(read_escape(src))),
        Some(byte) => Ok(Some(Key::from_byte(byte))),
        None => Ok(None),
    }
}

/// Blocks until a whole logical key has been read.
pub fn read_key<S: ByteSource>(src: &mut S) -> io::Result<Key> {
    loop {
        if let Some(key) = poll_key(src)? {
            return Ok(key);
        }
    }
}

fn read_escape<S: ByteSource>(src: &mut S) -> Key {
    let mut seq = EscapeSeq::new();
    if !seq.fill(src) || !seq.fill(src) {
        return Key::Escape;
    }

    match seq.as_slice() {
        [b'[', b'0'..=b'9'] => {
            if !seq.fill(src) {
                return Key::Escape;
            }
            match seq.as_slice() {
                [b'[', b'1' | b'7', b'~'] => Key::Home,
                [b'[', b'3', b'~'] => Key::Delete,
                [b'[', b'4' | b'8', b'~'] => Key::End,
                [b'[', b'5', b'~'] => Key::PageUp,
                [b'[', b'6', b'~'] => Key::PageDown,
                _ => Key::Escape,
            }
        }
        [b'[', b'A'] => Key::ArrowUp,
        [b'[', b'B'] => Key::ArrowDown,
        [b'[', b'C'] => Key::ArrowRight,
        [b'[', b'D'] => Key::ArrowLeft,
        [b'[', b'H'] | [b'O', b'H'] => Key::Home,
        [b'[', b'F'] | [b'O', b'F'] => Key::End,
        _ => Key::Escape,
    }
}
