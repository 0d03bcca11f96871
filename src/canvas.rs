use crate::hl::Hl;

/// One output frame, assembled in memory and written to the terminal at once.
#[derive(Default)]
pub struct Canvas {
    bytes: Vec<u8>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..]
    }

    #[inline]
    pub fn clear(&mut self) {
        self.bytes.clear()
    }

    #[inline]
    pub fn write(&mut self, bytes: &[u8]) {
        self.bytes.extend_from_slice(bytes);
    }

    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
    }

    pub fn pad(&mut self, n: usize) {
        self.bytes.resize(self.bytes.len() + n, b' ');
    }

    #[inline]
    pub fn set_color(&mut self, hl: Hl) {
        self.write(hl.color())
    }

    #[inline]
    pub fn reset_color(&mut self) {
        self.write(Hl::Normal.color())
    }

    #[inline]
    pub fn invert(&mut self) {
        self.write(b"\x1b[7m")
    }

    #[inline]
    pub fn reset_attrs(&mut self) {
        self.write(b"\x1b[m")
    }

    #[inline]
    pub fn hide_cursor(&mut self) {
        self.write(b"\x1b[?25l")
    }

    #[inline]
    pub fn show_cursor(&mut self) {
        self.write(b"\x1b[?25h")
    }

    #[inline]
    pub fn home(&mut self) {
        self.write(b"\x1b[H")
    }

    #[inline]
    pub fn clear_line(&mut self) {
        self.write(b"\x1b[K")
    }

    #[inline]
    pub fn newline(&mut self) {
        self.write(b"\r\n")
    }

    /// Moves the cursor to a zero based screen position.
    pub fn move_to(&mut self, y: usize, x: usize) {
        self.write(format!("\x1b[{};{}H", y + 1, x + 1).as_bytes())
    }
}
