use std::ops::Range;

use crate::canvas::Canvas;
use crate::hl::Hl;
use crate::syntax::Syntax;

pub const TAB_STOP: usize = 8;

pub struct Row {
    pub idx: usize,
    chars: Vec<u8>,
    render: Vec<u8>,
    cx_to_rx: Vec<usize>,
    rx_to_cx: Vec<usize>,
    pub hl: Vec<Hl>,
    pub open_comment: bool,
}

impl Row {
    pub fn new(idx: usize, chars: Vec<u8>) -> Self {
        let mut row = Self {
            idx,
            chars,
            render: Vec::new(),
            cx_to_rx: Vec::new(),
            rx_to_cx: Vec::new(),
            hl: Vec::new(),
            open_comment: false,
        };
        row.update_render();
        row
    }

    fn update_render(&mut self) {
        self.render.clear();
        self.cx_to_rx.clear();
        self.rx_to_cx.clear();

        for (cx, &ch) in self.chars.iter().enumerate() {
            self.cx_to_rx.push(self.render.len());

            if ch == b'\t' {
                for _ in 0..(TAB_STOP - self.render.len() % TAB_STOP) {
                    self.render.push(b' ');
                    self.rx_to_cx.push(cx);
                }
            } else {
                self.render.push(ch);
                self.rx_to_cx.push(cx);
            }
        }
        self.cx_to_rx.push(self.render.len());
        self.rx_to_cx.push(self.chars.len());

        self.hl.clear();
        self.hl.resize(self.render.len(), Hl::Normal);
    }

    #[inline]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    #[inline]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cx_to_rx(&self, cx: usize) -> usize {
        self.cx_to_rx[cx.min(self.chars.len())]
    }

    /// A rendered column inside a tab maps to the tab itself.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        self.rx_to_cx.get(rx).copied().unwrap_or(self.chars.len())
    }

    pub(crate) fn insert(&mut self, at: usize, ch: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, ch);
        self.update_render();
    }

    pub(crate) fn remove(&mut self, at: usize) -> Option<u8> {
        if at >= self.chars.len() {
            return None;
        }
        let ch = self.chars.remove(at);
        self.update_render();
        Some(ch)
    }

    pub(crate) fn push_str(&mut self, text: &[u8]) {
        self.chars.extend_from_slice(text);
        self.update_render();
    }

    pub(crate) fn split_off(&mut self, at: usize) -> Vec<u8> {
        let tail = self.chars.split_off(at.min(self.chars.len()));
        self.update_render();
        tail
    }

    /// Returns true when the block comment state at the end of the row changed.
    pub(crate) fn highlight(&mut self, syntax: Option<&Syntax>, in_comment: bool) -> bool {
        let open_comment = match syntax {
            Some(syntax) => syntax.highlight(&self.render, in_comment, &mut self.hl),
            None => {
                self.hl.clear();
                self.hl.resize(self.render.len(), Hl::Normal);
                false
            }
        };
        let changed = open_comment != self.open_comment;
        self.open_comment = open_comment;
        changed
    }

    /// Paints `hl` over a rendered range and hands back what was there.
    pub(crate) fn overlay(&mut self, range: Range<usize>, hl: Hl) -> Vec<Hl> {
        let saved = self.hl.clone();
        let end = range.end.min(self.hl.len());
        let start = range.start.min(end);
        self.hl[start..end].fill(hl);
        saved
    }

    pub(crate) fn restore_hl(&mut self, saved: Vec<Hl>) {
        if saved.len() == self.render.len() {
            self.hl = saved;
        }
    }

    pub fn draw(&self, canvas: &mut Canvas, coloff: usize, width: usize) {
        let start = coloff.min(self.render.len());
        let end = (start + width).min(self.render.len());
        let mut current = Hl::Normal;

        for (&ch, &hl) in self.render[start..end].iter().zip(&self.hl[start..end]) {
            if ch.is_ascii_control() {
                let sym = if ch <= 26 { b'@' + ch } else { b'?' };
                canvas.invert();
                canvas.push(sym);
                canvas.reset_attrs();
                if current != Hl::Normal {
                    canvas.set_color(current);
                }
            } else {
                if hl.color() != current.color() {
                    canvas.set_color(hl);
                    current = hl;
                }
                canvas.push(ch);
            }
        }
        canvas.reset_color();
    }
}
