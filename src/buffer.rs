use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};

use crate::canvas::Canvas;
use crate::key::Key;
use crate::row::Row;
use crate::syntax::Syntax;

/// Cursor and scroll position, saved while a search moves them around.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    cx: usize,
    cy: usize,
    rowoff: usize,
    coloff: usize,
}

pub struct Buffer {
    pub filename: Option<String>,
    /// Number of edits since the last load or save.
    pub dirty: usize,
    syntax: Option<&'static Syntax>,
    width: usize,
    height: usize,
    cx: usize,
    cy: usize,
    rx: usize,
    rowoff: usize,
    coloff: usize,
    rows: Vec<Row>,
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            filename: None,
            dirty: 0,
            syntax: None,
            width: 0,
            height: 0,
            cx: 0,
            cy: 0,
            rx: 0,
            rowoff: 0,
            coloff: 0,
            rows: Vec::new(),
        }
    }

    /// Lines are split on `\n`; one trailing `\r` per line is dropped.
    pub fn open(filename: &str) -> io::Result<Self> {
        let mut buffer = Self::new();
        buffer.filename = Some(filename.to_string());
        buffer.syntax = Syntax::detect(buffer.filename.as_deref());

        let reader = BufReader::new(File::open(filename)?);
        for line in reader.split(b'\n') {
            let mut line = line?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            buffer.insert_row(buffer.rows.len(), &line);
        }
        buffer.dirty = 0;

        tracing::debug!(
            filename,
            rows = buffer.rows.len(),
            syntax = buffer.syntax_name(),
            "opened file"
        );
        Ok(buffer)
    }

    pub fn set_filename(&mut self, filename: String) {
        self.filename = Some(filename);
        self.select_syntax();
    }

    fn select_syntax(&mut self) {
        self.syntax = Syntax::detect(self.filename.as_deref());
        tracing::debug!(syntax = self.syntax_name(), "selected syntax");

        let mut in_comment = false;
        for row in self.rows.iter_mut() {
            row.highlight(self.syntax, in_comment);
            in_comment = row.open_comment;
        }
    }

    pub fn syntax_name(&self) -> &'static str {
        self.syntax.map_or("no ft", |syntax| syntax.name)
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Raw cursor position as `(cx, cy)`.
    #[inline]
    pub fn cursor(&self) -> (usize, usize) {
        (self.cx, self.cy)
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        for row in &self.rows {
            bytes.extend_from_slice(row.chars());
            bytes.push(b'\n');
        }
        bytes
    }

    /// Truncates the file and writes every row followed by `\n`. Returns the
    /// number of bytes written.
    pub fn save(&mut self) -> io::Result<usize> {
        let filename = self
            .filename
            .as_deref()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "no file name"))?;
        let bytes = self.to_bytes();
        fs::write(filename, &bytes)?;
        self.dirty = 0;

        tracing::info!(filename, bytes = bytes.len(), "saved file");
        Ok(bytes.len())
    }

    /// Sets the size of the text area, bars excluded.
    pub fn locate(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(at, text.to_vec()));
        for row in &mut self.rows[at + 1..] {
            row.idx += 1;
        }
        self.update_syntax(at);
        self.update_syntax(at + 1);
        self.dirty += 1;
    }

    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        for row in &mut self.rows[at..] {
            row.idx -= 1;
        }
        self.update_syntax(at);
        self.dirty += 1;
    }

    pub fn insert_char(&mut self, at: usize, col: usize, ch: u8) {
        if let Some(row) = self.rows.get_mut(at) {
            row.insert(col, ch);
            self.update_syntax(at);
            self.dirty += 1;
        }
    }

    pub fn delete_char(&mut self, at: usize, col: usize) {
        if let Some(row) = self.rows.get_mut(at) {
            if row.remove(col).is_some() {
                self.update_syntax(at);
                self.dirty += 1;
            }
        }
    }

    pub fn append_text(&mut self, at: usize, text: &[u8]) {
        if let Some(row) = self.rows.get_mut(at) {
            row.push_str(text);
            self.update_syntax(at);
            self.dirty += 1;
        }
    }

    /// Moves everything from `col` on into a new row below.
    pub fn split_row(&mut self, at: usize, col: usize) {
        if let Some(row) = self.rows.get_mut(at) {
            let tail = row.split_off(col);
            self.update_syntax(at);
            self.insert_row(at + 1, &tail);
        }
    }

    /// Highlights the row at `from`, then keeps going down while the block
    /// comment state handed to the next row changes.
    fn update_syntax(&mut self, from: usize) {
        let mut at = from;
        while at < self.rows.len() {
            let in_comment = at > 0 && self.rows[at - 1].open_comment;
            if !self.rows[at].highlight(self.syntax, in_comment) {
                break;
            }
            at += 1;
        }
    }

    pub(crate) fn row_mut(&mut self, at: usize) -> Option<&mut Row> {
        self.rows.get_mut(at)
    }

    /// Puts the cursor on a row and scrolls so that row ends up at the top.
    pub(crate) fn jump_to(&mut self, cx: usize, cy: usize) {
        self.cy = cy.min(self.rows.len());
        self.cx = cx;
        self.rowoff = self.rows.len();
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            cx: self.cx,
            cy: self.cy,
            rowoff: self.rowoff,
            coloff: self.coloff,
        }
    }

    pub fn restore_viewport(&mut self, viewport: Viewport) {
        self.cx = viewport.cx;
        self.cy = viewport.cy;
        self.rowoff = viewport.rowoff;
        self.coloff = viewport.coloff;
    }

    pub fn process_keypress(&mut self, key: Key) {
        match key {
            Key::ArrowLeft | Key::ArrowRight | Key::ArrowUp | Key::ArrowDown => {
                self.move_cursor(key)
            }
            Key::Home => self.cx = 0,
            Key::End => {
                if let Some(row) = self.rows.get(self.cy) {
                    self.cx = row.len();
                }
            }
            Key::PageUp | Key::PageDown => {
                let arrow = if key == Key::PageUp {
                    self.cy = self.rowoff;
                    Key::ArrowUp
                } else {
                    self.cy = (self.rowoff + self.height)
                        .saturating_sub(1)
                        .min(self.rows.len());
                    Key::ArrowDown
                };
                for _ in 0..self.height {
                    self.move_cursor(arrow);
                }
            }
            Key::Backspace | Key::Ctrl(b'H') => self.delete_char_at_cursor(),
            Key::Delete => {
                self.move_cursor(Key::ArrowRight);
                self.delete_char_at_cursor();
            }
            Key::Enter => self.insert_newline(),
            Key::Ctrl(b'I') => self.insert_char_at_cursor(b'\t'),
            Key::Char(ch) if ch.is_ascii() => self.insert_char_at_cursor(ch),
            _ => (),
        }
    }

    fn move_cursor(&mut self, key: Key) {
        let row_len = self.rows.get(self.cy).map(Row::len);

        match key {
            Key::ArrowLeft => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = self.rows[self.cy].len();
                }
            }
            Key::ArrowRight => match row_len {
                Some(len) if self.cx < len => self.cx += 1,
                Some(_) => {
                    self.cy += 1;
                    self.cx = 0;
                }
                None => (),
            },
            Key::ArrowUp => self.cy = self.cy.saturating_sub(1),
            Key::ArrowDown => {
                if self.cy < self.rows.len() {
                    self.cy += 1;
                }
            }
            _ => (),
        }

        let row_len = self.rows.get(self.cy).map_or(0, Row::len);
        self.cx = self.cx.min(row_len);
    }

    fn insert_char_at_cursor(&mut self, ch: u8) {
        if self.cy == self.rows.len() {
            self.insert_row(self.rows.len(), b"");
        }
        self.insert_char(self.cy, self.cx, ch);
        self.cx += 1;
    }

    fn insert_newline(&mut self) {
        if self.cx == 0 {
            self.insert_row(self.cy, b"");
        } else {
            self.split_row(self.cy, self.cx);
        }
        self.cy += 1;
        self.cx = 0;
    }

    fn delete_char_at_cursor(&mut self) {
        if self.cy == self.rows.len() || (self.cx == 0 && self.cy == 0) {
            return;
        }

        if self.cx > 0 {
            self.delete_char(self.cy, self.cx - 1);
            self.cx -= 1;
        } else {
            self.cx = self.rows[self.cy - 1].len();
            let text = self.rows[self.cy].chars().to_vec();
            self.append_text(self.cy - 1, &text);
            self.delete_row(self.cy);
            self.cy -= 1;
        }
    }

    pub fn scroll(&mut self) {
        self.rx = self
            .rows
            .get(self.cy)
            .map_or(0, |row| row.cx_to_rx(self.cx));

        if self.cy < self.rowoff {
            self.rowoff = self.cy;
        }
        if self.cy >= self.rowoff + self.height {
            self.rowoff = (self.cy + 1).saturating_sub(self.height);
        }
        if self.rx < self.coloff {
            self.coloff = self.rx;
        }
        if self.rx >= self.coloff + self.width {
            self.coloff = (self.rx + 1).saturating_sub(self.width);
        }
    }

    pub fn draw(&mut self, canvas: &mut Canvas) {
        self.scroll();
        self.draw_rows(canvas);
        self.draw_status_bar(canvas);
    }

    fn draw_rows(&self, canvas: &mut Canvas) {
        for y in 0..self.height {
            if let Some(row) = self.rows.get(self.rowoff + y) {
                row.draw(canvas, self.coloff, self.width);
            } else if self.rows.is_empty() && y == self.height / 3 {
                let welcome = format!("Tilde editor -- version {}", env!("CARGO_PKG_VERSION"));
                let len = welcome.len().min(self.width);
                let mut padding = (self.width - len) / 2;
                if padding > 0 {
                    canvas.push(b'~');
                    padding -= 1;
                }
                canvas.pad(padding);
                canvas.write(&welcome.as_bytes()[..len]);
            } else {
                canvas.push(b'~');
            }
            canvas.clear_line();
            canvas.newline();
        }
    }

    fn draw_status_bar(&self, canvas: &mut Canvas) {
        let left = format!(
            "{:.20} - {} lines {}",
            self.filename.as_deref().unwrap_or("[No Name]"),
            self.rows.len(),
            if self.dirty > 0 { "(modified)" } else { "" },
        );
        let right = format!(
            "{} | {}/{}",
            self.syntax_name(),
            self.cy + 1,
            self.rows.len()
        );
        let left_len = left.len().min(self.width);
        let rest = self.width - left_len;

        canvas.invert();
        canvas.write(&left.as_bytes()[..left_len]);
        if rest >= right.len() {
            canvas.pad(rest - right.len());
            canvas.write(right.as_bytes());
        } else {
            canvas.pad(rest);
        }
        canvas.reset_attrs();
        canvas.newline();
    }

    pub fn draw_cursor(&self, canvas: &mut Canvas) {
        canvas.move_to(
            self.cy.saturating_sub(self.rowoff),
            self.rx.saturating_sub(self.coloff),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hl::Hl;

    fn buffer(filename: &str, lines: &[&str]) -> Buffer {
        let mut buffer = Buffer::new();
        for line in lines {
            buffer.insert_row(buffer.rows().len(), line.as_bytes());
        }
        buffer.set_filename(filename.to_string());
        buffer.dirty = 0;
        buffer.locate(80, 10);
        buffer
    }

    fn texts(buffer: &Buffer) -> Vec<&str> {
        buffer
            .rows()
            .iter()
            .map(|row| std::str::from_utf8(row.chars()).unwrap())
            .collect()
    }

    fn assert_indices(buffer: &Buffer) {
        for (i, row) in buffer.rows().iter().enumerate() {
            assert_eq!(row.idx, i);
        }
    }

    #[test]
    fn rows_stay_numbered() {
        let mut buffer = buffer("a.txt", &["a", "b", "c"]);
        buffer.insert_row(1, b"x");
        assert_eq!(texts(&buffer), ["a", "x", "b", "c"]);
        assert_indices(&buffer);

        buffer.delete_row(0);
        assert_eq!(texts(&buffer), ["x", "b", "c"]);
        assert_indices(&buffer);

        buffer.insert_row(99, b"end");
        assert_eq!(texts(&buffer), ["x", "b", "c", "end"]);
        assert_indices(&buffer);
    }

    #[test]
    fn out_of_range_edits_are_ignored_or_clamped() {
        let mut buffer = buffer("a.txt", &["ab"]);
        buffer.delete_row(5);
        buffer.delete_char(0, 5);
        buffer.insert_char(3, 0, b'x');
        assert_eq!(buffer.dirty, 0);

        buffer.insert_char(0, 99, b'c');
        assert_eq!(texts(&buffer), ["abc"]);
        assert_eq!(buffer.dirty, 1);
    }

    #[test]
    fn every_edit_bumps_dirty() {
        let mut buffer = buffer("a.txt", &["ab"]);
        buffer.insert_char(0, 1, b'x');
        buffer.delete_char(0, 0);
        buffer.append_text(0, b"yz");
        buffer.split_row(0, 1);
        assert_eq!(texts(&buffer), ["x", "byz"]);
        assert_eq!(buffer.dirty, 4);
    }

    #[test]
    fn edits_rerender_tabs() {
        let mut buffer = buffer("a.txt", &["ab"]);
        buffer.insert_char(0, 1, b'\t');
        assert_eq!(buffer.rows()[0].render(), b"a       b");
        assert_eq!(buffer.rows()[0].hl.len(), 9);
    }

    #[test]
    fn block_comment_spans_rows() {
        let buffer = buffer("a.c", &["/* start", "middle", "end */ code"]);
        let rows = buffer.rows();

        assert!(rows[0].open_comment);
        assert!(rows[1].open_comment);
        assert!(rows[1].hl.iter().all(|&hl| hl == Hl::BlockComment));
        assert_eq!(&rows[2].hl[..4], &[Hl::BlockComment; 4]);
        assert_eq!(&rows[2].hl[4..6], &[Hl::Comment; 2]);
        assert!(rows[2].hl[6..].iter().all(|&hl| hl == Hl::Normal));
        assert!(!rows[2].open_comment);
    }

    #[test]
    fn closing_comment_cascades_down() {
        let mut buffer = buffer("a.c", &["/* start", "middle 1", "end */ if 2"]);
        buffer.insert_char(0, 8, b'*');
        buffer.insert_char(0, 9, b'/');
        let rows = buffer.rows();

        assert!(!rows[0].open_comment);
        assert!(!rows[1].open_comment);
        assert!(rows[1].hl[..6].iter().all(|&hl| hl == Hl::Normal));
        assert_eq!(rows[1].hl[7], Hl::Number);
        assert!(!rows[2].hl.contains(&Hl::Comment));
        assert!(!rows[2].hl.contains(&Hl::BlockComment));
        assert_eq!(&rows[2].hl[7..9], &[Hl::Keyword; 2]);
        assert_eq!(rows[2].hl[10], Hl::Number);
    }

    #[test]
    fn cascade_stops_when_state_settles() {
        let mut buffer = buffer("a.c", &["x", "/* a */", "y"]);
        buffer.insert_char(0, 1, b'1');
        assert!(buffer.rows().iter().all(|row| !row.open_comment));
        assert_eq!(buffer.rows()[1].hl[0], Hl::Comment);
    }

    #[test]
    fn inserted_row_changes_entry_state_below() {
        let mut buffer = buffer("a.c", &["/* a", "b */ 1"]);
        buffer.insert_row(1, b"c */");
        let rows = buffer.rows();
        assert!(!rows[1].open_comment);
        assert!(!rows[2].hl.contains(&Hl::BlockComment));
    }

    #[test]
    fn deleted_row_changes_entry_state_below() {
        let mut buffer = buffer("a.c", &["x", "/* a", "b"]);
        buffer.delete_row(1);
        assert_eq!(buffer.rows()[1].hl, [Hl::Normal]);
        assert!(!buffer.rows()[1].open_comment);
    }

    #[test]
    fn renaming_rehighlights() {
        let mut buffer = buffer("a.txt", &["int x;"]);
        assert_eq!(buffer.syntax_name(), "no ft");
        assert_eq!(buffer.rows()[0].hl[0], Hl::Normal);

        buffer.set_filename("a.c".to_string());
        assert_eq!(buffer.syntax_name(), "c");
        assert_eq!(buffer.rows()[0].hl[0], Hl::Type);
    }

    #[test]
    fn typing_into_empty_buffer_appends_row() {
        let mut buffer = Buffer::new();
        buffer.process_keypress(Key::Char(b'h'));
        buffer.process_keypress(Key::Char(b'i'));
        assert_eq!(texts(&buffer), ["hi"]);
        assert_eq!(buffer.cursor(), (2, 0));
        assert!(buffer.dirty > 0);
    }

    #[test]
    fn non_ascii_bytes_are_not_inserted() {
        let mut buffer = Buffer::new();
        buffer.process_keypress(Key::Char(0xe9));
        assert!(buffer.rows().is_empty());
    }

    #[test]
    fn enter_splits_and_backspace_joins() {
        let mut buffer = buffer("a.txt", &["hello world"]);
        for _ in 0..5 {
            buffer.process_keypress(Key::ArrowRight);
        }
        buffer.process_keypress(Key::Enter);
        assert_eq!(texts(&buffer), ["hello", " world"]);
        assert_eq!(buffer.cursor(), (0, 1));
        assert_indices(&buffer);

        buffer.process_keypress(Key::Backspace);
        assert_eq!(texts(&buffer), ["hello world"]);
        assert_eq!(buffer.cursor(), (5, 0));
    }

    #[test]
    fn enter_at_line_start_opens_row_above() {
        let mut buffer = buffer("a.txt", &["abc"]);
        buffer.process_keypress(Key::Enter);
        assert_eq!(texts(&buffer), ["", "abc"]);
        assert_eq!(buffer.cursor(), (0, 1));
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut buffer = buffer("a.txt", &["abc", "def"]);
        buffer.process_keypress(Key::Delete);
        assert_eq!(texts(&buffer), ["bc", "def"]);

        buffer.process_keypress(Key::End);
        buffer.process_keypress(Key::Delete);
        assert_eq!(texts(&buffer), ["bcdef"]);
    }

    #[test]
    fn backspace_at_origin_does_nothing() {
        let mut buffer = buffer("a.txt", &["abc"]);
        buffer.process_keypress(Key::Backspace);
        assert_eq!(texts(&buffer), ["abc"]);
        assert_eq!(buffer.dirty, 0);
    }

    #[test]
    fn tab_key_inserts_tab() {
        let mut buffer = buffer("a.txt", &["x"]);
        buffer.process_keypress(Key::Ctrl(b'I'));
        assert_eq!(buffer.rows()[0].chars(), b"\tx");
        buffer.scroll();
        assert_eq!(buffer.rx, 8);
    }

    #[test]
    fn cursor_wraps_at_row_ends() {
        let mut buffer = buffer("a.txt", &["ab", "c"]);
        buffer.process_keypress(Key::ArrowLeft);
        assert_eq!(buffer.cursor(), (0, 0));
        buffer.process_keypress(Key::End);
        buffer.process_keypress(Key::ArrowRight);
        assert_eq!(buffer.cursor(), (0, 1));
        buffer.process_keypress(Key::ArrowLeft);
        assert_eq!(buffer.cursor(), (2, 0));
    }

    #[test]
    fn vertical_moves_clamp_column() {
        let mut buffer = buffer("a.txt", &["abcdef", "ab"]);
        buffer.process_keypress(Key::End);
        buffer.process_keypress(Key::ArrowDown);
        assert_eq!(buffer.cursor(), (2, 1));
        buffer.process_keypress(Key::ArrowDown);
        assert_eq!(buffer.cursor(), (0, 2));
        buffer.process_keypress(Key::ArrowDown);
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn page_down_then_up() {
        let lines: Vec<String> = (0..50).map(|i| i.to_string()).collect();
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut buffer = buffer("a.txt", &lines);

        buffer.process_keypress(Key::PageDown);
        assert_eq!(buffer.cursor().1, 19);
        buffer.scroll();
        assert_eq!(buffer.rowoff, 10);

        buffer.process_keypress(Key::PageUp);
        assert_eq!(buffer.cursor().1, 0);
    }

    #[test]
    fn scroll_follows_cursor() {
        let mut buffer = buffer("a.txt", &["x"; 30]);
        buffer.locate(4, 5);
        for _ in 0..12 {
            buffer.process_keypress(Key::ArrowDown);
        }
        buffer.scroll();
        assert_eq!(buffer.rowoff, 8);

        for _ in 0..6 {
            buffer.process_keypress(Key::Char(b'y'));
        }
        buffer.scroll();
        assert_eq!(buffer.coloff, 3);

        buffer.process_keypress(Key::Home);
        for _ in 0..12 {
            buffer.process_keypress(Key::ArrowUp);
        }
        buffer.scroll();
        assert_eq!((buffer.rowoff, buffer.coloff), (0, 0));
    }

    #[test]
    fn welcome_banner_on_empty_buffer() {
        let mut buffer = Buffer::new();
        buffer.locate(80, 9);
        let mut canvas = Canvas::new();
        buffer.draw(&mut canvas);
        let frame = String::from_utf8_lossy(canvas.as_bytes()).into_owned();
        let lines: Vec<&str> = frame.split("\r\n").collect();

        assert!(lines[0].starts_with('~'));
        assert!(lines[3].starts_with('~'));
        assert!(lines[3].contains("Tilde editor -- version"));
        assert!(!lines[2].contains("Tilde"));
    }

    #[test]
    fn no_banner_once_there_is_text() {
        let mut buffer = buffer("a.txt", &["x"]);
        let mut canvas = Canvas::new();
        buffer.draw(&mut canvas);
        let frame = String::from_utf8_lossy(canvas.as_bytes()).into_owned();
        assert!(!frame.contains("Tilde editor"));
        assert!(frame.contains("\r\n~\x1b[K"));
    }

    #[test]
    fn status_bar_layout() {
        let mut buffer = buffer("main.c", &["int x;", "y"]);
        buffer.locate(40, 2);
        buffer.process_keypress(Key::Char(b'z'));
        let mut canvas = Canvas::new();
        buffer.draw_status_bar(&mut canvas);

        let left = "main.c - 2 lines (modified)";
        let right = "c | 1/2";
        let expected = format!(
            "\x1b[7m{}{}{}\x1b[m\r\n",
            left,
            " ".repeat(40 - left.len() - right.len()),
            right
        );
        assert_eq!(canvas.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn status_bar_truncates() {
        let mut buffer = buffer("a_really_long_file_name_here.txt", &[]);
        buffer.locate(30, 2);
        let mut canvas = Canvas::new();
        buffer.draw_status_bar(&mut canvas);
        let expected = "\x1b[7ma_really_long_file_n - 0 lines\x1b[m\r\n";
        assert_eq!(canvas.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn cursor_is_viewport_relative() {
        let mut buffer = buffer("a.txt", &["\tx"; 20]);
        buffer.locate(80, 5);
        buffer.jump_to(1, 12);
        buffer.scroll();
        let mut canvas = Canvas::new();
        buffer.draw_cursor(&mut canvas);
        assert_eq!(canvas.as_bytes(), b"\x1b[1;9H");
    }

    #[test]
    fn viewport_round_trip() {
        let mut buffer = buffer("a.txt", &["abc"; 20]);
        buffer.process_keypress(Key::ArrowDown);
        let saved = buffer.viewport();
        buffer.jump_to(2, 15);
        buffer.restore_viewport(saved);
        assert_eq!(buffer.viewport(), saved);
        assert_eq!(buffer.cursor(), (0, 1));
    }

    #[test]
    fn serializes_with_trailing_newlines() {
        let buffer = buffer("a.txt", &["a", "", "b\tc"]);
        assert_eq!(buffer.to_bytes(), b"a\n\nb\tc\n");
    }
}
