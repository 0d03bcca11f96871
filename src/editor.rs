use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::buffer::Buffer;
use crate::canvas::Canvas;
use crate::config::Config;
use crate::coord::Size;
use crate::error::{Error, Result};
use crate::key::{self, Key};
use crate::message::Message;
use crate::minibuffer::{Minibuffer, PromptState};
use crate::search::Search;
use crate::terminal::{self, ByteSource, BAR_ROWS};

pub const HELP: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

pub struct Editor<R: ByteSource, W: Write> {
    input: R,
    output: W,
    config: Config,
    canvas: Canvas,
    size: Size,
    buffer: Buffer,
    message: Option<Message>,
    quit_times: usize,
    resized: Arc<AtomicBool>,
}

impl<R: ByteSource, W: Write> Editor<R, W> {
    pub fn new(input: R, output: W, config: Config) -> Self {
        Self {
            input,
            output,
            quit_times: config.quit_times,
            config,
            canvas: Canvas::new(),
            size: Size::default(),
            buffer: Buffer::new(),
            message: None,
            resized: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The editor re-queries the window size whenever `flag` gets set.
    pub fn with_resize_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.resized = flag;
        self
    }

    #[inline]
    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn update_window_size(&mut self) -> Result<()> {
        let size = terminal::window_size(&mut self.input, &mut self.output)?;
        tracing::debug!(width = size.w, height = size.h, "window size");
        self.resize(size);
        Ok(())
    }

    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.buffer.locate(size.w, size.h.saturating_sub(BAR_ROWS));
    }

    pub fn open(&mut self, filename: &str) -> Result<()> {
        self.buffer = Buffer::open(filename).map_err(|source| Error::Open {
            path: filename.to_string(),
            source,
        })?;
        self.resize(self.size);
        Ok(())
    }

    pub fn set_message(&mut self, text: &str) {
        self.message = Some(Message::new(text));
    }

    /// Runs until the user quits.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.refresh_screen()?;
            let key = self.read_key()?;
            if self.process_keypress(key)? {
                tracing::debug!("quit");
                return Ok(());
            }
        }
    }

    fn read_key(&mut self) -> Result<Key> {
        loop {
            if let Some(key) = key::poll_key(&mut self.input).map_err(Error::Read)? {
                return Ok(key);
            }
            if self.resized.swap(false, Ordering::Relaxed) {
                self.update_window_size()?;
                self.refresh_screen()?;
            }
        }
    }

    pub fn refresh_screen(&mut self) -> Result<()> {
        self.canvas.clear();
        self.canvas.hide_cursor();
        self.canvas.home();

        self.buffer.draw(&mut self.canvas);
        self.draw_message_bar();

        self.buffer.draw_cursor(&mut self.canvas);
        self.canvas.show_cursor();

        self.output
            .write_all(self.canvas.as_bytes())
            .map_err(Error::Write)?;
        self.output.flush().map_err(Error::Write)
    }

    fn draw_message_bar(&mut self) {
        self.canvas.clear_line();
        if let Some(message) = &self.message {
            if message.is_visible(self.config.message_timeout) {
                let len = message.text.len().min(self.size.w);
                self.canvas.write(&message.text.as_bytes()[..len]);
            }
        }
    }

    /// Returns true once the editor should exit.
    pub fn process_keypress(&mut self, key: Key) -> Result<bool> {
        match key {
            Key::Ctrl(b'Q') => {
                if self.buffer.dirty > 0 && self.quit_times > 0 {
                    self.set_message(&format!(
                        "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_times
                    ));
                    self.quit_times -= 1;
                    return Ok(false);
                }
                return Ok(true);
            }
            Key::Ctrl(b'S') => self.save()?,
            Key::Ctrl(b'F') => self.find()?,
            Key::Ctrl(b'L') | Key::Escape => (),
            _ => self.buffer.process_keypress(key),
        }
        self.quit_times = self.config.quit_times;
        Ok(false)
    }

    /// Reads a line in the message bar. `callback` sees the buffer, the input
    /// so far and the key after every keystroke, including the final one.
    /// Returns `None` if the user pressed Escape.
    pub fn prompt<F>(&mut self, template: &str, mut callback: F) -> Result<Option<String>>
    where
        F: FnMut(&mut Buffer, &str, Key),
    {
        let mut minibuffer = Minibuffer::new();

        loop {
            self.set_message(&minibuffer.prompt(template));
            self.refresh_screen()?;

            let key = self.read_key()?;
            let state = minibuffer.process_keypress(key);
            callback(&mut self.buffer, minibuffer.input(), key);

            match state {
                PromptState::Editing => (),
                PromptState::Submitted => {
                    self.set_message("");
                    return Ok(Some(minibuffer.into_input()));
                }
                PromptState::Cancelled => {
                    self.set_message("");
                    return Ok(None);
                }
            }
        }
    }

    fn save(&mut self) -> Result<()> {
        if self.buffer.filename.is_none() {
            match self.prompt("Save as: {} (ESC to cancel)", |_, _, _| ())? {
                Some(filename) => self.buffer.set_filename(filename),
                None => {
                    self.set_message("Save aborted");
                    return Ok(());
                }
            }
        }

        match self.buffer.save() {
            Ok(len) => self.set_message(&format!("{} bytes written to disk", len)),
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.set_message(&format!("Can't save! I/O error: {}", e));
            }
        }
        Ok(())
    }

    fn find(&mut self) -> Result<()> {
        let saved = self.buffer.viewport();
        let mut search = Search::new();

        let query = self.prompt("Search: {} (Use ESC/Arrows/Enter)", |buffer, query, key| {
            search.update(buffer, query, key)
        })?;

        if query.is_none() {
            self.buffer.restore_viewport(saved);
        }
        Ok(())
    }
}

impl<R: ByteSource, W: Write> Drop for Editor<R, W> {
    fn drop(&mut self) {
        let cleared = self
            .output
            .write_all(b"\x1b[2J\x1b[H")
            .and_then(|()| self.output.flush());
        if let Err(e) = cleared {
            tracing::debug!(error = %e, "failed to clear the screen");
        }
    }
}
