use std::io::{self, Read, Write};

use crate::coord::Size;
use crate::error::{Error, Result};

/// Rows taken by the status bar and the message bar.
pub const BAR_ROWS: usize = 2;

/// A polled byte stream. `Ok(None)` means nothing arrived within the poll
/// window, which is not an error.
pub trait ByteSource {
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Size reported by the kernel, if the source is backed by a terminal.
    fn window_size(&self) -> Option<Size> {
        None
    }
}

impl ByteSource for io::Stdin {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0];
        match self.read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(buf[0])),
            Err(e) if matches!(e.kind(), io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock) => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn window_size(&self) -> Option<Size> {
        ioctl_window_size()
    }
}

/// Asks the kernel first and falls back to reading the cursor position after
/// pushing it into the bottom right corner.
pub fn window_size<R: ByteSource, W: Write>(input: &mut R, output: &mut W) -> Result<Size> {
    if let Some(size) = input.window_size() {
        return Ok(size);
    }
    tracing::debug!("TIOCGWINSZ unavailable, querying cursor position");

    output
        .write_all(b"\x1b[999C\x1b[999B")
        .map_err(Error::Write)?;
    cursor_position(input, output)
}

fn ioctl_window_size() -> Option<Size> {
    // SAFETY: winsize is plain old data and TIOCGWINSZ only writes into it.
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };
    let ret = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &mut ws) };

    if ret == -1 || ws.ws_col == 0 {
        None
    } else {
        Some(Size::new(ws.ws_col as usize, ws.ws_row as usize))
    }
}

fn cursor_position<R: ByteSource, W: Write>(input: &mut R, output: &mut W) -> Result<Size> {
    output.write_all(b"\x1b[6n").map_err(Error::Write)?;
    output.flush().map_err(Error::Write)?;

    let mut reply = Vec::with_capacity(32);
    while reply.len() < 31 {
        match input.read_byte().map_err(Error::Read)? {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }
    parse_cursor_report(&reply).ok_or(Error::WindowSize)
}

/// Parses `ESC [ rows ; cols` (the terminating `R` already stripped).
fn parse_cursor_report(reply: &[u8]) -> Option<Size> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some(Size::new(cols.parse().ok()?, rows.parse().ok()?))
}
