use std::io;
use std::os::unix::io::RawFd;

use termios::*;

/// Guard holding a terminal in raw mode. The saved attributes come back when
/// it is dropped.
pub struct RawMode {
    fd: RawFd,
    saved: Termios,
}

impl RawMode {
    /// Reads on `fd` return after at most 100ms even when no byte is available.
    pub fn enable(fd: RawFd) -> io::Result<Self> {
        let saved = Termios::from_fd(fd)?;
        let mut raw = saved;

        raw.c_iflag &= !(BRKINT | ICRNL | INPCK | ISTRIP | IXON);
        raw.c_oflag &= !OPOST;
        raw.c_cflag |= CS8;
        raw.c_lflag &= !(ECHO | ICANON | IEXTEN | ISIG);
        raw.c_cc[VMIN] = 0;
        raw.c_cc[VTIME] = 1;
        tcsetattr(fd, TCSAFLUSH, &raw)?;

        tracing::debug!(fd, "raw mode on");
        Ok(Self { fd, saved })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        match tcsetattr(self.fd, TCSAFLUSH, &self.saved) {
            Ok(()) => tracing::debug!(fd = self.fd, "raw mode off"),
            Err(e) => tracing::error!(error = %e, "failed to restore terminal attributes"),
        }
    }
}
