use std::env;
use std::io;
use std::os::unix::io::AsRawFd;
use std::process;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use tilde::config::Config;
use tilde::editor::{Editor, HELP};
use tilde::raw_mode::RawMode;
use tilde::{logging, Error, Result};

fn main() {
    let config = Config::from_env();
    if let Some(path) = &config.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("tilde: cannot open log file {}: {}", path.display(), e);
        }
    }

    let filename = env::args().nth(1);

    if let Err(e) = run(config, filename.as_deref()) {
        tracing::error!(error = %e, "fatal");
        eprintln!("tilde: {}", e);
        process::exit(1);
    }
}

fn run(config: Config, filename: Option<&str>) -> Result<()> {
    // Dropped after the editor so the screen is cleared before the terminal
    // leaves raw mode.
    let _raw_mode = RawMode::enable(io::stdin().as_raw_fd()).map_err(Error::RawMode)?;

    let resized = Arc::new(AtomicBool::new(false));
    signal_hook::flag::register(signal_hook::consts::SIGWINCH, Arc::clone(&resized))
        .map_err(Error::Signal)?;

    let mut editor = Editor::new(io::stdin(), io::stdout(), config).with_resize_flag(resized);
    editor.update_window_size()?;
    if let Some(filename) = filename {
        editor.open(filename)?;
    }
    editor.set_message(HELP);

    tracing::info!(file = ?filename, "editor started");
    editor.run()
}
