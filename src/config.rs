use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable naming the file that receives log output.
pub const LOG_ENV: &str = "TILDE_LOG";

#[derive(Clone, Debug)]
pub struct Config {
    /// How many extra Ctrl-Q presses it takes to drop unsaved changes.
    pub quit_times: usize,
    pub message_timeout: Duration,
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quit_times: 3,
            message_timeout: Duration::from_secs(5),
            log_file: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            log_file: env::var_os(LOG_ENV)
                .filter(|val| !val.is_empty())
                .map(PathBuf::from),
            ..Self::default()
        }
    }
}
