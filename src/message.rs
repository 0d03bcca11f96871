use std::time::{Duration, Instant};

pub struct Message {
    pub text: String,
    pub timestamp: Instant,
}

impl Message {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            timestamp: Instant::now(),
        }
    }

    pub fn is_visible(&self, timeout: Duration) -> bool {
        !self.text.is_empty() && self.timestamp.elapsed() < timeout
    }
}
