//! Message reporting via JSON on stdout.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use crate::models::{LogLevel, PresetSummary, WorkerMessage};

/// Writes one JSON message per line. Clones share the stdout lock, so lines
/// from different threads never interleave.
#[derive(Clone, Default)]
pub struct Reporter {
    output_lock: Arc<Mutex<()>>,
}

impl Reporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send_log(&self, level: LogLevel, message: &str) {
        self.send(&WorkerMessage::log(level, message));
    }

    pub fn send_error(&self, message: &str) {
        self.send(&WorkerMessage::error(message));
    }

    /// Send the catalog listing.
    pub fn send_presets(&self, presets: Vec<PresetSummary>) {
        self.send(&WorkerMessage::presets(presets));
    }

    /// Send a rendered filter.
    pub fn send_filter(&self, preset: &str, filter: &str) {
        self.send(&WorkerMessage::filter(preset, filter));
    }

    fn send(&self, message: &WorkerMessage) {
        let line = match serde_json::to_string(message) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Failed to serialize message: {}", e);
                return;
            }
        };

        let _guard = self
            .output_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            eprintln!("Failed to write to stdout: {}", e);
        }
    }
}
