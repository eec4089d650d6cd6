use tracing::{error, info, warn};

use crate::notify::{Notice, Notifier, Severity};

/// Writes each notice to the `tracing` log stream.
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Warning => {
                warn!(action = %notice.action, processed = notice.processed, "{}", notice.text)
            }
            Severity::Error => {
                error!(action = %notice.action, processed = notice.processed, "{}", notice.text)
            }
            _ => info!(action = %notice.action, processed = notice.processed, "{}", notice.text),
        }
    }
}

impl Default for LogNotifier {
    fn default() -> Self {
        Self::new()
    }
}
