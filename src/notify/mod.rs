mod buffer;
mod log;
#[cfg(feature = "webhook")]
mod webhook;

pub use buffer::BufferedNotifier;
pub use log::LogNotifier;
#[cfg(feature = "webhook")]
pub use webhook::WebhookNotifier;

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of a notice, mirroring the levels admin surfaces render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

/// Summary notification emitted after a bulk action run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    /// Display name of the action that ran.
    pub action: String,
    /// Number of records processed.
    pub processed: usize,
    /// Title-cased record label, singular or plural to match `processed`.
    pub label: String,
    /// Rendered summary line.
    pub text: String,
    pub at: DateTime<Utc>,
    pub details: HashMap<String, serde_json::Value>,
}

impl Notice {
    pub fn success(
        action: impl Into<String>,
        processed: usize,
        label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            severity: Severity::Success,
            action: action.into(),
            processed,
            label: label.into(),
            text: text.into(),
            at: Utc::now(),
            details: HashMap::new(),
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.details.insert(key.into(), json_value);
        }
        self
    }
}

/// Delivery seam for notices.
///
/// The host's request context implements this to surface summaries to the
/// operator who triggered the action.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}
