use tracing::warn;

use crate::notify::{Notice, Notifier};

/// POSTs each notice as JSON to a configured webhook URL.
///
/// Delivery failures are logged and swallowed: by the time a notice exists
/// the action has already completed, so a notification problem must not
/// surface as an action failure.
pub struct WebhookNotifier {
    url: String,
    client: reqwest::blocking::Client,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl Notifier for WebhookNotifier {
    fn notify(&mut self, notice: Notice) {
        match self.client.post(&self.url).json(&notice).send() {
            Ok(response) => {
                if !response.status().is_success() {
                    warn!(status = %response.status(), url = %self.url, "webhook rejected notice");
                }
            }
            Err(err) => warn!(error = %err, url = %self.url, "failed to deliver notice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Notice;

    #[test]
    fn test_posts_notice_as_json() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/hooks/admin")
            .match_header("content-type", "application/json")
            .with_status(200)
            .create();

        let mut notifier = WebhookNotifier::new(format!("{}/hooks/admin", server.url()));
        notifier.notify(Notice::success(
            "archive",
            2,
            "Invoices",
            "Called archive for 2 Invoices.",
        ));

        mock.assert();
    }

    #[test]
    fn test_delivery_failure_is_swallowed() {
        // Nothing listens on the discard port; notify must still return.
        let mut notifier = WebhookNotifier::new("http://127.0.0.1:9/unreachable");
        notifier.notify(Notice::success(
            "archive",
            1,
            "Invoice",
            "Called archive for 1 Invoice.",
        ));
    }
}
