//! Fire-and-forget notification dispatch.
//!
//! A notification must never fail the operation that triggered it: the
//! send runs on a spawned task, makes a small fixed number of immediate
//! attempts, and logs the outcome either way.

use std::sync::Arc;
use std::time::Duration;

use crate::email::{EmailConfig, EmailDelivery};

/// Attempts per notification before giving up.
const MAX_SEND_ATTEMPTS: u32 = 3;

/// Pause between attempts.
const RETRY_PAUSE: Duration = Duration::from_secs(1);

/// Dispatches notification e-mails without blocking or failing callers.
///
/// Constructed once at startup and shared via `Arc`. When SMTP is not
/// configured, every send is skipped with a debug log.
pub struct Notifier {
    delivery: Option<Arc<EmailDelivery>>,
}

impl Notifier {
    /// Build a notifier from optional SMTP configuration.
    pub fn new(config: Option<EmailConfig>) -> Self {
        Self {
            delivery: config.map(|c| Arc::new(EmailDelivery::new(c))),
        }
    }

    /// Whether outbound e-mail is configured.
    pub fn is_enabled(&self) -> bool {
        self.delivery.is_some()
    }

    /// Queue a notification e-mail and return immediately.
    ///
    /// The spawned task retries up to [`MAX_SEND_ATTEMPTS`] times, then
    /// logs the failure and drops the message.
    pub fn send_fire_and_forget(&self, to: &str, subject: String, body: String) {
        let Some(delivery) = &self.delivery else {
            tracing::debug!(to, subject, "Email not configured; skipping notification");
            return;
        };

        let delivery = Arc::clone(delivery);
        let to = to.to_string();
        tokio::spawn(async move {
            for attempt in 1..=MAX_SEND_ATTEMPTS {
                match delivery.send(&to, &subject, &body).await {
                    Ok(()) => return,
                    Err(err) if attempt < MAX_SEND_ATTEMPTS => {
                        tracing::warn!(
                            to,
                            attempt,
                            error = %err,
                            "Notification send failed; retrying"
                        );
                        tokio::time::sleep(RETRY_PAUSE).await;
                    }
                    Err(err) => {
                        tracing::error!(
                            to,
                            attempts = MAX_SEND_ATTEMPTS,
                            error = %err,
                            "Notification dropped after repeated failures"
                        );
                    }
                }
            }
        });
    }
}
