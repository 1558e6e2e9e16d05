//! Best-effort outbound e-mail for the booking portal.
//!
//! - [`email`] — SMTP configuration and transport via `lettre`.
//! - [`messages`] — subject/body builders for the portal's e-mails.
//! - [`notifier`] — fire-and-forget dispatch: a failed notification is
//!   logged and retried a couple of times, never surfaced to the
//!   operation that triggered it.

pub mod email;
pub mod messages;
pub mod notifier;

pub use email::{EmailConfig, EmailDelivery, EmailError};
pub use notifier::Notifier;
