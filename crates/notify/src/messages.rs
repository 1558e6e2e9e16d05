//! Subject and body builders for the portal's notification e-mails.
//!
//! Kept as plain functions so handlers can compose a message without
//! touching the transport, and tests can check content without SMTP.

use gasbook_core::booking::STATUS_APPROVED;
use gasbook_core::types::DbId;

/// Signature line appended to every outbound e-mail.
const SIGNATURE: &str = "Thank you for using our service.\n\nRegards,\nGas Agency Team";

/// Confirmation sent when a booking request is received.
pub fn booking_confirmation(user_name: &str, booking_id: DbId) -> (String, String) {
    let subject = "Gas Cylinder Booking Confirmation".to_string();
    let body = format!(
        "Dear {user_name},\n\n\
         Your gas cylinder booking (ID: {booking_id}) has been received and is being processed.\n\n\
         You will receive another email once your booking is approved.\n\n\
         {SIGNATURE}"
    );
    (subject, body)
}

/// Update sent when an admin approves, rejects, or delivers a booking.
pub fn booking_status_update(
    user_name: &str,
    booking_id: DbId,
    status: &str,
) -> (String, String) {
    let subject = format!("Gas Cylinder Booking {}", capitalize(status));
    let follow_up = if status == STATUS_APPROVED {
        "Your cylinder will be delivered soon. Please keep the payment ready as per your \
         selected payment method."
    } else {
        "If you have any questions, please contact our customer support."
    };
    let body = format!(
        "Dear {user_name},\n\n\
         Your gas cylinder booking (ID: {booking_id}) has been {status}.\n\n\
         {follow_up}\n\n\
         {SIGNATURE}"
    );
    (subject, body)
}

/// Balance notice sent after an administrative allocation change.
pub fn account_balance(user_name: &str, cylinders_remaining: i32) -> (String, String) {
    let subject = "Gas Cylinder Account Balance".to_string();
    let body = format!(
        "Dear {user_name},\n\n\
         This is to inform you that you have {cylinders_remaining} gas cylinders remaining \
         in your account for this year.\n\n\
         {SIGNATURE}"
    );
    (subject, body)
}

/// Uppercase the first character of a status word for a subject line.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gasbook_core::booking::{STATUS_DELIVERED, STATUS_REJECTED};

    #[test]
    fn confirmation_names_the_booking() {
        let (subject, body) = booking_confirmation("Asha", 42);
        assert_eq!(subject, "Gas Cylinder Booking Confirmation");
        assert!(body.contains("Dear Asha"));
        assert!(body.contains("(ID: 42)"));
    }

    #[test]
    fn approved_update_mentions_delivery_and_payment() {
        let (subject, body) = booking_status_update("Asha", 42, STATUS_APPROVED);
        assert_eq!(subject, "Gas Cylinder Booking Approved");
        assert!(body.contains("has been approved"));
        assert!(body.contains("keep the payment ready"));
    }

    #[test]
    fn rejected_update_points_to_support() {
        let (subject, body) = booking_status_update("Asha", 42, STATUS_REJECTED);
        assert_eq!(subject, "Gas Cylinder Booking Rejected");
        assert!(body.contains("has been rejected"));
        assert!(body.contains("customer support"));
    }

    #[test]
    fn delivered_update_capitalizes_subject() {
        let (subject, _) = booking_status_update("Asha", 42, STATUS_DELIVERED);
        assert_eq!(subject, "Gas Cylinder Booking Delivered");
    }

    #[test]
    fn balance_notice_states_the_count() {
        let (_, body) = account_balance("Asha", 3);
        assert!(body.contains("3 gas cylinders remaining"));
    }
}
