//! SMS notification adapter

use async_trait::async_trait;
use jokehub_application::{Channel, Notifier, NotifyError};
use regex::Regex;
use std::sync::LazyLock;
use tracing::info;

// E.164: optional +, leading non-zero digit, at most 15 digits total
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("valid phone regex"));

/// Delivers alerts by SMS
///
/// As with email, the SMS gateway itself is a deployment concern; the
/// adapter validates the recipient and logs the delivery.
#[derive(Debug, Default)]
pub struct SmsNotifier;

impl SmsNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    fn channel(&self) -> Channel {
        Channel::Sms
    }

    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
        if recipient.trim().is_empty() {
            return Err(NotifyError::Validation(
                "Recipient cannot be empty".to_string(),
            ));
        }
        if message.trim().is_empty() {
            return Err(NotifyError::Validation(
                "Message cannot be empty".to_string(),
            ));
        }
        if !PHONE.is_match(recipient) {
            return Err(NotifyError::Validation("Invalid phone format".to_string()));
        }

        info!("[SMS] Sending to {recipient}: {message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sends_to_a_valid_number() {
        let notifier = SmsNotifier::new();
        notifier.send("+34600111222", "disk full").await.unwrap();
        notifier.send("34600111222", "disk full").await.unwrap();
        assert_eq!(notifier.channel(), Channel::Sms);
    }

    #[tokio::test]
    async fn rejects_malformed_numbers() {
        let notifier = SmsNotifier::new();
        for bad in ["0600111222", "+0600", "phone", "+34 600 111 222", "+"] {
            assert!(
                matches!(
                    notifier.send(bad, "msg").await,
                    Err(NotifyError::Validation(ref m)) if m.contains("phone format")
                ),
                "accepted {bad:?}"
            );
        }
    }

    #[tokio::test]
    async fn rejects_empty_message() {
        let notifier = SmsNotifier::new();
        assert!(matches!(
            notifier.send("+34600111222", "").await,
            Err(NotifyError::Validation(ref m)) if m.contains("Message")
        ));
    }
}
