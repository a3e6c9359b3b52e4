//! Email notification adapter

use async_trait::async_trait;
use jokehub_application::{Channel, Notifier, NotifyError};
use jokehub_domain::UserEmail;
use tracing::info;

/// Delivers alerts by email
///
/// The actual mail gateway is a deployment concern; this adapter validates
/// the recipient and emits the delivery through structured logging.
#[derive(Debug, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for EmailNotifier {
    fn channel(&self) -> Channel {
        Channel::Email
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
        if UserEmail::new(recipient).is_err() {
            return Err(NotifyError::Validation("Invalid email format".to_string()));
        }

        info!("[EMAIL] Sending to {recipient}: {message}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sends_to_a_valid_address() {
        let notifier = EmailNotifier::new();
        notifier.send("ops@example.com", "disk full").await.unwrap();
        assert_eq!(notifier.channel(), Channel::Email);
    }

    #[tokio::test]
    async fn rejects_empty_recipient_and_message() {
        let notifier = EmailNotifier::new();
        assert!(matches!(
            notifier.send("", "msg").await,
            Err(NotifyError::Validation(ref m)) if m.contains("Recipient")
        ));
        assert!(matches!(
            notifier.send("ops@example.com", "  ").await,
            Err(NotifyError::Validation(ref m)) if m.contains("Message")
        ));
    }

    #[tokio::test]
    async fn rejects_malformed_addresses() {
        let notifier = EmailNotifier::new();
        for bad in ["plain", "user@domain", "a b@example.com"] {
            assert!(
                matches!(
                    notifier.send(bad, "msg").await,
                    Err(NotifyError::Validation(ref m)) if m.contains("email format")
                ),
                "accepted {bad:?}"
            );
        }
    }
}
