//! Notification port

use async_trait::async_trait;
use jokehub_domain::DomainError;
use thiserror::Error;

/// Delivery channels for alerts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Email,
    Sms,
}

impl Channel {
    pub fn as_str(&self) -> &str {
        match self {
            Channel::Email => "email",
            Channel::Sms => "sms",
        }
    }
}

impl std::str::FromStr for Channel {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" => Ok(Channel::Email),
            "sms" => Ok(Channel::Sms),
            other => Err(DomainError::Validation(format!(
                "Invalid channel: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur while dispatching a notification
#[derive(Error, Debug)]
pub enum NotifyError {
    /// Recipient or message failed channel-specific validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The delivery backend reported a failure.
    #[error("Delivery error: {0}")]
    Delivery(String),
}

/// Dispatches a message to a recipient over one channel
#[async_trait]
pub trait Notifier: Send + Sync {
    /// The channel this notifier delivers on
    fn channel(&self) -> Channel;

    /// Deliver `message` to `recipient`
    async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError>;
}
