//! Send Alert use case

use crate::ports::notifier::{Notifier, NotifyError};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while sending an alert
#[derive(Error, Debug)]
pub enum SendAlertError {
    #[error(transparent)]
    Notify(#[from] NotifyError),
}

/// Use case dispatching an alert through the injected notifier
pub struct SendAlert {
    notifier: Arc<dyn Notifier>,
}

impl SendAlert {
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    pub async fn execute(&self, recipient: &str, message: &str) -> Result<(), SendAlertError> {
        self.notifier.send(recipient, message).await?;
        info!(channel = %self.notifier.channel(), "Alert dispatched");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::notifier::Channel;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct RecordingNotifier {
        sent: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        fn channel(&self) -> Channel {
            Channel::Email
        }

        async fn send(&self, recipient: &str, message: &str) -> Result<(), NotifyError> {
            if recipient.is_empty() {
                return Err(NotifyError::Validation(
                    "Recipient cannot be empty".to_string(),
                ));
            }
            self.sent
                .lock()
                .unwrap()
                .push((recipient.to_string(), message.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn delegates_to_the_notifier() {
        let notifier = Arc::new(RecordingNotifier {
            sent: Mutex::new(Vec::new()),
        });
        let use_case = SendAlert::new(Arc::clone(&notifier) as Arc<dyn Notifier>);

        use_case.execute("ops@example.com", "disk full").await.unwrap();

        let sent = notifier.sent.lock().unwrap();
        assert_eq!(
            sent.as_slice(),
            &[("ops@example.com".to_string(), "disk full".to_string())]
        );
    }

    #[tokio::test]
    async fn notifier_errors_propagate() {
        let notifier = Arc::new(RecordingNotifier {
            sent: Mutex::new(Vec::new()),
        });
        let use_case = SendAlert::new(notifier as Arc<dyn Notifier>);

        let err = use_case.execute("", "disk full").await.unwrap_err();
        assert!(matches!(err, SendAlertError::Notify(NotifyError::Validation(_))));
    }
}
