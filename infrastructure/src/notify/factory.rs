//! Notifier selection

use super::email::EmailNotifier;
use super::sms::SmsNotifier;
use jokehub_application::{Channel, Notifier};
use std::sync::Arc;

/// Builds the notifier adapter for a channel
pub struct NotifierFactory;

impl NotifierFactory {
    pub fn create(channel: Channel) -> Arc<dyn Notifier> {
        match channel {
            Channel::Email => Arc::new(EmailNotifier::new()),
            Channel::Sms => Arc::new(SmsNotifier::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_the_matching_adapter() {
        assert_eq!(
            NotifierFactory::create(Channel::Email).channel(),
            Channel::Email
        );
        assert_eq!(NotifierFactory::create(Channel::Sms).channel(), Channel::Sms);
    }
}
