//! Notification adapters

pub mod email;
pub mod factory;
pub mod sms;

pub use email::EmailNotifier;
pub use factory::NotifierFactory;
pub use sms::SmsNotifier;
