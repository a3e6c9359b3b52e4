//! Joke entity

use crate::core::error::DomainError;
use crate::joke::value_objects::{CategoryId, JokeId, JokeText};
use crate::user::value_objects::UserId;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A joke authored by a user and filed under a category
///
/// Construction goes through [`Joke::new`], which validates every field via
/// its value object. Mutation is modelled as replacement: [`Joke::with_text`]
/// returns a new entity with a fresh `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Joke {
    pub id: JokeId,
    pub text: JokeText,
    pub user_id: UserId,
    pub category_id: CategoryId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Joke {
    /// Create a joke from raw parts, validating each field
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        user_id: impl Into<String>,
        category_id: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: JokeId::new(id)?,
            text: JokeText::new(text)?,
            user_id: UserId::new(user_id)?,
            category_id: CategoryId::new(category_id)?,
            created_at,
            updated_at,
        })
    }

    /// Return a copy with new text and a refreshed `updated_at`
    pub fn with_text(&self, new_text: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            id: self.id.clone(),
            text: JokeText::new(new_text)?,
            user_id: self.user_id.clone(),
            category_id: self.category_id.clone(),
            created_at: self.created_at,
            updated_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Joke {
        let now = Utc::now();
        Joke::new("joke-1", "Why did the crab never share?", "user-1", "cat-1", now, now)
            .unwrap()
    }

    #[test]
    fn create_validates_all_fields() {
        let now = Utc::now();
        assert!(Joke::new("", "text", "u", "c", now, now).is_err());
        assert!(Joke::new("id", "  ", "u", "c", now, now).is_err());
        assert!(Joke::new("id", "text", "", "c", now, now).is_err());
        assert!(Joke::new("id", "text", "u", "", now, now).is_err());
    }

    #[test]
    fn with_text_replaces_text_and_bumps_updated_at() {
        let joke = sample();
        let updated = joke.with_text("Because he was a little shellfish").unwrap();

        assert_eq!(updated.id, joke.id);
        assert_eq!(updated.user_id, joke.user_id);
        assert_eq!(updated.created_at, joke.created_at);
        assert_eq!(updated.text.as_str(), "Because he was a little shellfish");
        assert!(updated.updated_at >= joke.updated_at);
        // original untouched
        assert_eq!(joke.text.as_str(), "Why did the crab never share?");
    }

    #[test]
    fn with_text_rejects_empty() {
        assert!(sample().with_text("   ").is_err());
    }
}
