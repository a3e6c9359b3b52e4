//! PairedJoke entity

use crate::core::error::DomainError;
use crate::joke::value_objects::JokeText;
use serde::Serialize;

/// The result of pairing one joke from each upstream source (Value Object)
///
/// Immutable triple of validated joke texts. Serializes to the wire shape
/// `{ "chuck": ..., "dad": ..., "combined": ... }` expected by callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairedJoke {
    pub chuck: JokeText,
    pub dad: JokeText,
    pub combined: JokeText,
}

impl PairedJoke {
    /// Assemble a pairing from already-validated texts
    pub fn new(chuck: JokeText, dad: JokeText, combined: JokeText) -> Self {
        Self { chuck, dad, combined }
    }

    /// Validating factory over raw strings
    ///
    /// Any empty or whitespace-only part fails the whole construction.
    pub fn from_parts(
        chuck: impl Into<String>,
        dad: impl Into<String>,
        combined: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            chuck: JokeText::new(chuck)?,
            dad: JokeText::new(dad)?,
            combined: JokeText::new(combined)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_parts_builds_validated_triple() {
        let paired = PairedJoke::from_parts("chuck joke", "dad joke", "combined joke").unwrap();
        assert_eq!(paired.chuck.as_str(), "chuck joke");
        assert_eq!(paired.dad.as_str(), "dad joke");
        assert_eq!(paired.combined.as_str(), "combined joke");
    }

    #[test]
    fn from_parts_rejects_any_empty_part() {
        assert!(PairedJoke::from_parts("", "dad", "combined").is_err());
        assert!(PairedJoke::from_parts("chuck", "   ", "combined").is_err());
        assert!(PairedJoke::from_parts("chuck", "dad", "").is_err());
    }

    #[test]
    fn serializes_to_wire_shape() {
        let paired = PairedJoke::from_parts("a", "b", "c").unwrap();
        let json = serde_json::to_value(&paired).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "chuck": "a", "dad": "b", "combined": "c" })
        );
    }
}
