//! Calculate LCM use case

use jokehub_domain::DomainError;

/// Use case computing the least common multiple of a list of numbers
#[derive(Debug, Default)]
pub struct CalculateLcm;

impl CalculateLcm {
    pub fn new() -> Self {
        Self
    }

    /// Compute the LCM of `numbers`
    ///
    /// All numbers must be positive; the list must be non-empty. Overflow
    /// is reported as a validation error rather than wrapping.
    pub fn execute(&self, numbers: &[u64]) -> Result<u64, DomainError> {
        if numbers.is_empty() {
            return Err(DomainError::Validation(
                "Numbers array cannot be empty".to_string(),
            ));
        }
        if numbers.contains(&0) {
            return Err(DomainError::Validation(
                "Numbers must be positive integers".to_string(),
            ));
        }

        numbers[1..]
            .iter()
            .try_fold(numbers[0], |acc, &n| Self::lcm(acc, n))
    }

    fn lcm(a: u64, b: u64) -> Result<u64, DomainError> {
        (a / Self::gcd(a, b)).checked_mul(b).ok_or_else(|| {
            DomainError::Validation("LCM does not fit in 64 bits".to_string())
        })
    }

    fn gcd(mut a: u64, mut b: u64) -> u64 {
        while b != 0 {
            (a, b) = (b, a % b);
        }
        a
    }
}
