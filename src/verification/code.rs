//! Verification code sampling.

use rand::Rng;
use std::fmt;

/// Number of digits in a verification code.
pub const CODE_LENGTH: usize = 4;

/// A four-digit verification code.
///
/// The display string is rebuilt whenever the digits are sampled, so it
/// never drifts from the digit sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    digits: [u8; CODE_LENGTH],
    text: String,
}

impl Code {
    /// Samples four independent, uniformly distributed decimal digits.
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        for digit in &mut digits {
            *digit = rng.random_range(0..10);
        }
        Self::from_digits(digits)
    }

    /// Builds a code from known digits.
    ///
    /// Digits above nine are reduced modulo ten.
    #[must_use]
    pub fn from_digits(digits: [u8; CODE_LENGTH]) -> Self {
        let digits = digits.map(|d| d % 10);
        let text = digits.iter().map(|d| char::from(b'0' + d)).collect();
        Self { digits, text }
    }

    /// The digits in display order.
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.digits
    }

    /// The concatenated display string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The glyph drawn for the digit at `index`.
    #[must_use]
    pub fn glyph(&self, index: usize) -> char {
        char::from(b'0' + self.digits[index])
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
