use crate::Generator;
use slink_core::shortcode::{MAX_LENGTH, MIN_LENGTH};
use slink_core::ShortCode;
use thiserror::Error;

pub const DEFAULT_LENGTH: usize = 4;

#[derive(Debug, Clone, Error)]
pub enum GeneratorError {
    #[error("code length must be between {min} and {max}, got {0}", min = MIN_LENGTH, max = MAX_LENGTH)]
    InvalidLength(usize),
}

/// Generates random base58 short codes of a fixed length.
///
/// Base58 leaves out `0`, `O`, `I` and `l`, so codes stay readable when
/// copied by hand.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    length: usize,
}

impl RandomGenerator {
    pub fn new(length: usize) -> Result<Self, GeneratorError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(GeneratorError::InvalidLength(length));
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
        }
    }
}

impl Generator for RandomGenerator {
    fn generate(&self) -> ShortCode {
        // 32 random bytes always encode to at least 32 base58 characters.
        let bytes: [u8; 32] = rand::random();
        let encoded = bs58::encode(bytes).into_string();
        let code: String = encoded.chars().take(self.length).collect();
        ShortCode::new_unchecked(code)
    }
}
