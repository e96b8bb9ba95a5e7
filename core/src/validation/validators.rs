use super::{error_codes, Validator};
use crate::errors::FormEchoError;

// ================================================================================================
// CONTENT LENGTH VALIDATOR
// ================================================================================================

/// **CONTENT LENGTH VALIDATOR**
///
/// **PURPOSE**: Parses a declared `CONTENT_LENGTH` as a base-10 non-negative
/// integer and, when a limit is set, checks it against that limit.
///
/// A length above the limit is reported as `BODY_TOO_LARGE`; a value that is
/// not a non-negative integer is reported as `INVALID_CONTENT_LENGTH`.
/// The default validator has no limit.
#[derive(Debug, Clone, Default)]
pub struct ContentLengthValidator {
    max_size: Option<u64>,
}

impl ContentLengthValidator {
    pub fn new(max_size: u64) -> Self {
        Self {
            max_size: Some(max_size),
        }
    }

    pub fn unlimited() -> Self {
        Self { max_size: None }
    }

    pub fn max_size(&self) -> Option<u64> {
        self.max_size
    }
}

impl Validator for ContentLengthValidator {
    type Input = String;
    type Output = u64;

    fn validate(&self, input: Self::Input) -> Result<Self::Output, FormEchoError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

        // **STEP 1**: Plain decimal digits, optionally signed with '+'
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormEchoError::Validation {
                code: error_codes::INVALID_CONTENT_LENGTH,
                message: format!("Content length {:?} is not a non-negative integer", input),
            });
        }

        // **STEP 2**: Overflowing digit strings are invalid, not "too large".
        let length: u64 = digits.parse().map_err(|e| FormEchoError::Validation {
            code: error_codes::INVALID_CONTENT_LENGTH,
            message: format!("Content length {:?} does not fit: {}", input, e),
        })?;

        // **STEP 3**: Enforce the body limit, if any
        if let Some(max_size) = self.max_size.filter(|&max| length > max) {
            return Err(FormEchoError::Validation {
                code: error_codes::BODY_TOO_LARGE,
                message: format!(
                    "Content length {} exceeds maximum allowed size {}",
                    length, max_size
                ),
            });
        }

        Ok(length)
    }
}
