//! # INPUT NORMALIZATION
//!
//! **TRAIT-BASED VALIDATION OF REQUEST METADATA**
//!
//! Validators turn raw request values into typed values or a structured
//! `FormEchoError`. Callers decide the fallback: the request pipeline never
//! aborts on a validation error, it substitutes the documented default and
//! logs the rejection.
//!
//! ## USAGE
//!
//! ```rust
//! use formecho::validation::{ContentLengthValidator, Validator};
//!
//! let validator = ContentLengthValidator::new(1024);
//! assert_eq!(validator.validate("39".to_string()).unwrap(), 39);
//! assert!(validator.validate("-1".to_string()).is_err());
//! ```

use crate::errors::FormEchoError;

pub mod validators;

pub use validators::ContentLengthValidator;

/// **CORE VALIDATOR TRAIT**
///
/// **GUARANTEE**: MUST NOT panic. ALL error conditions MUST return `FormEchoError`.
pub trait Validator {
    /// **INPUT TYPE** - Raw value accepted by this validator
    type Input;

    /// **OUTPUT TYPE** - Normalized value returned on success
    type Output;

    /// **VALIDATION EXECUTION**
    ///
    /// **RETURNS**:
    /// - `Ok(Self::Output)` - Successfully normalized value
    /// - `Err(FormEchoError)` - Rejection with a code from [`error_codes`]
    fn validate(&self, input: Self::Input) -> Result<Self::Output, FormEchoError>;
}

/// **VALIDATION ERROR CODES**
pub mod error_codes {
    pub const INVALID_CONTENT_LENGTH: &str = "FORMECHO_VALIDATION_INVALID_CONTENT_LENGTH";
    pub const BODY_TOO_LARGE: &str = "FORMECHO_VALIDATION_BODY_TOO_LARGE";
    pub const CONFIG_UNREADABLE: &str = "FORMECHO_CONFIG_UNREADABLE";
    pub const CONFIG_INVALID: &str = "FORMECHO_CONFIG_INVALID";
}
