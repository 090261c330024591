//! Domain error types.

use thiserror::Error;

/// A value failed one of the domain's construction-time rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The string is not a well-formed email address.
    #[error("Invalid email address: {value:?}")]
    InvalidEmail { value: String },

    /// The password is shorter than the minimum length.
    #[error("Password must be at least {min_length} characters long")]
    PasswordTooShort { min_length: usize },

    /// The password has no uppercase letter.
    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    /// The password has no lowercase letter.
    #[error("Password must contain at least one lowercase letter")]
    PasswordMissingLowercase,

    /// The password has no digit.
    #[error("Password must contain at least one digit")]
    PasswordMissingDigit,

    /// The password has no character outside `[A-Za-z0-9]`.
    #[error("Password must contain at least one special character")]
    PasswordMissingSpecialCharacter,

    /// The price is zero, negative or NaN.
    #[error("Invalid price: {value} (must be greater than 0)")]
    NonPositivePrice { value: f64 },

    /// The price is infinite.
    #[error("Invalid price: {value} (must be finite)")]
    NonFinitePrice { value: f64 },

    /// The stock level is negative.
    #[error("Invalid stock: {value} (must be greater than or equal to 0)")]
    NegativeStock { value: i64 },
}

impl ValidationError {
    /// Short, stable name of the violated rule, used as a log field and metric label.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::InvalidEmail { .. } => "email_format",
            ValidationError::PasswordTooShort { .. } => "password_length",
            ValidationError::PasswordMissingUppercase => "password_uppercase",
            ValidationError::PasswordMissingLowercase => "password_lowercase",
            ValidationError::PasswordMissingDigit => "password_digit",
            ValidationError::PasswordMissingSpecialCharacter => "password_special_character",
            ValidationError::NonPositivePrice { .. } => "price_positive",
            ValidationError::NonFinitePrice { .. } => "price_finite",
            ValidationError::NegativeStock { .. } => "stock_non_negative",
        }
    }

    /// Records a rejected construction and hands the error back for returning.
    pub(crate) fn reject(self) -> Self {
        tracing::debug!(rule = self.rule(), "value object rejected");
        metrics::counter!("domain_validation_failures_total", "rule" => self.rule()).increment(1);
        self
    }
}

/// Arithmetic on a value object could not produce a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A price was divided by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// An integer operation overflowed.
    #[error("Arithmetic overflow in {operation}")]
    Overflow { operation: &'static str },
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A value object rule was violated.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Value object arithmetic failed.
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// An entity builder was missing a required field.
    #[error("Missing field {field} when building {entity}")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    /// A serialized event payload did not describe a valid event.
    #[error("Invalid event payload: {reason}")]
    InvalidEventPayload { reason: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
