//! Login form model
//!
//! Local-only validation for the email login screen. There is no
//! authentication backend; a valid form simply unlocks navigation to the
//! home screen.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Minimum password length, as stated by the password placeholder
pub const MIN_PASSWORD_LEN: usize = 8;

/// Login form validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    /// Email field is empty
    #[error("Email address is required")]
    EmptyEmail,

    /// Email field does not look like an address
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Password is shorter than the minimum
    #[error("Password must be at least {MIN_PASSWORD_LEN} characters")]
    PasswordTooShort,
}

/// Result type for login operations
pub type Result<T> = std::result::Result<T, LoginError>;

/// The two-field login form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginForm {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

impl LoginForm {
    /// Create a form with the given field values
    pub fn new(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// Validate the form
    ///
    /// Checks the email shape (a non-empty local part and domain around a
    /// single `@`) and the minimum password length.
    pub fn validate(&self) -> Result<()> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(LoginError::EmptyEmail);
        }
        match email.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && domain.contains('.') && !domain.starts_with('.') => {}
            _ => return Err(LoginError::InvalidEmail(email.to_string())),
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(LoginError::PasswordTooShort);
        }
        debug!(email, "login form validated");
        Ok(())
    }
}
