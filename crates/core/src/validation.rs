//! Shared input validation helpers.

use validator::ValidationErrors;

use crate::error::CoreError;

/// Maximum accepted length of an opaque user id.
pub const MAX_USER_ID_LEN: usize = 128;

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}

/// Validate an opaque user id: non-blank and bounded in length.
pub fn validate_user_id(user_id: &str) -> Result<(), CoreError> {
    if user_id.trim().is_empty() {
        return Err(CoreError::Validation("user_id must not be empty".into()));
    }
    if user_id.len() > MAX_USER_ID_LEN {
        return Err(CoreError::Validation(format!(
            "user_id must be at most {MAX_USER_ID_LEN} characters"
        )));
    }
    Ok(())
}
