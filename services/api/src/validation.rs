//! Input validation utilities

use common::{StoreError, StoreResult};

use crate::models::user::NewUser;

/// Error message for an incomplete signup
pub const MISSING_SIGNUP_FIELDS: &str = "Missing required fields";

/// Error message for an empty chat message
pub const MISSING_MESSAGE: &str = "Message is required";

/// Validate a registration payload: every field must be non-empty
pub fn validate_new_user(new_user: &NewUser) -> StoreResult<()> {
    let fields = [&new_user.name, &new_user.email, &new_user.password];

    if fields.iter().any(|field| field.is_empty()) {
        return Err(StoreError::invalid_input(MISSING_SIGNUP_FIELDS));
    }

    Ok(())
}

/// Validate the text of a chat message
pub fn validate_message(text: &str) -> StoreResult<()> {
    if text.is_empty() {
        return Err(StoreError::invalid_input(MISSING_MESSAGE));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(name: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_complete_registration_is_valid() {
        assert!(validate_new_user(&new_user("Jane", "jane@x.com", "pw1")).is_ok());
    }

    #[test]
    fn test_any_empty_registration_field_is_rejected() {
        for user in [
            new_user("", "jane@x.com", "pw1"),
            new_user("Jane", "", "pw1"),
            new_user("Jane", "jane@x.com", ""),
        ] {
            assert_eq!(
                validate_new_user(&user),
                Err(StoreError::invalid_input(MISSING_SIGNUP_FIELDS))
            );
        }
    }

    #[test]
    fn test_empty_message_is_rejected() {
        assert!(validate_message("").is_err());
        assert!(validate_message(" ").is_ok());
    }
}
