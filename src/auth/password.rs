use crate::error::ValidationError;

pub const MIN_PASSWORD_CHARS: usize = 8;

/// Registration precondition: both entries agree, then the password is long
/// enough. Length is counted in characters, not bytes.
pub fn check_new_password(password: &str, confirmed: &str) -> Result<(), ValidationError> {
    if password != confirmed {
        return Err(ValidationError::PasswordMismatch);
    }

    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(ValidationError::WeakPassword {
            min: MIN_PASSWORD_CHARS,
        });
    }

    Ok(())
}
