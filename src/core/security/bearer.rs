/// Errors that can occur during bearer-token verification
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingCredentials,

    #[error("Invalid bearer token")]
    InvalidCredentials,
}

/// Validates a request's Authorization header against the configured token.
///
/// The header must match `Bearer {expected_token}` exactly; a missing
/// header, a different scheme, or a wrong token are all rejected.
///
/// # Arguments
///
/// * `authorization` - The raw Authorization header value, if present
/// * `expected_token` - The configured bearer token
///
/// # Returns
///
/// * `Ok(())` - The credentials are valid
/// * `Err(AuthError)` - If verification fails
pub fn verify_bearer(authorization: Option<&str>, expected_token: &str) -> Result<(), AuthError> {
    let header = authorization.ok_or(AuthError::MissingCredentials)?;
    if header == format!("Bearer {expected_token}") {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_token_accepted() {
        assert!(verify_bearer(Some("Bearer secret123"), "secret123").is_ok());
    }

    #[test]
    fn test_missing_header_rejected() {
        assert!(matches!(
            verify_bearer(None, "secret123"),
            Err(AuthError::MissingCredentials)
        ));
    }

    #[test]
    fn test_wrong_token_rejected() {
        assert!(matches!(
            verify_bearer(Some("Bearer wrong"), "secret123"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_wrong_scheme_rejected() {
        assert!(verify_bearer(Some("Basic secret123"), "secret123").is_err());
        assert!(verify_bearer(Some("secret123"), "secret123").is_err());
    }

    #[test]
    fn test_token_with_extra_whitespace_rejected() {
        assert!(verify_bearer(Some("Bearer  secret123"), "secret123").is_err());
        assert!(verify_bearer(Some("Bearer secret123 "), "secret123").is_err());
    }
}
