// Security module for request authentication
//
// This module provides bearer-token verification used by the HTTP
// transport's authentication middleware.

pub mod bearer;

pub use bearer::{AuthError, verify_bearer};
