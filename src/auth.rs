//! Authentication State
//!
//! Session value handed explicitly to pages and API calls.

use crate::models::User;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    token: Option<String>,
    user: Option<User>,
}

impl AuthState {
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Some(token.into()), user: None }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// `Authorization` header value for DRF token auth
    pub fn authorization(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Token {}", t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::user;

    #[test]
    fn test_guest_has_no_header() {
        let auth = AuthState::guest();
        assert!(!auth.is_authenticated());
        assert_eq!(auth.authorization(), None);
    }

    #[test]
    fn test_token_session() {
        let mut auth = AuthState::with_token("abc123");
        assert!(auth.is_authenticated());
        assert_eq!(auth.authorization().as_deref(), Some("Token abc123"));
        auth.set_user(user(3));
        assert_eq!(auth.user().map(|u| u.id), Some(3));
    }
}
