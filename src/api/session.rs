//! Token Session Endpoints

use super::{get_me, post_json, post_unit};
use crate::auth::AuthState;
use crate::error::ApiError;
use crate::models::{AuthToken, Credentials};

pub async fn sign_in(credentials: &Credentials) -> Result<AuthState, ApiError> {
    let token: AuthToken = post_json("/auth/token/login/", &AuthState::guest(), credentials).await?;
    let mut auth = AuthState::with_token(token.auth_token);
    // the token alone is a valid session; the profile is best-effort
    match get_me(&auth).await {
        Ok(user) => auth.set_user(user),
        Err(e) => log::warn!("[Api] signed in but could not load profile: {}", e),
    }
    Ok(auth)
}

pub async fn sign_out(auth: &AuthState) -> Result<(), ApiError> {
    post_unit("/auth/token/logout/", auth, None).await
}
