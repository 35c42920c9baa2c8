//! User Endpoints
//!
//! Registration, password change and subscriptions.

use super::{delete, encode, get_json, post_json, post_unit, SubscriptionQuery};
use crate::auth::AuthState;
use crate::error::ApiError;
use crate::models::{Page, PasswordChange, SignUpData, Subscription, User};

pub async fn get_me(auth: &AuthState) -> Result<User, ApiError> {
    get_json("/users/me/", auth).await
}

pub async fn get_subscriptions(auth: &AuthState, query: &SubscriptionQuery) -> Result<Page<Subscription>, ApiError> {
    get_json(&format!("/users/subscriptions/{}", query.to_query()?), auth).await
}

pub async fn subscribe(auth: &AuthState, user_id: u32) -> Result<(), ApiError> {
    post_unit(&format!("/users/{}/subscribe/", user_id), auth, None).await
}

pub async fn unsubscribe(auth: &AuthState, user_id: u32) -> Result<(), ApiError> {
    delete(&format!("/users/{}/subscribe/", user_id), auth).await
}

pub async fn sign_up(data: &SignUpData) -> Result<User, ApiError> {
    post_json("/users/", &AuthState::guest(), data).await
}

pub async fn change_password(auth: &AuthState, data: &PasswordChange) -> Result<(), ApiError> {
    post_unit("/users/set_password/", auth, Some(encode(data)?)).await
}
