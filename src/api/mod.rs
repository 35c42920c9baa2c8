//! REST API Client
//!
//! Browser `fetch` bindings to the Foodgram API, organized by domain.

mod query;
mod recipes;
mod session;
mod users;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, Request, RequestInit, RequestMode, Response};

use crate::auth::AuthState;
use crate::config;
use crate::error::ApiError;

// Re-export all public items
pub use query::*;
pub use recipes::*;
pub use session::*;
pub use users::*;

// ========================
// Transport
// ========================

async fn send(method: &str, path: &str, auth: &AuthState, body: Option<String>) -> Result<Response, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = body.as_deref() {
        opts.set_body(&JsValue::from_str(body));
    }

    let url = format!("{}{}", config::api_base(), path);
    let request = Request::new_with_str_and_init(&url, &opts).map_err(ApiError::from_js)?;
    let headers = request.headers();
    headers.set("Accept", "application/json").map_err(ApiError::from_js)?;
    if body.is_some() {
        headers.set("Content-Type", "application/json").map_err(ApiError::from_js)?;
    }
    if let Some(value) = auth.authorization() {
        headers.set("Authorization", &value).map_err(ApiError::from_js)?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Browser("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::network)?
        .dyn_into()
        .map_err(ApiError::from_js)?;

    if response.ok() {
        log::debug!("[Api] {} {} -> {}", method, path, response.status());
        return Ok(response);
    }
    let status = response.status();
    let text = read_text(&response).await.unwrap_or_default();
    log::warn!("[Api] {} {} -> {}", method, path, status);
    Err(ApiError::from_status(status, &text))
}

async fn read_text(response: &Response) -> Result<String, ApiError> {
    let promise = response.text().map_err(ApiError::from_js)?;
    let value = JsFuture::from(promise).await.map_err(ApiError::from_js)?;
    Ok(value.as_string().unwrap_or_default())
}

/// Decoded from text; `#[serde(flatten)]` payloads need `serde_json`
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let text = read_text(&response).await?;
    Ok(serde_json::from_str(&text)?)
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    Ok(serde_json::to_string(body)?)
}

async fn get_json<T: DeserializeOwned>(path: &str, auth: &AuthState) -> Result<T, ApiError> {
    let response = send("GET", path, auth, None).await?;
    decode(response).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, auth: &AuthState, body: &B) -> Result<T, ApiError> {
    let response = send("POST", path, auth, Some(encode(body)?)).await?;
    decode(response).await
}

/// POST where the response body is irrelevant (often 201/204 with no JSON)
async fn post_unit(path: &str, auth: &AuthState, body: Option<String>) -> Result<(), ApiError> {
    send("POST", path, auth, body).await?;
    Ok(())
}

async fn delete(path: &str, auth: &AuthState) -> Result<(), ApiError> {
    send("DELETE", path, auth, None).await?;
    Ok(())
}

async fn get_blob(path: &str, auth: &AuthState) -> Result<(Blob, Option<String>), ApiError> {
    let response = send("GET", path, auth, None).await?;
    let disposition = response.headers().get("Content-Disposition").ok().flatten();
    let promise = response.blob().map_err(ApiError::from_js)?;
    let blob: Blob = JsFuture::from(promise)
        .await
        .map_err(ApiError::from_js)?
        .dyn_into()
        .map_err(ApiError::from_js)?;
    Ok((blob, disposition))
}
