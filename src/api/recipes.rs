//! Recipe Endpoints
//!
//! Listing, shopping cart, favourites and the shopping list download.

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Blob, HtmlAnchorElement, Url};

use super::{delete, get_blob, get_json, post_unit, RecipeQuery};
use crate::auth::AuthState;
use crate::config;
use crate::error::ApiError;
use crate::models::{Page, Recipe};

pub async fn get_recipes(auth: &AuthState, query: &RecipeQuery) -> Result<Page<Recipe>, ApiError> {
    get_json(&format!("/recipes/{}", query.to_query()?), auth).await
}

/// Number of recipes currently in the cart
pub async fn cart_count(auth: &AuthState) -> Result<u32, ApiError> {
    let query = RecipeQuery { limit: 1, ..RecipeQuery::cart() };
    Ok(get_recipes(auth, &query).await?.count)
}

pub async fn add_to_cart(auth: &AuthState, recipe_id: u32) -> Result<(), ApiError> {
    post_unit(&format!("/recipes/{}/shopping_cart/", recipe_id), auth, None).await
}

pub async fn remove_from_cart(auth: &AuthState, recipe_id: u32) -> Result<(), ApiError> {
    delete(&format!("/recipes/{}/shopping_cart/", recipe_id), auth).await
}

pub async fn add_to_favorites(auth: &AuthState, recipe_id: u32) -> Result<(), ApiError> {
    post_unit(&format!("/recipes/{}/favorite/", recipe_id), auth, None).await
}

pub async fn remove_from_favorites(auth: &AuthState, recipe_id: u32) -> Result<(), ApiError> {
    delete(&format!("/recipes/{}/favorite/", recipe_id), auth).await
}

/// Fetch the generated shopping list and hand it to the browser as a download
pub async fn download_file(auth: &AuthState) -> Result<(), ApiError> {
    let (blob, disposition) = get_blob("/recipes/download_shopping_cart/", auth).await?;
    let filename = disposition
        .as_deref()
        .and_then(filename_from_disposition)
        .unwrap_or_else(|| config::SHOPPING_LIST_FILENAME.to_string());
    save_blob(&blob, &filename).await
}

/// Object URLs stay alive this long after the click
const REVOKE_DELAY_MS: u32 = 1_000;

async fn save_blob(blob: &Blob, filename: &str) -> Result<(), ApiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("no document".to_string()))?;
    let body = document.body().ok_or_else(|| ApiError::Browser("no body".to_string()))?;
    let url = Url::create_object_url_with_blob(blob).map_err(ApiError::from_js)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(ApiError::from_js)?
        .dyn_into()
        .map_err(|el| ApiError::from_js(el.into()))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(ApiError::from_js)?;
    anchor.click();
    anchor.remove();

    TimeoutFuture::new(REVOKE_DELAY_MS).await;
    Url::revoke_object_url(&url).map_err(ApiError::from_js)?;
    log::info!("[Api] saved shopping list as {}", filename);
    Ok(())
}

/// `attachment; filename="list.txt"` -> `list.txt`
pub fn filename_from_disposition(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|part| part.strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filename_from_disposition() {
        assert_eq!(
            filename_from_disposition(r#"attachment; filename="shopping_list.txt""#).as_deref(),
            Some("shopping_list.txt")
        );
        assert_eq!(filename_from_disposition("attachment; filename=list.pdf").as_deref(), Some("list.pdf"));
        assert_eq!(filename_from_disposition("inline"), None);
        assert_eq!(filename_from_disposition(r#"attachment; filename="""#), None);
    }
}
