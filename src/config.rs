//! Client Configuration
//!
//! Build-time settings and paging constants.

/// API root used when `FOODGRAM_API_URL` is not set at build time
const DEFAULT_API_URL: &str = "/api";

/// Page size for paged lists (matches the backend paginator)
pub const PAGE_LIMIT: u32 = 6;

/// The cart page fetches everything in one request
pub const CART_LIMIT: u32 = 999;

/// Recipes shown per followed author on the subscriptions page
pub const SUBSCRIPTION_RECIPES_LIMIT: u32 = 3;

/// File name offered for the downloaded shopping list
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

/// How long a success banner stays on screen
pub const FLASH_TIMEOUT_MS: u32 = 3_000;

/// Base URL of the REST API, without a trailing slash
pub fn api_base() -> &'static str {
    normalize_base(option_env!("FOODGRAM_API_URL").unwrap_or(DEFAULT_API_URL))
}

fn normalize_base(raw: &str) -> &str {
    let trimmed = raw.trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_URL } else { trimmed }
}
