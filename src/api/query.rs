//! Query Strings
//!
//! Filter/paging parameters for list endpoints.

use serde::{Serialize, Serializer};

use crate::config;
use crate::error::ApiError;

/// The backend filters take 0/1 rather than true/false
fn as_flag<S: Serializer>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(flag) => serializer.serialize_u8(u8::from(*flag)),
        None => serializer.serialize_none(),
    }
}

/// `?a=1&b=2` in field order
fn render<Q: Serialize>(query: &Q) -> Result<String, ApiError> {
    let encoded = serde_urlencoded::to_string(query)?;
    Ok(if encoded.is_empty() { encoded } else { format!("?{}", encoded) })
}

/// Parameters for `GET /recipes/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_flag")]
    pub is_in_shopping_cart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_flag")]
    pub is_favorited: Option<bool>,
}

impl RecipeQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            limit: config::PAGE_LIMIT,
            is_in_shopping_cart: None,
            is_favorited: None,
        }
    }

    /// Everything in the shopping cart, in one page
    pub fn cart() -> Self {
        Self {
            limit: config::CART_LIMIT,
            is_in_shopping_cart: Some(true),
            ..Self::page(1)
        }
    }

    pub fn favorites(page: u32) -> Self {
        Self { is_favorited: Some(true), ..Self::page(page) }
    }

    pub fn to_query(&self) -> Result<String, ApiError> {
        render(self)
    }
}

/// Parameters for `GET /users/subscriptions/`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionQuery {
    pub page: u32,
    pub limit: u32,
    pub recipes_limit: u32,
}

impl SubscriptionQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            limit: config::PAGE_LIMIT,
            recipes_limit: config::SUBSCRIPTION_RECIPES_LIMIT,
        }
    }

    pub fn to_query(&self) -> Result<String, ApiError> {
        render(self)
    }
}
