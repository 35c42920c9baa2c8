//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use serde::{Deserialize, Serialize};

/// Anything held by a list-state, addressed by its server id
pub trait Identified {
    fn id(&self) -> u32;
}

/// User data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub is_subscribed: bool,
}

impl User {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() { self.username.clone() } else { full.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub slug: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: u32,
    pub name: String,
    pub measurement_unit: String,
    pub amount: u32,
}

/// Recipe data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub text: String,
    pub cooking_time: u32,
    pub author: User,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
    #[serde(default)]
    pub is_favorited: bool,
    #[serde(default)]
    pub is_in_shopping_cart: bool,
}

impl Identified for Recipe {
    fn id(&self) -> u32 {
        self.id
    }
}

/// Short recipe form nested in subscription entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbridgedRecipe {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    pub cooking_time: u32,
}

/// A followed author with a preview of their recipes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    #[serde(flatten)]
    pub user: User,
    #[serde(default)]
    pub recipes: Vec<AbridgedRecipe>,
    #[serde(default)]
    pub recipes_count: u32,
}

impl Identified for Subscription {
    fn id(&self) -> u32 {
        self.user.id
    }
}

/// Paged response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
    pub auth_token: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignUpData {
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_recipe_page() {
        let body = r##"{
            "count": 2,
            "next": null,
            "previous": null,
            "results": [
                {
                    "id": 7,
                    "name": "Borscht",
                    "image": "http://testserver/media/7.png",
                    "text": "Beets.",
                    "cooking_time": 90,
                    "author": {"id": 1, "email": "a@b.c", "username": "cook", "first_name": "", "last_name": ""},
                    "tags": [{"id": 1, "name": "Lunch", "color": "#E26C2D", "slug": "lunch"}],
                    "ingredients": [{"id": 3, "name": "beet", "measurement_unit": "g", "amount": 300}],
                    "is_favorited": false,
                    "is_in_shopping_cart": true
                },
                {
                    "id": 8,
                    "name": "Toast",
                    "cooking_time": 2,
                    "author": {"id": 2, "email": "x@y.z", "username": "baker", "first_name": "Anna", "last_name": "K"}
                }
            ]
        }"##;
        let page: Page<Recipe> = serde_json::from_str(body).unwrap();
        assert_eq!(page.count, 2);
        assert_eq!(page.results.len(), 2);
        assert!(page.results[0].is_in_shopping_cart);
        assert_eq!(page.results[0].ingredients[0].amount, 300);
        assert!(page.results[1].tags.is_empty());
        assert!(!page.results[1].is_favorited);
        assert_eq!(page.results[0].author.display_name(), "cook");
        assert_eq!(page.results[1].author.display_name(), "Anna K");
    }

    #[test]
    fn test_decode_subscription_flattens_user() {
        let body = r#"{
            "id": 4, "email": "chef@example.com", "username": "chef",
            "first_name": "Gordon", "last_name": "R", "is_subscribed": true,
            "recipes": [{"id": 1, "name": "Soup", "image": null, "cooking_time": 30}],
            "recipes_count": 12
        }"#;
        let sub: Subscription = serde_json::from_str(body).unwrap();
        assert_eq!(sub.id(), 4);
        assert!(sub.user.is_subscribed);
        assert_eq!(sub.recipes.len(), 1);
        assert_eq!(sub.recipes_count, 12);
    }
}
