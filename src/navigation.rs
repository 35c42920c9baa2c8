//! Header Navigation
//!
//! Static link list; links flagged `auth` are hidden from guests.

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub title: &'static str,
    pub route: Route,
    pub auth: bool,
}

pub const NAVIGATION: &[NavLink] = &[
    NavLink { title: "Recipes", route: Route::Recipes, auth: false },
    NavLink { title: "Subscriptions", route: Route::Subscriptions, auth: true },
    NavLink { title: "Favourites", route: Route::Favorites, auth: true },
    NavLink { title: "Shopping list", route: Route::Cart, auth: true },
];

pub fn visible_links(authenticated: bool) -> Vec<NavLink> {
    NAVIGATION
        .iter()
        .filter(|link| authenticated || !link.auth)
        .copied()
        .collect()
}
