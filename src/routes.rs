//! Hash Routing
//!
//! Maps `#/path` locations to pages.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Recipes,
    Favorites,
    Cart,
    Subscriptions,
    ChangePassword,
    SignUp,
    SignIn,
    NotFound,
}

impl Route {
    /// Parse `window.location.hash` (`#/cart`, `#/cart/`, `#cart`)
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let path = path.split(['?', '#']).next().unwrap_or_default();
        match path {
            "" | "recipes" => Route::Recipes,
            "favorites" => Route::Favorites,
            "cart" => Route::Cart,
            "subscriptions" => Route::Subscriptions,
            "change-password" => Route::ChangePassword,
            "signup" => Route::SignUp,
            "signin" => Route::SignIn,
            _ => Route::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Recipes => "/recipes",
            Route::Favorites => "/favorites",
            Route::Cart => "/cart",
            Route::Subscriptions => "/subscriptions",
            Route::ChangePassword => "/change-password",
            Route::SignUp => "/signup",
            Route::SignIn => "/signin",
            Route::NotFound => "/not-found",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.path())
    }

    /// Pages that only make sense with a session
    pub fn requires_auth(self) -> bool {
        matches!(self, Route::Favorites | Route::Cart | Route::Subscriptions | Route::ChangePassword)
    }
}

/// Point the browser at `route`; the hashchange listener does the rest
pub fn navigate(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.location().set_hash(route.path()) {
        log::error!("[Router] failed to navigate to {}: {:?}", route.path(), e);
    }
}

/// Route for the current location
pub fn current() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Recipes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash() {
        assert_eq!(Route::from_hash(""), Route::Recipes);
        assert_eq!(Route::from_hash("#/"), Route::Recipes);
        assert_eq!(Route::from_hash("#/cart"), Route::Cart);
        assert_eq!(Route::from_hash("#/subscriptions/"), Route::Subscriptions);
        assert_eq!(Route::from_hash("#signup"), Route::SignUp);
        assert_eq!(Route::from_hash("#/favorites?page=2"), Route::Favorites);
        assert_eq!(Route::from_hash("#/recipes/create"), Route::NotFound);
    }

    #[test]
    fn test_paths_round_trip() {
        for route in [Route::Recipes, Route::Favorites, Route::Cart, Route::Subscriptions, Route::ChangePassword, Route::SignUp, Route::SignIn] {
            assert_eq!(Route::from_hash(&route.href()), route);
        }
    }

    #[test]
    fn test_requires_auth() {
        assert!(Route::Cart.requires_auth());
        assert!(!Route::Recipes.requires_auth());
        assert!(!Route::SignUp.requires_auth());
    }
}
