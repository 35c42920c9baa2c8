//! Page Containers
//!
//! One component per screen; each owns its fetching and form state.

mod cart;
mod change_password;
mod not_found;
mod recipes;
mod sign_in;
mod sign_up;
mod subscriptions;

pub use cart::CartPage;
pub use change_password::ChangePasswordPage;
pub use not_found::NotFoundPage;
pub use recipes::RecipesPage;
pub use sign_in::SignInPage;
pub use sign_up::SignUpPage;
pub use subscriptions::SubscriptionsPage;
