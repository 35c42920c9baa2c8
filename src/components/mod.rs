//! UI Components
//!
//! Reusable Leptos components.

mod footer;
mod header;
mod notice;
mod page_title;
mod pagination;
mod purchase_list;
mod recipe_card;
mod subscription_list;
mod text_input;

pub use footer::Footer;
pub use header::Header;
pub use notice::{flash, Notice};
pub use page_title::PageTitle;
pub use pagination::Pagination;
pub use purchase_list::PurchaseList;
pub use recipe_card::RecipeCard;
pub use subscription_list::SubscriptionList;
pub use text_input::TextInput;
