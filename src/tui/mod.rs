pub mod app;
pub mod views;
pub mod handlers;
pub use app::BrowserTui;
pub use views::{ListingView, ViewerView, StatusView};
pub use handlers::translate_key;
