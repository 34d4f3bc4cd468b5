//! HTTP request handlers.

pub mod cors;
pub mod health;
pub mod links;
pub mod redirect;

pub use cors::preflight_handler;
pub use health::health_handler;
pub use links::create_link_handler;
pub use redirect::redirect_handler;
