//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Home page (the single-page site)
//! - Not found page (404 fallback)

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
