//! Page objects wrapping the live rendered document.
//!
//! Each page object borrows the WebDriver client for the duration of one
//! scenario and exposes typed operations instead of selectors; scenarios
//! never issue DOM queries themselves.

pub mod comments;
pub mod home;

pub use comments::CommentsPage;
pub use home::HomePage;
