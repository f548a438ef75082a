// Re-export modules
pub mod config;
pub mod error;
pub mod helpers;
pub mod pages;
pub mod records;
pub mod scenarios;
pub mod selectors;
pub mod session;

// Re-export commonly used types for convenience
pub use error::SuiteError;
pub use records::{StoryRecord, ValidationReport};

/// Root URL of the site under test
pub const SITE_BASE_URL: &str = "https://news.ycombinator.com";

/// Domain used to distinguish internal from external links
pub const SITE_DOMAIN: &str = "news.ycombinator.com";

/// Number of stories the site renders per listing page
pub const STORIES_PER_PAGE: usize = 30;
