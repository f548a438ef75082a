use crate::SITE_BASE_URL;
use crate::error::SuiteError;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the check suite
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Root URL of the listing site under test
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Upper bound for required page structure to appear, in seconds
    #[serde(default = "default_page_load_timeout_secs")]
    pub page_load_timeout_secs: u64,

    /// Per-story budget during bulk record extraction, in seconds
    #[serde(default = "default_story_budget_secs")]
    pub story_budget_secs: u64,

    /// Per-story budget during title-only extraction, in seconds
    #[serde(default = "default_title_budget_secs")]
    pub title_budget_secs: u64,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            webdriver_url: default_webdriver_url(),
            page_load_timeout_secs: default_page_load_timeout_secs(),
            story_budget_secs: default_story_budget_secs(),
            title_budget_secs: default_title_budget_secs(),
        }
    }
}

impl SuiteConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SuiteError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Default value for base_url
fn default_base_url() -> String {
    SITE_BASE_URL.to_string()
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default page-structure wait bound
fn default_page_load_timeout_secs() -> u64 {
    15
}

/// Default per-story extraction budget
fn default_story_budget_secs() -> u64 {
    3
}

/// Default per-title extraction budget
fn default_title_budget_secs() -> u64 {
    2
}
