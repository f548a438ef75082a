use crate::config::SuiteConfig;
use crate::error::SuiteError;
use fantoccini::{Client, ClientBuilder};

/// Connects to a WebDriver server, trying the configured endpoint first.
///
/// The `WEBDRIVER_URL` environment variable overrides the configured
/// endpoint. If the primary endpoint is unreachable, a list of common
/// alternative ports is tried before giving up.
pub async fn connect(config: &SuiteConfig) -> Result<Client, SuiteError> {
    let webdriver_url = std::env::var("WEBDRIVER_URL")
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| config.webdriver_url.clone());

    match ClientBuilder::native().connect(&webdriver_url).await {
        Ok(client) => {
            log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    // If we couldn't connect, try with common alternative URLs
    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // Selenium / geckodriver default
        "http://127.0.0.1:4444", // Try with IP instead of localhost
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue; // Skip if it's the same as the one we already tried
        }

        log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    log::error!("Failed to connect to any WebDriver server");
    log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(SuiteError::Session(format!(
        "no WebDriver server reachable at {} or any fallback endpoint",
        webdriver_url
    )))
}
