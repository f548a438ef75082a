use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::selectors;
use fantoccini::{Client, Locator};
use std::time::Duration;

/// Page object for a single story's detail/discussion view
pub struct CommentsPage<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> CommentsPage<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    fn load_bound(&self) -> Duration {
        Duration::from_secs(self.config.page_load_timeout_secs)
    }

    /// Block until the item container is visible
    pub async fn wait_for_load(&self) -> Result<(), SuiteError> {
        self.client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::Css(selectors::ITEM_CONTAINER))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the item container"))?;
        Ok(())
    }

    /// Number of comment rows currently rendered; zero is a valid result
    pub async fn comment_count(&self) -> Result<usize, SuiteError> {
        let rows = self
            .client
            .find_all(Locator::Css(selectors::COMMENT_ROWS))
            .await?;
        Ok(rows.len())
    }

    /// True when at least one comment is rendered
    pub async fn has_comments(&self) -> Result<bool, SuiteError> {
        Ok(self.comment_count().await? > 0)
    }

    /// Title text of the story under discussion
    pub async fn story_title(&self) -> Result<String, SuiteError> {
        let title = self
            .client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::Css(selectors::ITEM_TITLE))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the item title"))?;
        let text = title.text().await?;
        Ok(text.trim().to_string())
    }
}
