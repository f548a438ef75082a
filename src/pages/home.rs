use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::helpers;
use crate::records::StoryRecord;
use crate::selectors;
use fantoccini::error::CmdError;
use fantoccini::{Client, Locator};
use std::time::Duration;
use tokio::time::timeout;

/// Page object for the ranked story listing.
///
/// Single-record extraction is best-effort: a row that cannot be read
/// degrades to the all-absent record instead of failing the caller, so the
/// bulk operations stay total over whatever is currently rendered. Only
/// missing page structure (listing container, story rows, More link) is
/// fatal, surfaced as [`SuiteError::LoadTimeout`].
pub struct HomePage<'a> {
    client: &'a Client,
    config: &'a SuiteConfig,
}

impl<'a> HomePage<'a> {
    pub fn new(client: &'a Client, config: &'a SuiteConfig) -> Self {
        Self { client, config }
    }

    fn load_bound(&self) -> Duration {
        Duration::from_secs(self.config.page_load_timeout_secs)
    }

    /// Navigate to the listing root and wait for stories to render
    pub async fn load(&self) -> Result<(), SuiteError> {
        log::info!("Loading listing page: {}", self.config.base_url);
        self.client.goto(&self.config.base_url).await?;
        self.wait_for_stories().await
    }

    /// Block until the listing container and at least one story row exist
    pub async fn wait_for_stories(&self) -> Result<(), SuiteError> {
        self.client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::Css(selectors::STORY_LIST))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the story listing container"))?;
        self.client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::Css(selectors::STORY_ROWS))
            .await
            .map_err(|e| SuiteError::from_wait(e, "at least one story row"))?;
        Ok(())
    }

    /// Number of story rows currently rendered
    pub async fn story_count(&self) -> Result<usize, SuiteError> {
        let rows = self
            .client
            .find_all(Locator::Css(selectors::STORY_ROWS))
            .await?;
        Ok(rows.len())
    }

    /// Extract one story record by 1-based rank.
    ///
    /// Never fails: any fault while reading the row yields the all-absent
    /// record so one bad row cannot abort a bulk scan.
    pub async fn story_at(&self, index: usize) -> StoryRecord {
        match self.extract_story(index).await {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Failed to extract story {}: {}", index, e);
                StoryRecord::default()
            }
        }
    }

    async fn extract_story(&self, index: usize) -> Result<StoryRecord, CmdError> {
        let rows = self
            .client
            .find_all(Locator::Css(selectors::STORY_ROWS))
            .await?;
        let Some(row) = index.checked_sub(1).and_then(|i| rows.get(i)) else {
            log::warn!("No story row at index {}", index);
            return Ok(StoryRecord::default());
        };

        let mut record = StoryRecord::default();

        if let Ok(anchor) = row.find(Locator::Css(selectors::TITLE_ANCHOR)).await {
            let text = anchor.text().await?;
            record.title = Some(text.trim().to_string());
            if let Some(href) = anchor.attr("href").await? {
                record.link = Some(helpers::absolutize_link(&self.config.base_url, &href));
            }
        }

        // Score and author live in the subtext row, which is not itself
        // ranked; resolve it through the story row's id so the lookup stays
        // correct however the rows are interleaved.
        if let Some(row_id) = row.attr("id").await? {
            let score_xpath = selectors::subtext_score(&row_id);
            if let Ok(score) = self.client.find(Locator::XPath(&score_xpath)).await {
                record.score = helpers::parse_score(&score.text().await?);
            }

            let author_xpath = selectors::subtext_author(&row_id);
            if let Ok(author) = self.client.find(Locator::XPath(&author_xpath)).await {
                let name = author.text().await?;
                let name = name.trim();
                if !name.is_empty() {
                    record.author = Some(name.to_string());
                }
            }
        }

        Ok(record)
    }

    /// Extract every rendered story in rank order.
    ///
    /// Each story gets a bounded time budget; a story that cannot be read
    /// in time contributes the all-absent record. The result always holds
    /// exactly as many records as there are rows.
    pub async fn all_stories(&self) -> Result<Vec<StoryRecord>, SuiteError> {
        let count = self.story_count().await?;
        let budget = Duration::from_secs(self.config.story_budget_secs);
        let mut stories = Vec::with_capacity(count);

        for index in 1..=count {
            match timeout(budget, self.story_at(index)).await {
                Ok(record) => stories.push(record),
                Err(_) => {
                    log::warn!("Extraction of story {} timed out", index);
                    stories.push(StoryRecord::default());
                }
            }
        }

        Ok(stories)
    }

    /// Extract just the trimmed title of every readable story.
    ///
    /// Unreadable or slow titles are skipped with a warning, so the result
    /// may hold fewer entries than there are rows.
    pub async fn all_titles(&self) -> Result<Vec<String>, SuiteError> {
        let rows = self
            .client
            .find_all(Locator::Css(selectors::STORY_ROWS))
            .await?;
        let budget = Duration::from_secs(self.config.title_budget_secs);
        let mut titles = Vec::with_capacity(rows.len());

        for (position, row) in rows.iter().enumerate() {
            let extraction = async {
                let anchor = row.find(Locator::Css(selectors::TITLE_ANCHOR)).await?;
                anchor.text().await
            };
            match timeout(budget, extraction).await {
                Ok(Ok(text)) => {
                    let title = text.trim();
                    if !title.is_empty() {
                        titles.push(title.to_string());
                    }
                }
                Ok(Err(e)) => {
                    log::warn!("Could not read title for story {}: {}", position + 1, e);
                }
                Err(_) => {
                    log::warn!("Title of story {} timed out", position + 1);
                }
            }
        }

        Ok(titles)
    }

    /// Title of the first rendered story, for before/after comparisons
    pub async fn first_title(&self) -> Result<String, SuiteError> {
        let row = self
            .client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::Css(selectors::STORY_ROWS))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the first story row"))?;
        let anchor = row.find(Locator::Css(selectors::TITLE_ANCHOR)).await?;
        let text = anchor.text().await?;
        Ok(text.trim().to_string())
    }

    /// Activate a story's title link by 1-based rank, waiting for the
    /// link to render first
    pub async fn click_story(&self, index: usize) -> Result<(), SuiteError> {
        let row = self.row_at(index).await?;
        let row_id = self.row_id(&row, index).await?;

        let anchor_xpath = selectors::title_anchor(&row_id);
        let anchor = self
            .client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::XPath(&anchor_xpath))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the story title link"))?;
        anchor.click().await?;
        Ok(())
    }

    /// Activate a story's comments link by 1-based rank.
    ///
    /// The thread anchor is resolved through the story row's id and
    /// matched either way the site renders it: a comment count, or
    /// "discuss" on stories with no comments yet.
    pub async fn click_comments_link(&self, index: usize) -> Result<(), SuiteError> {
        let row = self.row_at(index).await?;
        let row_id = self.row_id(&row, index).await?;

        let thread_xpath = selectors::subtext_thread_anchor(&row_id);
        let anchor = self
            .client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::XPath(&thread_xpath))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the comments link"))?;
        anchor.click().await?;
        Ok(())
    }

    /// Activate the More link and wait for the next page's stories
    pub async fn click_more(&self) -> Result<(), SuiteError> {
        let more = self
            .client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::Css(selectors::MORE_LINK))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the More link"))?;
        more.click().await?;
        self.wait_for_stories().await
    }

    async fn row_at(&self, index: usize) -> Result<fantoccini::elements::Element, SuiteError> {
        self.client
            .wait()
            .at_most(self.load_bound())
            .for_element(Locator::Css(selectors::STORY_ROWS))
            .await
            .map_err(|e| SuiteError::from_wait(e, "the story rows"))?;
        let rows = self
            .client
            .find_all(Locator::Css(selectors::STORY_ROWS))
            .await?;
        // Rows rendered but the requested rank never appeared: structural
        // absence, not a scenario assertion
        index
            .checked_sub(1)
            .and_then(|i| rows.into_iter().nth(i))
            .ok_or_else(|| SuiteError::LoadTimeout(format!("story row at index {}", index)))
    }

    async fn row_id(
        &self,
        row: &fantoccini::elements::Element,
        index: usize,
    ) -> Result<String, SuiteError> {
        row.attr("id").await?.ok_or_else(|| {
            SuiteError::LoadTimeout(format!("an id attribute on story row {}", index))
        })
    }
}
