use super::ensure;
use crate::STORIES_PER_PAGE;
use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::pages::HomePage;
use fantoccini::Client;

/// Page size and score presence: the front page holds a full page of
/// stories and the top of the list carries numeric scores.
///
/// Top-two score ordering is logged but not asserted; the site ranks with
/// time decay on top of raw scores, and validating the ranking algorithm
/// is out of scope.
pub async fn run(client: &Client, config: &SuiteConfig) -> Result<(), SuiteError> {
    let home = HomePage::new(client, config);
    home.load().await?;

    let count = home.story_count().await?;
    ensure(
        count == STORIES_PER_PAGE,
        format!(
            "front page holds {} stories, expected {}",
            count, STORIES_PER_PAGE
        ),
    )?;

    let stories = home.all_stories().await?;
    let scored = stories
        .iter()
        .take(10)
        .filter(|story| story.score.is_some())
        .count();
    ensure(
        scored > 0,
        "none of the top ten stories shows a score".to_string(),
    )?;
    log::info!("{} of the top ten stories carry scores", scored);

    let first = stories.first().and_then(|story| story.score);
    let second = stories.get(1).and_then(|story| story.score);
    match (first, second) {
        (Some(first), Some(second)) if first >= second => {
            log::info!("Top story score {} >= second story score {}", first, second);
        }
        (Some(first), Some(second)) => {
            log::info!(
                "Top story scores {} against {}; ranking decay reorders raw scores",
                first,
                second
            );
        }
        _ => {
            log::info!("Top two scores not both available; skipping ordering note");
        }
    }

    Ok(())
}
