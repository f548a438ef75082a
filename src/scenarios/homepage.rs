use super::ensure;
use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::helpers;
use crate::pages::HomePage;
use fantoccini::Client;

/// Listing integrity: the front page renders stories, every extracted
/// record passes shape validation, and the leading links are absolute.
pub async fn run(client: &Client, config: &SuiteConfig) -> Result<(), SuiteError> {
    let home = HomePage::new(client, config);
    home.load().await?;

    let count = home.story_count().await?;
    ensure(
        count > 0,
        format!("expected stories on the front page, found {}", count),
    )?;
    log::info!("Front page renders {} stories", count);

    let stories = home.all_stories().await?;
    ensure(
        stories.len() == count,
        format!(
            "bulk extraction returned {} records for {} rows",
            stories.len(),
            count
        ),
    )?;

    let unreadable = stories.iter().filter(|story| story.is_absent()).count();
    ensure(
        unreadable == 0,
        format!(
            "{} of {} stories were fully unreadable",
            unreadable,
            stories.len()
        ),
    )?;

    for (position, story) in stories.iter().enumerate() {
        let report = helpers::validate_story(story);
        ensure(
            report.is_valid,
            format!(
                "story {} failed validation: {}",
                position + 1,
                report.errors.join(", ")
            ),
        )?;

        if let Some(author) = &story.author {
            ensure(
                !author.trim().is_empty(),
                format!("story {} names a blank author", position + 1),
            )?;
        }
    }

    // Spot-check that the leading links survived absolutization
    let sample = count.min(5);
    for index in 1..=sample {
        let story = home.story_at(index).await;
        let link = story
            .link
            .ok_or_else(|| SuiteError::Assertion(format!("story {} is missing a link", index)))?;
        ensure(
            link.starts_with("http://") || link.starts_with("https://"),
            format!("story {} link is not absolute: {}", index, link),
        )?;
    }

    Ok(())
}
