use super::ensure;
use crate::STORIES_PER_PAGE;
use crate::config::SuiteConfig;
use crate::error::SuiteError;
use crate::helpers;
use crate::pages::HomePage;
use fantoccini::Client;
use std::collections::HashSet;

/// Pagination: the More link advances to a second full page whose titles
/// differ positionally from page one, and three pages accumulate more than
/// one page's worth of distinct titles.
pub async fn run(client: &Client, config: &SuiteConfig) -> Result<(), SuiteError> {
    let home = HomePage::new(client, config);
    home.load().await?;

    let page_one_count = home.story_count().await?;
    ensure(
        page_one_count == STORIES_PER_PAGE,
        format!(
            "page one holds {} stories, expected {}",
            page_one_count, STORIES_PER_PAGE
        ),
    )?;
    let page_one_titles = home.all_titles().await?;
    ensure(
        !page_one_titles.is_empty(),
        "page one yielded no readable titles".to_string(),
    )?;

    home.click_more().await?;

    let page_two_count = home.story_count().await?;
    ensure(
        page_two_count == STORIES_PER_PAGE,
        format!(
            "page two holds {} stories, expected {}",
            page_two_count, STORIES_PER_PAGE
        ),
    )?;
    let page_two_titles = home.all_titles().await?;
    ensure(
        !page_two_titles.is_empty(),
        "page two yielded no readable titles".to_string(),
    )?;
    ensure(
        helpers::title_lists_differ(&page_one_titles, &page_two_titles),
        "page two shows the same titles as page one".to_string(),
    )?;
    log::info!(
        "Pages one and two differ ({} and {} titles read)",
        page_one_titles.len(),
        page_two_titles.len()
    );

    // Stories can repeat across pages over time, but three pages should
    // still yield well over one page's worth of distinct titles
    home.click_more().await?;
    let page_three_titles = home.all_titles().await?;

    let distinct: HashSet<&String> = page_one_titles
        .iter()
        .chain(page_two_titles.iter())
        .chain(page_three_titles.iter())
        .collect();
    ensure(
        distinct.len() > STORIES_PER_PAGE,
        format!(
            "three pages produced only {} distinct titles",
            distinct.len()
        ),
    )?;
    log::info!("Three pages produced {} distinct titles", distinct.len());

    Ok(())
}
