//! The site's structural contract, kept as named selector data.
//!
//! Every query the page objects issue is defined here so that a markup
//! change on the site breaks exactly one module. The listing renders each
//! story as a uniquely-identified `tr.athing` row immediately followed by a
//! subtext row; the subtext selectors therefore key off the story row's id
//! attribute instead of index arithmetic.

/// Main listing container
pub const STORY_LIST: &str = "table#hnmain";

/// One primary row per story
pub const STORY_ROWS: &str = "tr.athing";

/// Title anchor inside a story row
pub const TITLE_ANCHOR: &str = "td.title span.titleline > a";

/// Pagination control at the bottom of a listing
pub const MORE_LINK: &str = "a.morelink";

/// Item container on a detail page
pub const ITEM_CONTAINER: &str = "table.fatitem";

/// Title anchor on a detail page
pub const ITEM_TITLE: &str = "table.fatitem tr.athing td.title span.titleline > a";

/// One row per rendered comment
pub const COMMENT_ROWS: &str = "tr.comtr";

/// XPath locating the score element in the subtext row that follows the
/// story row with the given id
pub fn subtext_score(row_id: &str) -> String {
    format!(
        "//tr[@id='{row_id}']/following-sibling::tr[1]//td[@class='subtext']//span[@class='score']"
    )
}

/// XPath locating the submitting user in the subtext row for the given
/// story row id
pub fn subtext_author(row_id: &str) -> String {
    format!(
        "//tr[@id='{row_id}']/following-sibling::tr[1]//td[@class='subtext']//a[@class='hnuser']"
    )
}

/// XPath locating the thread anchor in the subtext row for the given story
/// row id; matches the comment-count form and the "discuss" form shown on
/// stories with no comments yet
pub fn subtext_thread_anchor(row_id: &str) -> String {
    format!(
        "//tr[@id='{row_id}']/following-sibling::tr[1]//td[@class='subtext']//a[contains(text(), 'comment') or text()='discuss']"
    )
}

/// XPath locating the title anchor of the story row with the given id
pub fn title_anchor(row_id: &str) -> String {
    format!("//tr[@id='{row_id}']//span[@class='titleline']/a")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    // Trimmed-down front page markup matching the site's row structure:
    // each tr.athing carries an id and is followed by its subtext row.
    const FRONT_PAGE: &str = r#"
        <html><body><center>
        <table id="hnmain"><tr><td>
          <table>
            <tr class="athing" id="1001">
              <td class="title"><span class="rank">1.</span></td>
              <td class="title">
                <span class="titleline"><a href="https://example.com/post">First story</a></span>
              </td>
            </tr>
            <tr>
              <td class="subtext">
                <span class="score" id="score_1001">123 points</span>
                by <a href="user?id=alice" class="hnuser">alice</a>
                | <a href="item?id=1001">45&nbsp;comments</a>
              </td>
            </tr>
            <tr class="athing" id="1002">
              <td class="title"><span class="rank">2.</span></td>
              <td class="title">
                <span class="titleline"><a href="item?id=1002">Second story</a></span>
              </td>
            </tr>
            <tr>
              <td class="subtext">
                by <a href="user?id=bob" class="hnuser">bob</a>
                | <a href="item?id=1002">discuss</a>
              </td>
            </tr>
            <tr class="morespace"></tr>
            <tr><td class="title"><a href="news?p=2" class="morelink">More</a></td></tr>
          </table>
        </td></tr></table>
        </center></body></html>
    "#;

    const ITEM_PAGE: &str = r#"
        <html><body>
        <table id="hnmain"><tr><td>
          <table class="fatitem">
            <tr class="athing" id="1001">
              <td class="title">
                <span class="titleline"><a href="https://example.com/post">First story</a></span>
              </td>
            </tr>
          </table>
          <table class="comment-tree">
            <tr class="comtr" id="2001"><td><span class="commtext">nice</span></td></tr>
            <tr class="comtr" id="2002"><td><span class="commtext">agreed</span></td></tr>
          </table>
        </td></tr></table>
        </body></html>
    "#;

    fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<scraper::ElementRef<'a>> {
        let selector = Selector::parse(css).expect("selector is valid css");
        doc.select(&selector).collect()
    }

    #[test]
    fn test_listing_selectors_match_fixture() {
        let doc = Html::parse_document(FRONT_PAGE);

        assert_eq!(select_all(&doc, STORY_LIST).len(), 1);
        assert_eq!(select_all(&doc, STORY_ROWS).len(), 2);
        assert_eq!(select_all(&doc, MORE_LINK).len(), 1);
    }

    #[test]
    fn test_title_anchor_is_scoped_to_story_rows() {
        let doc = Html::parse_document(FRONT_PAGE);
        let rows = select_all(&doc, STORY_ROWS);
        let anchor = Selector::parse(TITLE_ANCHOR).expect("selector is valid css");

        let titles: Vec<String> = rows
            .iter()
            .filter_map(|row| row.select(&anchor).next())
            .map(|a| a.text().collect())
            .collect();

        assert_eq!(titles, vec!["First story", "Second story"]);
    }

    #[test]
    fn test_subtext_row_follows_each_story_row() {
        // The XPath builders assume the subtext row is the story row's next
        // tr sibling; verify that structural relationship holds in the
        // fixture the CSS selectors were written against.
        let doc = Html::parse_document(FRONT_PAGE);
        let score = Selector::parse("td.subtext span.score").expect("selector is valid css");
        let user = Selector::parse("td.subtext a.hnuser").expect("selector is valid css");

        for row in select_all(&doc, STORY_ROWS) {
            let sibling = row
                .next_siblings()
                .filter_map(scraper::ElementRef::wrap)
                .next()
                .expect("story row has a following row");
            // Every subtext row names its author; the score may be absent
            assert_eq!(sibling.select(&user).count(), 1);
            assert!(sibling.select(&score).count() <= 1);
        }
    }

    #[test]
    fn test_detail_selectors_match_fixture() {
        let doc = Html::parse_document(ITEM_PAGE);

        assert_eq!(select_all(&doc, ITEM_CONTAINER).len(), 1);
        assert_eq!(select_all(&doc, COMMENT_ROWS).len(), 2);

        let title: String = select_all(&doc, ITEM_TITLE)[0].text().collect();
        assert_eq!(title, "First story");
    }

    #[test]
    fn test_xpath_builders_embed_row_id() {
        assert_eq!(
            subtext_score("40001"),
            "//tr[@id='40001']/following-sibling::tr[1]//td[@class='subtext']//span[@class='score']"
        );
        assert!(subtext_author("7").contains("following-sibling::tr[1]"));
        assert_eq!(
            title_anchor("40001"),
            "//tr[@id='40001']//span[@class='titleline']/a"
        );
    }

    #[test]
    fn test_thread_anchor_matches_both_rendered_forms() {
        // Clickable thread anchors are waited on through this single
        // locator, whichever way the subtext row renders the link
        let xpath = subtext_thread_anchor("1001");
        assert!(xpath.starts_with("//tr[@id='1001']/following-sibling::tr[1]"));
        assert!(xpath.contains("contains(text(), 'comment')"));
        assert!(xpath.contains("or text()='discuss'"));
    }
}
