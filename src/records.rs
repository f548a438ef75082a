use serde::{Deserialize, Serialize};

/// Represents one extracted listing entry
///
/// All fields are optional: extraction is best-effort, and a row that could
/// not be read at all is represented by the default (all-absent) record
/// rather than an error. A *valid* story must carry a title and link; see
/// [`crate::helpers::validate_story`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryRecord {
    /// Story title text (if readable)
    pub title: Option<String>,

    /// Absolute story URL (if readable)
    pub link: Option<String>,

    /// Numeric score parsed from the subtext row (if shown)
    pub score: Option<u32>,

    /// Submitting user (if shown)
    pub author: Option<String>,
}

impl StoryRecord {
    /// True when extraction produced nothing at all for this row
    pub fn is_absent(&self) -> bool {
        self.title.is_none() && self.link.is_none() && self.score.is_none() && self.author.is_none()
    }
}

/// Result of checking a story record's shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Whether the record satisfied every rule
    pub is_valid: bool,

    /// One reason per violated rule, in rule order
    pub errors: Vec<String>,
}
