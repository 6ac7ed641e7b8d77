use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A discussion-board entry, independent of portfolios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardPost {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDate,

    /// Never incremented by any flow in this crate; only seeded
    #[serde(default)]
    pub view_count: u64,
}

/// Input of the create-post flow.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDraft {
    pub author: String,
    pub title: String,
    pub content: String,
}

impl PostDraft {
    pub fn new(
        author: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            author: author.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Ordering for board listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardSort {
    /// Highest trending score first (default)
    #[default]
    Trending,
    /// Newest `created_at` first
    Latest,
    /// Most likes + comments first
    Popular,
    /// Alphabetical by title
    Title,
}

/// Search + sort options for listing board posts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardQuery {
    /// Case-insensitive substring matched against title, author and content.
    /// Empty matches everything.
    pub search: String,
    pub sort: BoardSort,
}

impl BoardQuery {
    pub fn new(search: impl Into<String>, sort: BoardSort) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }

    /// Whether a post passes the search filter.
    pub fn matches(&self, post: &BoardPost) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        post.title.to_lowercase().contains(&needle)
            || post.author.to_lowercase().contains(&needle)
            || post.content.to_lowercase().contains(&needle)
    }
}
