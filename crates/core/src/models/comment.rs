use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A comment on a portfolio or board post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub content: String,
    pub created_at: NaiveDate,

    /// True when the comment author is also the author of the parent entity
    pub is_author: bool,
}

/// Comments keyed by parent id (portfolio or post), oldest first.
pub type CommentThreads = BTreeMap<String, Vec<Comment>>;

/// Like or dislike counts keyed by entity id.
pub type Counters = BTreeMap<String, u64>;
