/// The four storage keys that make up one domain's persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    /// Top-level collection (portfolios or board posts)
    pub items: &'static str,
    pub comments: &'static str,
    pub likes: &'static str,
    pub dislikes: &'static str,
}

impl StorageKeys {
    pub const PORTFOLIO: StorageKeys = StorageKeys {
        items: "portfolios",
        comments: "comments",
        likes: "likes",
        dislikes: "dislikes",
    };

    pub const BOARD: StorageKeys = StorageKeys {
        items: "boardPosts",
        comments: "boardComments",
        likes: "boardLikes",
        dislikes: "boardDislikes",
    };

    #[must_use]
    pub fn all(&self) -> [&'static str; 4] {
        [self.items, self.comments, self.likes, self.dislikes]
    }
}
