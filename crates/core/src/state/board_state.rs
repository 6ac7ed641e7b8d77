use std::cmp::Ordering;

use tracing::{debug, info};

use crate::errors::CoreError;
use crate::models::analytics::TrendingBreakdown;
use crate::models::board::{BoardPost, BoardQuery, BoardSort, PostDraft};
use crate::models::comment::Comment;
use crate::seed;
use crate::services::clock::Clock;
use crate::services::id_service::IdGenerator;
use crate::services::trending_service::TrendingService;
use crate::state::engagement::EngagementBook;
use crate::storage::keys::StorageKeys;
use crate::storage::manager::StorageManager;
use crate::storage::traits::KeyValueStore;

/// A board post together with its trending breakdown, as returned by listings.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedPost<'a> {
    pub post: &'a BoardPost,
    pub trending: TrendingBreakdown,
}

/// In-memory source of truth for the discussion board.
pub struct BoardState<S, C> {
    storage: StorageManager<S>,
    clock: C,
    ids: IdGenerator,
    trending: TrendingService,
    posts: Vec<BoardPost>,
    engagement: EngagementBook,
}

impl<S, C> std::fmt::Debug for BoardState<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardState")
            .field("posts", &self.posts.len())
            .field("comment_threads", &self.engagement.comments().len())
            .field("last_id", &self.ids.last())
            .finish()
    }
}

impl<S: KeyValueStore, C: Clock> BoardState<S, C> {
    /// Load all four board keys from `store`, seeding any that are absent.
    pub fn open(store: S, clock: C) -> Result<Self, CoreError> {
        let storage = StorageManager::new(store);
        let keys = StorageKeys::BOARD;
        let posts: Vec<BoardPost> = storage.load_or_seed(keys.items, seed::board_posts)?;
        let engagement = EngagementBook::open(
            &storage,
            keys,
            seed::board_comments,
            seed::board_likes,
            seed::board_dislikes,
        )?;
        info!(posts = posts.len(), "board state opened");
        let ids = IdGenerator::resuming_after(
            posts
                .iter()
                .map(|p| p.id.as_str())
                .chain(engagement.comment_ids()),
        );

        Ok(Self {
            storage,
            clock,
            ids,
            trending: TrendingService::new(),
            posts,
            engagement,
        })
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Publish a new post at the top of the board. Returns its id.
    pub fn add_post(&mut self, draft: PostDraft) -> Result<String, CoreError> {
        if draft.title.trim().is_empty() || draft.content.trim().is_empty() {
            return Err(CoreError::ValidationError(
                "Post title and content are both required".into(),
            ));
        }
        if draft.author.trim().is_empty() {
            return Err(CoreError::ValidationError("Post author is required".into()));
        }

        let now = self.clock.now();
        let id = self.ids.next_id(now);
        let post = BoardPost {
            id: id.clone(),
            author: draft.author.trim().to_string(),
            title: draft.title.trim().to_string(),
            content: draft.content.trim().to_string(),
            created_at: now.date_naive(),
            view_count: 0,
        };

        self.posts.insert(0, post);
        if let Err(err) = self.storage.save(StorageKeys::BOARD.items, &self.posts) {
            self.posts.remove(0);
            return Err(err);
        }
        debug!(id = %id, "board post created");
        Ok(id)
    }

    /// Append a comment by `author` to `post_id`'s thread. Returns the comment id.
    pub fn add_comment(&mut self, post_id: &str, author: &str, text: &str) -> Result<String, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::ValidationError("Comment must not be empty".into()));
        }
        let now = self.clock.now();
        let id = self.ids.next_id(now);
        let is_author = self.get_by_id(post_id).is_some_and(|p| p.author == author);

        let comment = Comment {
            id: id.clone(),
            author: author.to_string(),
            content: text.to_string(),
            created_at: now.date_naive(),
            is_author,
        };
        self.engagement.push_comment(&self.storage, post_id, comment)?;
        Ok(id)
    }

    pub fn increment_like(&mut self, post_id: &str) -> Result<u64, CoreError> {
        self.engagement.increment_like(&self.storage, post_id)
    }

    pub fn increment_dislike(&mut self, post_id: &str) -> Result<u64, CoreError> {
        self.engagement.increment_dislike(&self.storage, post_id)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All posts, most recent first.
    #[must_use]
    pub fn posts(&self) -> &[BoardPost] {
        &self.posts
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&BoardPost> {
        self.posts.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn comments_for(&self, post_id: &str) -> &[Comment] {
        self.engagement.comments_for(post_id)
    }

    #[must_use]
    pub fn likes_for(&self, post_id: &str) -> u64 {
        self.engagement.likes_for(post_id)
    }

    #[must_use]
    pub fn dislikes_for(&self, post_id: &str) -> u64 {
        self.engagement.dislikes_for(post_id)
    }

    #[must_use]
    pub fn engagement(&self) -> &EngagementBook {
        &self.engagement
    }

    /// Trending breakdown of one post as of the clock's current date.
    #[must_use]
    pub fn trending_for(&self, post_id: &str) -> Option<TrendingBreakdown> {
        let today = self.clock.today();
        self.get_by_id(post_id).map(|post| self.score(post, today))
    }

    /// Filter posts by the query's search text and order them by its sort mode.
    ///
    /// All sorts are stable: ties keep the stored (most-recent-first) order.
    #[must_use]
    pub fn list(&self, query: &BoardQuery) -> Vec<RankedPost<'_>> {
        let today = self.clock.today();
        let mut ranked: Vec<RankedPost<'_>> = self
            .posts
            .iter()
            .filter(|post| query.matches(post))
            .map(|post| RankedPost {
                post,
                trending: self.score(post, today),
            })
            .collect();

        match query.sort {
            BoardSort::Trending => ranked.sort_by(|a, b| {
                b.trending
                    .score
                    .partial_cmp(&a.trending.score)
                    .unwrap_or(Ordering::Equal)
            }),
            BoardSort::Latest => ranked.sort_by(|a, b| b.post.created_at.cmp(&a.post.created_at)),
            BoardSort::Popular => ranked.sort_by_key(|r| {
                std::cmp::Reverse(r.trending.like_count.saturating_add(r.trending.comment_count))
            }),
            BoardSort::Title => ranked.sort_by(|a, b| a.post.title.cmp(&b.post.title)),
        }
        ranked
    }

    fn score(&self, post: &BoardPost, today: chrono::NaiveDate) -> TrendingBreakdown {
        self.trending.score(
            post,
            self.likes_for(&post.id),
            self.dislikes_for(&post.id),
            self.comments_for(&post.id).len() as u64,
            today,
        )
    }
}
