use chrono::NaiveDate;

use crate::models::analytics::TrendingBreakdown;
use crate::models::board::BoardPost;

const VIEW_WEIGHT: f64 = 0.3;
const LIKE_WEIGHT: f64 = 0.4;
const COMMENT_WEIGHT: f64 = 0.3;
const DISLIKE_WEIGHT: f64 = 0.1;

/// Posts younger than this many days get a recency bonus.
pub const RECENCY_WINDOW_DAYS: i64 = 30;
const RECENCY_POINTS_PER_DAY: f64 = 2.0;

/// Ranks board posts by engagement and recency.
pub struct TrendingService;

impl TrendingService {
    pub fn new() -> Self {
        Self
    }

    /// Trending score of `post` as of `today`.
    ///
    /// popularity = 0.3·views + 0.4·likes + 0.3·comments − 0.1·dislikes,
    /// recency = max(0, 30 − days since creation) × 2, score = popularity + recency.
    /// A creation date after `today` counts as negative age, so the bonus grows past 60.
    #[must_use]
    pub fn score(
        &self,
        post: &BoardPost,
        like_count: u64,
        dislike_count: u64,
        comment_count: u64,
        today: NaiveDate,
    ) -> TrendingBreakdown {
        let popularity = post.view_count as f64 * VIEW_WEIGHT
            + like_count as f64 * LIKE_WEIGHT
            + comment_count as f64 * COMMENT_WEIGHT
            - dislike_count as f64 * DISLIKE_WEIGHT;

        let days_since_creation = (today - post.created_at).num_days();
        let recency_bonus =
            (RECENCY_WINDOW_DAYS - days_since_creation).max(0) as f64 * RECENCY_POINTS_PER_DAY;

        TrendingBreakdown {
            view_count: post.view_count,
            like_count,
            comment_count,
            dislike_count,
            popularity,
            recency_bonus,
            score: popularity + recency_bonus,
        }
    }
}

impl Default for TrendingService {
    fn default() -> Self {
        Self::new()
    }
}
