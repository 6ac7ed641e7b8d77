use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Span covered by a portfolio's trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentPeriod {
    /// Date of the earliest trade
    pub start: NaiveDate,

    /// Date of the latest trade
    pub end: NaiveDate,

    /// Inclusive day count: (end - start) + 1
    pub days: i64,
}

/// All inputs and intermediate values of a board post's trending score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendingBreakdown {
    pub view_count: u64,
    pub like_count: u64,
    pub comment_count: u64,
    pub dislike_count: u64,

    /// 0.3·views + 0.4·likes + 0.3·comments − 0.1·dislikes
    pub popularity: f64,

    /// max(0, 30 − days since creation) × 2
    pub recency_bonus: f64,

    /// popularity + recency_bonus
    pub score: f64,
}

/// Aggregate view of one author's portfolios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorSummary {
    pub name: String,
    pub portfolio_count: usize,

    /// Mean of the author's portfolio returns in percent (0 when none)
    pub average_return: f64,
}
