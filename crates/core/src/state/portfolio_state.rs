use tracing::{debug, info};

use crate::errors::CoreError;
use crate::models::analytics::AuthorSummary;
use crate::models::comment::Comment;
use crate::models::portfolio::{Portfolio, PortfolioDraft};
use crate::seed;
use crate::services::clock::Clock;
use crate::services::id_service::IdGenerator;
use crate::services::metrics_service::MetricsService;
use crate::state::engagement::EngagementBook;
use crate::storage::keys::StorageKeys;
use crate::storage::manager::StorageManager;
use crate::storage::traits::KeyValueStore;

/// In-memory source of truth for portfolios and their comments/likes/dislikes.
///
/// Every mutation is written back to the store before it returns. A failed
/// write is undone in memory so both copies stay identical.
pub struct PortfolioState<S, C> {
    storage: StorageManager<S>,
    clock: C,
    ids: IdGenerator,
    metrics: MetricsService,
    portfolios: Vec<Portfolio>,
    engagement: EngagementBook,
}

impl<S, C> std::fmt::Debug for PortfolioState<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioState")
            .field("portfolios", &self.portfolios.len())
            .field("comment_threads", &self.engagement.comments().len())
            .field("last_id", &self.ids.last())
            .finish()
    }
}

impl<S: KeyValueStore, C: Clock> PortfolioState<S, C> {
    /// Load all four portfolio keys from `store`, seeding any that are absent.
    pub fn open(store: S, clock: C) -> Result<Self, CoreError> {
        let storage = StorageManager::new(store);
        let keys = StorageKeys::PORTFOLIO;
        let portfolios: Vec<Portfolio> = storage.load_or_seed(keys.items, seed::portfolios)?;
        let engagement = EngagementBook::open(
            &storage,
            keys,
            seed::portfolio_comments,
            seed::portfolio_likes,
            seed::portfolio_dislikes,
        )?;
        info!(portfolios = portfolios.len(), "portfolio state opened");
        let ids = IdGenerator::resuming_after(
            portfolios
                .iter()
                .map(|p| p.id.as_str())
                .chain(engagement.comment_ids()),
        );

        Ok(Self {
            storage,
            clock,
            ids,
            metrics: MetricsService::new(),
            portfolios,
            engagement,
        })
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Create a portfolio from a submitted form.
    ///
    /// Validates the draft, computes return % and risk ratio from the initial and
    /// final values, assigns an id and creation date, and puts it at the front of
    /// the list. On a validation or storage error nothing changes, in memory or
    /// in the store.
    pub fn add_portfolio(&mut self, draft: PortfolioDraft) -> Result<String, CoreError> {
        validate_draft(&draft)?;

        let return_pct = self
            .metrics
            .return_percent(draft.initial_value, draft.final_value);
        let sharpe_ratio = self.metrics.risk_ratio(return_pct);
        if !return_pct.is_finite() || !sharpe_ratio.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Return from {} to {} is out of range",
                draft.initial_value, draft.final_value
            )));
        }

        let now = self.clock.now();
        let id = self.ids.next_id(now);
        let trades = draft
            .trades
            .into_iter()
            .enumerate()
            .map(|(i, t)| t.into_trade(format!("{id}-{}", i + 1)))
            .collect();

        let portfolio = Portfolio {
            id: id.clone(),
            title: draft.title.trim().to_string(),
            author: draft.author.trim().to_string(),
            initial_value: draft.initial_value,
            final_value: draft.final_value,
            return_pct,
            sharpe_ratio,
            created_at: now.date_naive(),
            trades,
        };

        self.portfolios.insert(0, portfolio);
        if let Err(err) = self
            .storage
            .save(StorageKeys::PORTFOLIO.items, &self.portfolios)
        {
            self.portfolios.remove(0);
            return Err(err);
        }
        debug!(id = %id, return_pct, "portfolio created");
        Ok(id)
    }

    /// Append a comment by `author` to `portfolio_id`'s thread. Returns the comment id.
    pub fn add_comment(
        &mut self,
        portfolio_id: &str,
        author: &str,
        text: &str,
    ) -> Result<String, CoreError> {
        if text.trim().is_empty() {
            return Err(CoreError::ValidationError("Comment must not be empty".into()));
        }
        let now = self.clock.now();
        let id = self.ids.next_id(now);
        let is_author = self
            .get_by_id(portfolio_id)
            .is_some_and(|p| p.author == author);

        let comment = Comment {
            id: id.clone(),
            author: author.to_string(),
            content: text.to_string(),
            created_at: now.date_naive(),
            is_author,
        };
        self.engagement
            .push_comment(&self.storage, portfolio_id, comment)?;
        Ok(id)
    }

    /// Add one like to `portfolio_id`. Returns the new count.
    pub fn increment_like(&mut self, portfolio_id: &str) -> Result<u64, CoreError> {
        self.engagement.increment_like(&self.storage, portfolio_id)
    }

    /// Add one dislike to `portfolio_id`. Returns the new count.
    pub fn increment_dislike(&mut self, portfolio_id: &str) -> Result<u64, CoreError> {
        self.engagement.increment_dislike(&self.storage, portfolio_id)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All portfolios, most recent first.
    #[must_use]
    pub fn portfolios(&self) -> &[Portfolio] {
        &self.portfolios
    }

    #[must_use]
    pub fn get_by_id(&self, id: &str) -> Option<&Portfolio> {
        self.portfolios.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn comments_for(&self, portfolio_id: &str) -> &[Comment] {
        self.engagement.comments_for(portfolio_id)
    }

    #[must_use]
    pub fn likes_for(&self, portfolio_id: &str) -> u64 {
        self.engagement.likes_for(portfolio_id)
    }

    #[must_use]
    pub fn dislikes_for(&self, portfolio_id: &str) -> u64 {
        self.engagement.dislikes_for(portfolio_id)
    }

    #[must_use]
    pub fn engagement(&self) -> &EngagementBook {
        &self.engagement
    }

    /// Portfolios whose author matches `name` exactly, in list order.
    #[must_use]
    pub fn portfolios_by_author(&self, name: &str) -> Vec<&Portfolio> {
        self.portfolios.iter().filter(|p| p.author == name).collect()
    }

    /// Portfolio count and mean return for one author.
    #[must_use]
    pub fn author_summary(&self, name: &str) -> AuthorSummary {
        let owned = self.portfolios_by_author(name);
        let average_return = if owned.is_empty() {
            0.0
        } else {
            owned.iter().map(|p| p.return_pct).sum::<f64>() / owned.len() as f64
        };
        AuthorSummary {
            name: name.to_string(),
            portfolio_count: owned.len(),
            average_return,
        }
    }
}

/// Reject incomplete create-form submissions.
fn validate_draft(draft: &PortfolioDraft) -> Result<(), CoreError> {
    if draft.title.trim().is_empty() {
        return Err(CoreError::ValidationError("Portfolio title is required".into()));
    }
    if draft.author.trim().is_empty() {
        return Err(CoreError::ValidationError("Portfolio author is required".into()));
    }
    if !draft.initial_value.is_finite() || draft.initial_value <= 0.0 {
        return Err(CoreError::ValidationError(format!(
            "Initial value must be positive, got {}",
            draft.initial_value
        )));
    }
    if !draft.final_value.is_finite() {
        return Err(CoreError::ValidationError("Final value is required".into()));
    }
    if draft.trades.is_empty() {
        return Err(CoreError::ValidationError(
            "A portfolio needs at least one trade".into(),
        ));
    }
    for (i, trade) in draft.trades.iter().enumerate() {
        if trade.ticker.trim().is_empty() {
            return Err(CoreError::ValidationError(format!(
                "Trade #{} is missing a ticker",
                i + 1
            )));
        }
        if !trade.shares.is_finite() || trade.shares <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Trade #{} ({}) must have a positive share count",
                i + 1,
                trade.ticker
            )));
        }
        if !trade.price.is_finite() || trade.price <= 0.0 {
            return Err(CoreError::ValidationError(format!(
                "Trade #{} ({}) must have a positive price",
                i + 1,
                trade.ticker
            )));
        }
    }
    Ok(())
}
