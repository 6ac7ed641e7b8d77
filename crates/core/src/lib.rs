pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod seed;
pub mod services;
pub mod state;
pub mod storage;

use config::AppConfig;
use errors::CoreError;
use models::{analytics::InvestmentPeriod, chart::ChartPoint, health::HealthStatus};
use services::{
    clock::{Clock, SystemClock},
    metrics_service::MetricsService,
};
use state::{board_state::BoardState, portfolio_state::PortfolioState};
use storage::{
    backend::StoreBackend,
    file::FileStore,
    keys::StorageKeys,
    manager::StorageManager,
    memory::MemoryStore,
    traits::KeyValueStore,
};
use tracing::info;

/// Main entry point for the Proofolio core library.
/// Holds the portfolio and board state containers over one shared store.
#[must_use]
pub struct Proofolio<S, C> {
    portfolios: PortfolioState<S, C>,
    board: BoardState<S, C>,
    metrics: MetricsService,
    config: AppConfig,
}

impl<S, C> std::fmt::Debug for Proofolio<S, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proofolio")
            .field("portfolios", &self.portfolios)
            .field("board", &self.board)
            .field("config", &self.config)
            .finish()
    }
}

impl<S, C> Proofolio<S, C>
where
    S: KeyValueStore + Clone,
    C: Clock + Clone,
{
    /// Open both domains on `store`, seeding absent keys.
    ///
    /// With `reset_on_start`, every key of both domains is removed first.
    pub fn open(store: S, clock: C, config: AppConfig) -> Result<Self, CoreError> {
        if config.reset_on_start {
            let storage = StorageManager::new(store.clone());
            storage.clear(&StorageKeys::PORTFOLIO.all())?;
            storage.clear(&StorageKeys::BOARD.all())?;
            info!(store = store.name(), "storage reset before load");
        }

        Ok(Self {
            portfolios: PortfolioState::open(store.clone(), clock.clone())?,
            board: BoardState::open(store, clock)?,
            metrics: MetricsService::new(),
            config,
        })
    }

    // ── Domains ─────────────────────────────────────────────────────

    #[must_use]
    pub fn portfolios(&self) -> &PortfolioState<S, C> {
        &self.portfolios
    }

    pub fn portfolios_mut(&mut self) -> &mut PortfolioState<S, C> {
        &mut self.portfolios
    }

    #[must_use]
    pub fn board(&self) -> &BoardState<S, C> {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardState<S, C> {
        &mut self.board
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Display name for callers that act without an identity.
    #[must_use]
    pub fn anonymous_author(&self) -> &str {
        &self.config.anonymous_author
    }

    // ── Derived metrics ─────────────────────────────────────────────

    /// Investment period of a portfolio. `None` for unknown ids or no trades.
    #[must_use]
    pub fn investment_period(&self, portfolio_id: &str) -> Option<InvestmentPeriod> {
        self.portfolios
            .get_by_id(portfolio_id)
            .and_then(|p| self.metrics.investment_period(&p.trades))
    }

    /// Chart series of a portfolio using the configured seed.
    /// Empty for unknown ids.
    #[must_use]
    pub fn chart_for(&self, portfolio_id: &str) -> Vec<ChartPoint> {
        self.portfolios
            .get_by_id(portfolio_id)
            .map(|p| self.metrics.chart_series(p, self.config.chart_seed))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus::ok()
    }
}

impl Proofolio<StoreBackend, SystemClock> {
    /// Open with the store the config asks for: `FileStore` under `data_dir`,
    /// otherwise an empty `MemoryStore`.
    pub fn open_from_config(config: AppConfig) -> Result<Self, CoreError> {
        let store = match &config.data_dir {
            Some(dir) => StoreBackend::File(FileStore::open(dir)?),
            None => StoreBackend::Memory(MemoryStore::new()),
        };
        Self::open(store, SystemClock, config)
    }
}
