use chrono::Datelike;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::analytics::InvestmentPeriod;
use crate::models::chart::ChartPoint;
use crate::models::portfolio::Portfolio;
use crate::models::trade::Trade;

/// Maximum absolute perturbation added to each chart point, in percentage points.
pub const CHART_VARIATION: f64 = 5.0;

/// Derived portfolio metrics: investment period, return, risk ratio, chart series.
///
/// Pure business logic with no I/O or state. The chart series is driven by an
/// explicit seed so it can be reproduced.
pub struct MetricsService;

impl MetricsService {
    pub fn new() -> Self {
        Self
    }

    /// Trades ordered oldest first. Trades on the same date keep their input order.
    #[must_use]
    pub fn sorted_trades<'a>(&self, trades: &'a [Trade]) -> Vec<&'a Trade> {
        let mut sorted: Vec<&Trade> = trades.iter().collect();
        sorted.sort_by_key(|t| t.date);
        sorted
    }

    /// First and last trade dates plus the inclusive day count.
    /// `None` when there are no trades.
    #[must_use]
    pub fn investment_period(&self, trades: &[Trade]) -> Option<InvestmentPeriod> {
        let start = trades.iter().map(|t| t.date).min()?;
        let end = trades.iter().map(|t| t.date).max()?;
        Some(InvestmentPeriod {
            start,
            end,
            days: (end - start).num_days() + 1,
        })
    }

    /// `(final - initial) / initial × 100`, rounded to 2 decimals.
    ///
    /// Callers validate `initial > 0`; a zero initial value yields a non-finite result.
    #[must_use]
    pub fn return_percent(&self, initial_value: f64, final_value: f64) -> f64 {
        round2((final_value - initial_value) / initial_value * 100.0)
    }

    /// Placeholder risk ratio: return / 10, rounded to 2 decimals.
    /// Not a real risk-adjusted metric.
    #[must_use]
    pub fn risk_ratio(&self, return_pct: f64) -> f64 {
        round2(return_pct / 10.0)
    }

    /// Illustrative cumulative-return series, one point per trade in date order.
    ///
    /// Point `i` is `return / n × (i + 1)` plus a uniform perturbation in
    /// `[-5, 5)`. The same seed always gives the same series.
    #[must_use]
    pub fn chart_series(&self, portfolio: &Portfolio, seed: u64) -> Vec<ChartPoint> {
        let sorted = self.sorted_trades(&portfolio.trades);
        if sorted.is_empty() {
            return Vec::new();
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let return_per_trade = portfolio.return_pct / sorted.len() as f64;

        sorted
            .iter()
            .enumerate()
            .map(|(index, trade)| {
                let cumulative = return_per_trade * (index + 1) as f64;
                let variation = rng.random_range(-CHART_VARIATION..CHART_VARIATION);
                ChartPoint {
                    date: trade.date,
                    label: format!("{}/{}", trade.date.month(), trade.date.day()),
                    value: cumulative + variation,
                }
            })
            .collect()
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}

/// Round to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
