use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::trade::{Trade, TradeDraft};

/// A shared investment portfolio: a titled list of trades with summary returns.
///
/// Serialized with the camelCase field names of the `portfolios` storage key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub id: String,

    pub title: String,

    /// Display name of the author, also used to group portfolios per author
    pub author: String,

    /// Starting value in currency units (positive)
    pub initial_value: f64,

    pub final_value: f64,

    /// Return in percent, rounded to 2 decimals
    #[serde(rename = "return")]
    pub return_pct: f64,

    /// Crude risk ratio: return / 10
    #[serde(rename = "sharpeRatio")]
    pub sharpe_ratio: f64,

    pub created_at: NaiveDate,

    /// Trades in submission order (not necessarily sorted by date)
    pub trades: Vec<Trade>,
}

/// Input of the create-portfolio flow.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioDraft {
    pub title: String,
    pub author: String,
    pub initial_value: f64,
    pub final_value: f64,
    pub trades: Vec<TradeDraft>,
}

impl PortfolioDraft {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        initial_value: f64,
        final_value: f64,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            initial_value,
            final_value,
            trades: Vec::new(),
        }
    }

    /// Append a trade to the draft.
    pub fn with_trade(mut self, trade: TradeDraft) -> Self {
        self.trades.push(trade);
        self
    }
}
