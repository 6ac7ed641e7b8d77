use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeType {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeType::Buy => write!(f, "buy"),
            TradeType::Sell => write!(f, "sell"),
        }
    }
}

/// A single buy/sell record inside a portfolio.
///
/// Trades are records, not holdings: nothing links buy and sell quantities,
/// so selling a ticker that was never bought is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: String,

    /// Trade date (daily granularity)
    pub date: NaiveDate,

    #[serde(rename = "type")]
    pub trade_type: TradeType,

    /// Short ticker symbol (e.g., "NVDA")
    pub ticker: String,

    pub shares: f64,

    /// Price per share
    pub price: f64,

    /// Free-text rationale for the trade
    #[serde(default)]
    pub comment: String,
}

/// A trade as entered on the create form, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeDraft {
    pub date: NaiveDate,
    pub trade_type: TradeType,
    pub ticker: String,
    pub shares: f64,
    pub price: f64,
    pub comment: String,
}

impl TradeDraft {
    pub fn new(
        date: NaiveDate,
        trade_type: TradeType,
        ticker: impl Into<String>,
        shares: f64,
        price: f64,
    ) -> Self {
        Self {
            date,
            trade_type,
            ticker: ticker.into(),
            shares,
            price,
            comment: String::new(),
        }
    }

    /// Attach a free-text comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Turn the draft into a stored trade with the given id.
    pub fn into_trade(self, id: String) -> Trade {
        Trade {
            id,
            date: self.date,
            trade_type: self.trade_type,
            ticker: self.ticker,
            shares: self.shares,
            price: self.price,
            comment: self.comment,
        }
    }
}
