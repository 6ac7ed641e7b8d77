use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point of the illustrative return chart of a portfolio.
///
/// The core generates these; rendering is left to the frontend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Date of the trade this point belongs to
    pub date: NaiveDate,

    /// Axis label, "M/D"
    pub label: String,

    /// Cumulative return in percent, including the random perturbation
    pub value: f64,
}
