use serde::{Deserialize, Serialize};

use crate::domain::Ticker;

/// One holding from `portfolio.csv`. Only the ticker is load-bearing;
/// the metadata columns ride along for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioRow {
    pub ticker: Ticker,
    pub units: Option<f64>,
    pub value: Option<f64>,
}
