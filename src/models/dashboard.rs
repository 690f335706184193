use itertools::Itertools;

use crate::domain::{PortfolioRow, Ticker};
use crate::figures::StoredPlots;

/// Everything the initial page needs, assembled once at startup from the
/// three fixed bucket objects.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// Selector options, in file order.
    pub tickers: Vec<Ticker>,
    pub portfolio: Vec<PortfolioRow>,
    pub plots: StoredPlots,
}

impl DashboardData {
    /// Default multi-select: every portfolio holding, deduplicated in
    /// file order (a ticker can appear on several rows).
    pub fn portfolio_tickers(&self) -> Vec<Ticker> {
        self.portfolio
            .iter()
            .map(|row| row.ticker.clone())
            .unique()
            .collect()
    }

    /// Default for the individual-detail selector: the first holding,
    /// falling back to the first listed ticker.
    pub fn default_individual(&self) -> Option<Ticker> {
        self.portfolio
            .first()
            .map(|row| row.ticker.clone())
            .or_else(|| self.tickers.first().cloned())
    }
}
