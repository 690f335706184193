use crate::domain::Ticker;
use crate::models::PriceSeries;
use crate::utils::epoch_ms_to_days;

/// One line of the relative-returns comparison.
#[derive(Debug, Clone)]
pub struct ReturnsTrace {
    pub ticker: Ticker,
    /// `[days_since_epoch, normalized_return]` per observation.
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, Default)]
pub struct RelativeReturnsFigure {
    pub traces: Vec<ReturnsTrace>,
}

/// The relative-returns handler output: one trace per fetched series,
/// each normalized to its own first close.
pub fn build_relative_returns(series: &[PriceSeries]) -> RelativeReturnsFigure {
    let traces = series
        .iter()
        .map(|s| {
            let returns = s.relative_returns();
            let points = s
                .timestamps
                .iter()
                .zip(returns)
                .map(|(&ts, ret)| [epoch_ms_to_days(ts), ret])
                .collect();
            ReturnsTrace {
                ticker: s.ticker.clone(),
                points,
            }
        })
        .collect();

    RelativeReturnsFigure { traces }
}
