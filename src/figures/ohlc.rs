use crate::domain::{Candle, Ticker};
use crate::models::PriceSeries;
use crate::utils::epoch_ms_to_days;

/// The two panels of the individual-detail figure, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    Price,
    Volume,
}

/// Individual-detail handler output: candles over volume bars, one shared
/// x-axis. Both panels index into the same `timestamps`.
#[derive(Debug, Clone)]
pub struct OhlcVolumeFigure {
    pub ticker: Ticker,
    pub timestamps: Vec<i64>,
    pub candles: Vec<Candle>,
    pub volumes: Vec<f64>,
}

impl OhlcVolumeFigure {
    pub fn from_series(series: &PriceSeries) -> Self {
        let candles = (0..series.len()).map(|i| series.candle(i)).collect();
        Self {
            ticker: series.ticker.clone(),
            timestamps: series.timestamps.clone(),
            candles,
            volumes: series.volumes.clone(),
        }
    }

    pub const fn panels() -> [PanelKind; 2] {
        [PanelKind::Price, PanelKind::Volume]
    }

    /// Shared x values (days since epoch) for both panels.
    pub fn xs(&self) -> Vec<f64> {
        self.timestamps.iter().map(|&ts| epoch_ms_to_days(ts)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> PriceSeries {
        PriceSeries {
            ticker: Ticker::new("VAS"),
            timestamps: vec![0, 86_400_000],
            opens: vec![10.0, 11.0],
            highs: vec![12.0, 11.5],
            lows: vec![9.5, 10.5],
            closes: vec![11.0, 10.6],
            volumes: vec![1000.0, 1200.0],
        }
    }

    #[test]
    fn exactly_two_panels_price_then_volume() {
        let panels = OhlcVolumeFigure::panels();
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0], PanelKind::Price);
        assert_eq!(panels[1], PanelKind::Volume);
    }

    #[test]
    fn panels_share_the_x_axis() {
        let fig = OhlcVolumeFigure::from_series(&series());
        // Both panels draw against the same timestamp column.
        assert_eq!(fig.candles.len(), fig.timestamps.len());
        assert_eq!(fig.volumes.len(), fig.timestamps.len());
        assert_eq!(fig.xs().len(), fig.timestamps.len());
    }

    #[test]
    fn candles_carry_the_series_rows() {
        let fig = OhlcVolumeFigure::from_series(&series());
        assert_eq!(fig.candles[1].open, 11.0);
        assert_eq!(fig.candles[1].close, 10.6);
        assert_eq!(fig.volumes[1], 1200.0);
    }
}
