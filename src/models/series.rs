use serde::{Deserialize, Serialize};

use crate::domain::{Candle, Ticker};

/// Column-oriented price history for one ticker, one row per trading day.
/// All columns share the same length and ordering as the source CSV.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSeries {
    pub ticker: Ticker,
    pub timestamps: Vec<i64>,
    pub opens: Vec<f64>,
    pub highs: Vec<f64>,
    pub lows: Vec<f64>,
    pub closes: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl PriceSeries {
    pub fn empty(ticker: Ticker) -> Self {
        Self {
            ticker,
            timestamps: vec![],
            opens: vec![],
            highs: vec![],
            lows: vec![],
            closes: vec![],
            volumes: vec![],
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn candle(&self, idx: usize) -> Candle {
        Candle::new(
            self.timestamps[idx],
            self.opens[idx],
            self.highs[idx],
            self.lows[idx],
            self.closes[idx],
            self.volumes[idx],
        )
    }

    /// Close price normalized to the first observation: `close/close[0] - 1`.
    /// A non-positive first close yields a flat zero series rather than infs.
    pub fn relative_returns(&self) -> Vec<f64> {
        let Some(&first) = self.closes.first() else {
            return vec![];
        };
        if first.abs() < f64::EPSILON {
            return vec![0.0; self.closes.len()];
        }
        self.closes.iter().map(|c| (c / first) - 1.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(closes: &[f64]) -> PriceSeries {
        let n = closes.len();
        PriceSeries {
            ticker: Ticker::new("TEST"),
            timestamps: (0..n as i64).collect(),
            opens: closes.to_vec(),
            highs: closes.to_vec(),
            lows: closes.to_vec(),
            closes: closes.to_vec(),
            volumes: vec![1.0; n],
        }
    }

    #[test]
    fn returns_start_at_zero() {
        let rets = series(&[50.0, 55.0, 45.0]).relative_returns();
        assert_eq!(rets[0], 0.0);
        assert!((rets[1] - 0.1).abs() < 1e-12);
        assert!((rets[2] + 0.1).abs() < 1e-12);
    }

    #[test]
    fn zero_first_close_does_not_blow_up() {
        let rets = series(&[0.0, 10.0]).relative_returns();
        assert_eq!(rets, vec![0.0, 0.0]);
    }

    #[test]
    fn empty_series_yields_empty_returns() {
        assert!(series(&[]).relative_returns().is_empty());
    }
}
