// Define the CandleType enum
#[derive(Debug, PartialEq)]
pub enum CandleType {
    Bullish,
    Bearish,
}

// One trading period of OHLC prices plus traded volume.
#[derive(Debug, Clone, Copy)]
pub struct Candle {
    pub timestamp_ms: i64,

    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,

    pub volume: f64,
}

impl Candle {
    // A constructor for convenience
    pub fn new(timestamp_ms: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Candle {
            timestamp_ms,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    // A method to determine the type of candle
    pub fn get_type(&self) -> CandleType {
        if self.close >= self.open {
            CandleType::Bullish
        } else {
            CandleType::Bearish
        }
    }

    // Returns the low and high of the candle body as a tuple
    pub fn body_range(&self) -> (f64, f64) {
        match self.get_type() {
            CandleType::Bullish => (self.open, self.close),
            CandleType::Bearish => (self.close, self.open),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candle_type_and_body_orientation() {
        let up = Candle::new(0, 10.0, 12.0, 9.0, 11.0, 100.0);
        assert_eq!(up.get_type(), CandleType::Bullish);
        assert_eq!(up.body_range(), (10.0, 11.0));

        let down = Candle::new(0, 11.0, 12.0, 9.0, 10.0, 100.0);
        assert_eq!(down.get_type(), CandleType::Bearish);
        assert_eq!(down.body_range(), (10.0, 11.0));
    }
}
