mod candle;
mod portfolio;
mod ticker;

pub use candle::{Candle, CandleType};
pub use portfolio::PortfolioRow;
pub use ticker::Ticker;
