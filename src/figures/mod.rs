//! Chart figure models. Pure data, built off-thread and handed to the UI.

mod ohlc;
mod returns;
mod stored;

pub use ohlc::{OhlcVolumeFigure, PanelKind};
pub use returns::{RelativeReturnsFigure, ReturnsTrace, build_relative_returns};
pub use stored::{
    ScatterTrace, StoredFigure, StoredPlotKind, StoredPlotRow, StoredPlots, TraceMode,
    lookup_plot_row,
};
