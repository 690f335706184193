//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- CANDLESTICKS ---
    pub candle_bullish_color: Color32,
    pub candle_bearish_color: Color32,
    pub candle_width_pct: f64,  // 0.0 to 1.0 (relative to one day)
    pub candle_wick_width: f32, // Pixels

    // --- VOLUME PANEL ---
    pub volume_bar_color: Color32,
    pub volume_bar_width_pct: f64,

    // --- RETURNS TRACES ---
    /// Qualitative palette cycled across the relative-returns lines.
    pub trace_palette: &'static [Color32],
    pub trace_line_width: f32,

    // Gradient stops for the correlation heatmap (blues, low to high)
    pub heatmap_gradient_colors: &'static [&'static str],
    pub heatmap_cell_gap_pct: f64,

    // Scatter styling for the stored efficient-frontier figure
    pub scatter_marker_radius: f32,
    pub scatter_line_width: f32,

    pub bar_fill_color: Color32,

    pub plot_y_padding_pct: f64, // Y-Axis padding factor (e.g. 0.05 = 5% padding top and bottom)
    pub plot_x_padding_pct: f64,

    // --- SEMANTIC COLORS ---
    pub color_profit: Color32,
    pub color_loss: Color32,
    pub color_warning: Color32,

    pub color_text_neutral: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    candle_bullish_color: Color32::from_rgb(38, 166, 154), // TradingView Green
    candle_bearish_color: Color32::from_rgb(239, 83, 80),  // TradingView Red
    candle_width_pct: 0.8, // 80% width leaves a small gap between candles
    candle_wick_width: 1.0,

    volume_bar_color: Color32::from_rgb(100, 149, 237),
    volume_bar_width_pct: 0.8,

    trace_palette: &[
        Color32::from_rgb(141, 211, 199),
        Color32::from_rgb(255, 255, 179),
        Color32::from_rgb(190, 186, 218),
        Color32::from_rgb(251, 128, 114),
        Color32::from_rgb(128, 177, 211),
        Color32::from_rgb(253, 180, 98),
        Color32::from_rgb(179, 222, 105),
        Color32::from_rgb(252, 205, 229),
        Color32::from_rgb(217, 217, 217),
    ],
    trace_line_width: 1.5,

    // Blues ramp, weakest to strongest correlation
    heatmap_gradient_colors: &[
        "#f7fbff", "#deebf7", "#c6dbef", "#9ecae1", "#6baed6", "#4292c6", "#2171b5", "#08519c",
        "#08306b",
    ],
    heatmap_cell_gap_pct: 0.04,

    scatter_marker_radius: 3.0,
    scatter_line_width: 2.0,

    bar_fill_color: Color32::from_rgb(128, 177, 211),

    plot_y_padding_pct: 0.05,
    plot_x_padding_pct: 0.02,

    color_profit: Color32::from_rgb(100, 255, 100),
    color_loss: Color32::from_rgb(255, 80, 80),
    color_warning: Color32::from_rgb(255, 215, 0),

    color_text_neutral: Color32::LIGHT_GRAY,
    color_text_subdued: Color32::GRAY,
};

impl PlotConfig {
    /// Palette color for the n-th returns trace.
    pub fn trace_color(&self, idx: usize) -> Color32 {
        self.trace_palette[idx % self.trace_palette.len()]
    }
}
