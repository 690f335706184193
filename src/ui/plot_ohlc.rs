use eframe::egui::{Id, Stroke, Ui, Vec2b};
use egui_plot::{
    Axis, AxisHints, Bar, BarChart, HPlacement, Line, Plot, PlotPoints, PlotUi, Polygon,
    VPlacement,
};

use crate::config::plot::PLOT_CONFIG;
use crate::domain::Candle;
use crate::figures::{OhlcVolumeFigure, PanelKind};
use crate::ui::UI_TEXT;
use crate::utils::{MS_IN_D, epoch_ms_to_date_string};

const PRICE_PANEL_HEIGHT: f32 = 420.0;
const VOLUME_PANEL_HEIGHT: f32 = 140.0;

fn date_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label("Date")
        .formatter(|mark, _range| {
            epoch_ms_to_date_string((mark.value * MS_IN_D as f64) as i64)
        })
        .placement(VPlacement::Bottom)
}

fn price_axis(ticker: &str) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(format!("{}  Price", ticker))
        .placement(HPlacement::Right)
}

fn volume_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label("Volume")
        .formatter(|mark, _range| {
            if mark.value >= 1_000_000.0 {
                format!("{:.1}M", mark.value / 1_000_000.0)
            } else if mark.value >= 1_000.0 {
                format!("{:.0}k", mark.value / 1_000.0)
            } else {
                format!("{:.0}", mark.value)
            }
        })
        .placement(HPlacement::Right)
}

/// Two-panel individual detail: candles on top, volume bars underneath,
/// x-axes linked so pan/zoom stays in step (the range slider stays hidden).
pub(crate) fn render_detail_plot(ui: &mut Ui, figure: &OhlcVolumeFigure) {
    if figure.is_empty() {
        ui.label(UI_TEXT.no_data);
        return;
    }

    let xs = figure.xs();
    let link_group = Id::new("detail_xlink");
    let link_axes = Vec2b { x: true, y: false };

    for panel in OhlcVolumeFigure::panels() {
        match panel {
            PanelKind::Price => render_price_panel(ui, figure, &xs, link_group, link_axes),
            PanelKind::Volume => render_volume_panel(ui, figure, &xs, link_group, link_axes),
        }
    }
}

fn render_price_panel(
    ui: &mut Ui,
    figure: &OhlcVolumeFigure,
    xs: &[f64],
    link_group: Id,
    link_axes: Vec2b,
) {
    Plot::new("detail_price")
        .height(PRICE_PANEL_HEIGHT)
        .link_axis(link_group, link_axes)
        .custom_y_axes(vec![price_axis(figure.ticker.as_str())])
        .show_axes(Vec2b { x: false, y: true }) // date labels live on the volume panel
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (candle, &x) in figure.candles.iter().zip(xs) {
                draw_candle(plot_ui, x, candle);
            }
        });
}

fn render_volume_panel(
    ui: &mut Ui,
    figure: &OhlcVolumeFigure,
    xs: &[f64],
    link_group: Id,
    link_axes: Vec2b,
) {
    Plot::new("detail_volume")
        .height(VOLUME_PANEL_HEIGHT)
        .link_axis(link_group, link_axes)
        .custom_x_axes(vec![date_axis()])
        .custom_y_axes(vec![volume_axis()])
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = figure
                .volumes
                .iter()
                .zip(xs)
                .map(|(&volume, &x)| {
                    Bar::new(x, volume)
                        .width(PLOT_CONFIG.volume_bar_width_pct)
                        .fill(PLOT_CONFIG.volume_bar_color)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new("Volume", bars));
        });
}

fn draw_candle(plot_ui: &mut PlotUi, x: f64, candle: &Candle) {
    let color = match candle.get_type() {
        crate::domain::CandleType::Bullish => PLOT_CONFIG.candle_bullish_color,
        crate::domain::CandleType::Bearish => PLOT_CONFIG.candle_bearish_color,
    };

    // Wick: one vertical line from low to high
    plot_ui.line(
        Line::new("", PlotPoints::new(vec![[x, candle.low], [x, candle.high]]))
            .color(color)
            .width(PLOT_CONFIG.candle_wick_width),
    );

    // Body: filled rectangle between open and close
    let (body_lo, body_hi) = candle.body_range();
    let half_width = PLOT_CONFIG.candle_width_pct / 2.0;
    let points = vec![
        [x - half_width, body_lo],
        [x + half_width, body_lo],
        [x + half_width, body_hi],
        [x - half_width, body_hi],
    ];
    plot_ui.polygon(
        Polygon::new("", PlotPoints::new(points))
            .fill_color(color)
            .stroke(Stroke::new(1.0, color)),
    );
}
