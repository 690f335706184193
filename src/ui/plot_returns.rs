use egui_plot::{Axis, AxisHints, HPlacement, Legend, Line, Plot, PlotPoints, VPlacement};

use eframe::egui::Ui;

use crate::config::plot::PLOT_CONFIG;
use crate::figures::RelativeReturnsFigure;
use crate::utils::{MS_IN_D, epoch_ms_to_date_string};

const RETURNS_PLOT_HEIGHT: f32 = 320.0;

fn date_axis() -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label("Date")
        .formatter(|mark, _range| {
            epoch_ms_to_date_string((mark.value * MS_IN_D as f64) as i64)
        })
        .placement(VPlacement::Bottom)
}

fn returns_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label("Returns")
        .formatter(|mark, _range| format!("{:.2}%", mark.value * 100.0))
        .placement(HPlacement::Right)
}

/// Relative stock returns comparison: one line per ticker, all anchored at 0.
pub(crate) fn render_returns_plot(ui: &mut Ui, figure: &RelativeReturnsFigure) {
    Plot::new("returns_plot")
        .height(RETURNS_PLOT_HEIGHT)
        .legend(Legend::default())
        .custom_x_axes(vec![date_axis()])
        .custom_y_axes(vec![returns_axis()])
        .show(ui, |plot_ui| {
            for (idx, trace) in figure.traces.iter().enumerate() {
                plot_ui.line(
                    Line::new(trace.ticker.as_str(), PlotPoints::new(trace.points.clone()))
                        .color(PLOT_CONFIG.trace_color(idx))
                        .width(PLOT_CONFIG.trace_line_width),
                );
            }
        });
}
