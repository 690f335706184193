//! Renderers for the precomputed figures (deserialized from `plot_json.csv`).

use colorgrad::Gradient;
use eframe::egui::{Color32, Stroke, Ui, Vec2b};
use egui_plot::{
    Axis, AxisHints, Bar, BarChart, HPlacement, Legend, Line, Plot, PlotPoints, Points, Polygon,
    VPlacement,
};

use crate::config::plot::PLOT_CONFIG;
use crate::figures::{ScatterTrace, StoredFigure, TraceMode};

const STORED_PLOT_HEIGHT: f32 = 340.0;

pub(crate) fn render_stored_figure(ui: &mut Ui, id: &str, figure: &StoredFigure) {
    match figure {
        StoredFigure::Heatmap { labels, values, .. } => render_heatmap(ui, id, labels, values),
        StoredFigure::Scatter {
            x_label,
            y_label,
            traces,
            ..
        } => render_scatter(ui, id, x_label, y_label, traces),
        StoredFigure::Bar { labels, values, .. } => render_bar(ui, id, labels, values),
    }
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgba_unmultiplied(rgba8[0], rgba8[1], rgba8[2], 255)
}

/// Axis whose integer grid marks show category labels (rows use negated y).
fn label_axis(axis: Axis, labels: Vec<String>, negate: bool) -> AxisHints<'static> {
    AxisHints::new(axis).formatter(move |mark, _range| {
        let value = if negate { -mark.value } else { mark.value };
        let idx = value.round();
        if (value - idx).abs() > 0.25 || idx < 0.0 {
            return String::new();
        }
        labels.get(idx as usize).cloned().unwrap_or_default()
    })
}

/// Correlation matrix as colored cells, row 0 at the top like a table.
fn render_heatmap(ui: &mut Ui, id: &str, labels: &[String], values: &[Vec<f64>]) {
    let n = values.len();
    if n == 0 {
        return;
    }

    let grad = colorgrad::GradientBuilder::new()
        .html_colors(PLOT_CONFIG.heatmap_gradient_colors)
        .build::<colorgrad::CatmullRomGradient>()
        .expect("Failed to create color gradient");

    let x_axis = label_axis(Axis::X, labels.to_vec(), false).placement(VPlacement::Bottom);
    let y_axis = label_axis(Axis::Y, labels.to_vec(), true).placement(HPlacement::Left);

    let gap = PLOT_CONFIG.heatmap_cell_gap_pct;

    Plot::new(id.to_string())
        .height(STORED_PLOT_HEIGHT)
        .data_aspect(1.0)
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .label_formatter(|_, _| String::new())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_double_click_reset(false)
        .show_grid(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-0.5..=(n as f64 - 0.5));
            plot_ui.set_plot_bounds_y(-(n as f64 - 0.5)..=0.5);

            for (row, row_values) in values.iter().enumerate() {
                for (col, &value) in row_values.iter().enumerate() {
                    // Correlations live in [-1, 1]; remap onto the gradient.
                    let t = ((value + 1.0) / 2.0).clamp(0.0, 1.0);
                    let color = to_egui_color(grad.at(t as f32));

                    let x = col as f64;
                    let y = -(row as f64);
                    let half = 0.5 - gap / 2.0;
                    let cell = vec![
                        [x - half, y - half],
                        [x + half, y - half],
                        [x + half, y + half],
                        [x - half, y + half],
                    ];
                    plot_ui.polygon(
                        Polygon::new("", PlotPoints::new(cell))
                            .fill_color(color)
                            .stroke(Stroke::NONE),
                    );
                }
            }
        });
}

/// Efficient-frontier style scatter: line and marker traces with a legend.
fn render_scatter(ui: &mut Ui, id: &str, x_label: &str, y_label: &str, traces: &[ScatterTrace]) {
    let x_axis = AxisHints::new_x()
        .label(x_label.to_string())
        .placement(VPlacement::Bottom);
    let y_axis = AxisHints::new_y()
        .label(y_label.to_string())
        .placement(HPlacement::Right);

    Plot::new(id.to_string())
        .height(STORED_PLOT_HEIGHT)
        .legend(Legend::default())
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .show(ui, |plot_ui| {
            for trace in traces {
                match trace.mode {
                    TraceMode::Lines => plot_ui.line(
                        Line::new(trace.name.clone(), PlotPoints::new(trace.points.clone()))
                            .width(PLOT_CONFIG.scatter_line_width),
                    ),
                    TraceMode::Markers => plot_ui.points(
                        Points::new(trace.name.clone(), PlotPoints::new(trace.points.clone()))
                            .radius(PLOT_CONFIG.scatter_marker_radius),
                    ),
                }
            }
        });
}

/// Diversification bars, one per label.
fn render_bar(ui: &mut Ui, id: &str, labels: &[String], values: &[f64]) {
    let x_axis = label_axis(Axis::X, labels.to_vec(), false).placement(VPlacement::Bottom);

    Plot::new(id.to_string())
        .height(STORED_PLOT_HEIGHT)
        .custom_x_axes(vec![x_axis])
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = values
                .iter()
                .enumerate()
                .map(|(idx, &value)| {
                    Bar::new(idx as f64, value)
                        .width(0.6)
                        .fill(PLOT_CONFIG.bar_fill_color)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new("", bars));
        });
}
