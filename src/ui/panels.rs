use eframe::egui::{ComboBox, RichText, Spinner, Ui};

use crate::config::DF;
use crate::domain::Ticker;
use crate::figures::{OhlcVolumeFigure, RelativeReturnsFigure, StoredPlotKind};
use crate::models::DashboardData;
use crate::ui::plot_ohlc::render_detail_plot;
use crate::ui::plot_returns::render_returns_plot;
use crate::ui::plot_stored::render_stored_figure;
use crate::ui::UI_TEXT;

/// UI events the frame loop must act on (each one spawns a fetch).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DashboardAction {
    SubmitReturns,
    SelectIndividual(Ticker),
}

/// Borrowed view of everything the running layout needs.
pub(crate) struct DashboardView<'a> {
    pub data: &'a DashboardData,

    pub returns_selection: &'a mut Vec<Ticker>,
    pub returns_figure: Option<&'a RelativeReturnsFigure>,
    pub returns_pending: bool,

    pub individual_selection: Option<&'a Ticker>,
    pub detail_figure: Option<&'a OhlcVolumeFigure>,
    pub detail_pending: bool,
}

/// The static widget tree: heading, two reactive sections, three
/// precomputed-figure sections. Returns at most one action per frame.
pub(crate) fn render_dashboard(ui: &mut Ui, view: &mut DashboardView<'_>) -> Option<DashboardAction> {
    let mut action = None;

    ui.label(UI_TEXT.intro);
    ui.separator();

    if let Some(a) = render_returns_section(ui, view) {
        action = Some(a);
    }
    ui.separator();

    if let Some(a) = render_individual_section(ui, view) {
        action = Some(a);
    }
    ui.separator();

    render_stored_sections(ui, view);

    action
}

fn render_returns_section(ui: &mut Ui, view: &mut DashboardView<'_>) -> Option<DashboardAction> {
    let mut action = None;

    ui.heading(UI_TEXT.returns_heading);
    ui.label(RichText::new(UI_TEXT.returns_hint).weak());

    // Multi-select: one toggle chip per known ticker
    ui.horizontal_wrapped(|ui| {
        for ticker in &view.data.tickers {
            let mut selected = view.returns_selection.contains(ticker);
            if ui.toggle_value(&mut selected, ticker.as_str()).changed() {
                if selected {
                    view.returns_selection.push(ticker.clone());
                } else {
                    view.returns_selection.retain(|t| t != ticker);
                }
                if DF.log_selection {
                    log::info!("returns selection now {:?}", view.returns_selection);
                }
            }
        }
    });

    ui.horizontal(|ui| {
        if ui.button(UI_TEXT.returns_submit).clicked() {
            action = Some(DashboardAction::SubmitReturns);
        }
        if view.returns_pending {
            ui.add(Spinner::new());
            ui.label(UI_TEXT.status_fetching);
        }
    });

    if let Some(figure) = view.returns_figure {
        render_returns_plot(ui, figure);
    }

    action
}

fn render_individual_section(ui: &mut Ui, view: &mut DashboardView<'_>) -> Option<DashboardAction> {
    let mut action = None;

    ui.heading(UI_TEXT.individual_heading);

    let current_label = view
        .individual_selection
        .map(|t| t.as_str().to_string())
        .unwrap_or_else(|| "-".to_string());

    ui.horizontal(|ui| {
        ComboBox::from_id_salt("individual_ticker")
            .selected_text(current_label)
            .show_ui(ui, |ui| {
                for ticker in &view.data.tickers {
                    let is_current = view.individual_selection == Some(ticker);
                    if ui.selectable_label(is_current, ticker.as_str()).clicked() && !is_current {
                        action = Some(DashboardAction::SelectIndividual(ticker.clone()));
                    }
                }
            });
        if view.detail_pending {
            ui.add(Spinner::new());
            ui.label(UI_TEXT.status_fetching);
        }
    });

    if let Some(figure) = view.detail_figure {
        render_detail_plot(ui, figure);
    }

    action
}

fn render_stored_sections(ui: &mut Ui, view: &DashboardView<'_>) {
    let plots = &view.data.plots;

    ui.heading(UI_TEXT.correlation_heading);
    render_stored_figure(ui, "correlation_plot", plots.get(StoredPlotKind::Correlation));
    ui.separator();

    ui.columns(2, |cols| {
        cols[0].heading(UI_TEXT.frontier_heading);
        render_stored_figure(
            &mut cols[0],
            "frontier_plot",
            plots.get(StoredPlotKind::EfficientFrontier),
        );
        cols[0].label(RichText::new(UI_TEXT.frontier_caption).weak());

        cols[1].heading(UI_TEXT.diversification_heading);
        render_stored_figure(
            &mut cols[1],
            "diversification_plot",
            plots.get(StoredPlotKind::Diversification),
        );
        cols[1].label(RichText::new(UI_TEXT.diversification_caption).weak());
    });
}
