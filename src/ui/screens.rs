use eframe::egui::{CentralPanel, Context, Grid, ProgressBar, RichText, ScrollArea, Ui};

use crate::app::BootstrapState;
use crate::config::plot::PLOT_CONFIG;
use crate::data::SyncStatus;
use crate::ui::UI_TEXT;

pub(crate) fn render_bootstrap(ctx: &Context, state: &BootstrapState) {
    CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(20.0);
            ui.heading(
                RichText::new(UI_TEXT.ls_title)
                    .size(24.0)
                    .strong()
                    .color(PLOT_CONFIG.color_warning),
            );
            ui.label(
                RichText::new(UI_TEXT.ls_subtitle)
                    .italics()
                    .color(PLOT_CONFIG.color_text_neutral),
            );
            ui.add_space(20.0);

            let total = state.objects.len();
            let done = state.completed + state.failed;
            let progress = if total > 0 {
                done as f32 / total as f32
            } else {
                0.0
            };
            ui.add(
                ProgressBar::new(progress)
                    .show_percentage()
                    .animate(true)
                    .text(format!("Loaded {}/{}", done, total)),
            );
            if state.failed > 0 {
                ui.add_space(5.0);
                ui.label(
                    RichText::new(format!(
                        "{} {} {}",
                        UI_TEXT.label_warning, state.failed, UI_TEXT.label_failures
                    ))
                    .color(PLOT_CONFIG.color_loss),
                );
            }
            if let Some(fatal) = &state.fatal {
                ui.add_space(10.0);
                ui.label(RichText::new(fatal).color(PLOT_CONFIG.color_loss));
            }
            ui.add_space(20.0);
        });

        render_loading_grid(ui, state);
    });
}

fn render_loading_grid(ui: &mut Ui, state: &BootstrapState) {
    ScrollArea::vertical().show(ui, |ui| {
        Grid::new("loading_grid")
            .striped(true)
            .spacing([20.0, 10.0])
            .min_col_width(250.0)
            .show(ui, |ui| {
                for (object, status) in state.objects.values() {
                    let (status_text, status_color) = match status {
                        SyncStatus::Pending => ("-".to_string(), PLOT_CONFIG.color_text_subdued),
                        SyncStatus::Syncing => {
                            ("syncing".to_string(), PLOT_CONFIG.color_warning)
                        }
                        SyncStatus::Completed(rows) => {
                            (format!("{} rows", rows), PLOT_CONFIG.color_profit)
                        }
                        SyncStatus::Failed(err) => (err.clone(), PLOT_CONFIG.color_loss),
                    };
                    ui.label(RichText::new(object).color(PLOT_CONFIG.color_text_neutral));
                    ui.label(RichText::new(status_text).color(status_color));
                    ui.end_row();
                }
            });
    });
}
