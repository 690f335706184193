mod panels;
mod plot_ohlc;
mod plot_returns;
mod plot_stored;
mod screens;
mod ui_config;
mod ui_text;

pub(crate) use panels::{DashboardAction, DashboardView, render_dashboard};
pub(crate) use screens::render_bootstrap;
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
