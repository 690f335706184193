// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod figures;
pub mod models;
mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::App;
pub use data::BucketClient;
pub use domain::Ticker;
pub use models::{DashboardData, PriceSeries};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Cloud bucket holding the dashboard CSVs (overrides POCKETS_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
