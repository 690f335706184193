mod bootstrap;
mod csv_io;
mod object_store;

pub use bootstrap::{
    ProgressEvent, SyncStatus, fetch_dashboard_data, fetch_detail_figure, fetch_returns_figure,
};
pub use csv_io::{parse_plot_rows, parse_portfolio, parse_price_series, parse_tickers};
pub use object_store::BucketClient;
