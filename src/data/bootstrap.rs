//! Async fetch jobs run off the UI thread. Results come back over mpsc
//! channels polled by the frame loop.

use std::sync::mpsc::Sender;

use anyhow::Result;

use crate::config::BUCKET;
use crate::data::{BucketClient, parse_plot_rows, parse_portfolio, parse_tickers};
use crate::domain::Ticker;
use crate::figures::{
    OhlcVolumeFigure, RelativeReturnsFigure, StoredPlots, build_relative_returns,
};
use crate::models::DashboardData;

/// Per-object progress during the startup load.
#[derive(Debug, Clone)]
pub enum SyncStatus {
    Pending,
    Syncing,
    /// Rows parsed from the object.
    Completed(usize),
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct ProgressEvent {
    pub index: usize,
    pub object: String,
    pub status: SyncStatus,
}

fn report(progress: &Option<Sender<ProgressEvent>>, index: usize, object: &str, status: SyncStatus) {
    if let Some(tx) = progress {
        let _ = tx.send(ProgressEvent {
            index,
            object: object.to_string(),
            status,
        });
    }
}

fn parsed<T>(
    progress: &Option<Sender<ProgressEvent>>,
    index: usize,
    object: &str,
    result: Result<Vec<T>>,
) -> Result<Vec<T>> {
    match &result {
        Ok(rows) => report(progress, index, object, SyncStatus::Completed(rows.len())),
        Err(err) => report(progress, index, object, SyncStatus::Failed(format!("{:#}", err))),
    }
    result
}

/// Startup load: the three fixed objects, fetched and parsed in order.
/// The first failure is reported on the progress channel and propagated.
pub async fn fetch_dashboard_data(
    client: &BucketClient,
    progress: Option<Sender<ProgressEvent>>,
) -> Result<DashboardData> {
    let objects = BUCKET.startup_objects();
    for (index, object) in objects.iter().enumerate() {
        report(&progress, index, object, SyncStatus::Pending);
    }

    let mut bodies = Vec::with_capacity(objects.len());
    for (index, object) in objects.iter().enumerate() {
        report(&progress, index, object, SyncStatus::Syncing);
        match client.fetch_object(object).await {
            Ok(body) => bodies.push(body),
            Err(err) => {
                report(&progress, index, object, SyncStatus::Failed(format!("{:#}", err)));
                return Err(err);
            }
        }
    }

    let tickers = parsed(&progress, 0, objects[0], parse_tickers(&bodies[0]))?;
    let portfolio = parsed(&progress, 1, objects[1], parse_portfolio(&bodies[1]))?;
    let plot_rows = parsed(&progress, 2, objects[2], parse_plot_rows(&bodies[2]))?;

    let plots = StoredPlots::from_rows(&plot_rows)?;

    Ok(DashboardData {
        tickers,
        portfolio,
        plots,
    })
}

/// Relative-returns handler: re-fetch every selected series, then build the
/// comparison figure. No caching; repeated submits re-download.
pub async fn fetch_returns_figure(
    client: &BucketClient,
    tickers: Vec<Ticker>,
) -> Result<RelativeReturnsFigure> {
    let mut series = Vec::with_capacity(tickers.len());
    for ticker in &tickers {
        series.push(client.fetch_price_series(ticker).await?);
    }
    Ok(build_relative_returns(&series))
}

/// Individual-detail handler: one series, one two-panel figure.
pub async fn fetch_detail_figure(client: &BucketClient, ticker: Ticker) -> Result<OhlcVolumeFigure> {
    let series = client.fetch_price_series(&ticker).await?;
    Ok(OhlcVolumeFigure::from_series(&series))
}
