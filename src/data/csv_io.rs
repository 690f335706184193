//! CSV record shapes and parsers for the bucket objects.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::domain::{PortfolioRow, Ticker};
use crate::figures::StoredPlotRow;
use crate::models::PriceSeries;
use crate::utils::date_string_to_epoch_ms;

#[derive(Debug, Deserialize)]
struct TickerRecord {
    #[serde(rename = "Tickers")]
    ticker: String,
}

#[derive(Debug, Deserialize)]
struct PortfolioRecord {
    #[serde(rename = "Ticker")]
    ticker: String,
    #[serde(rename = "Units")]
    units: Option<f64>,
    #[serde(rename = "Value")]
    value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct PlotRecord {
    #[serde(rename = "Plot")]
    plot: String,
    #[serde(rename = "JSON")]
    json: String,
}

#[derive(Debug, Deserialize)]
struct PriceRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Open")]
    open: f64,
    #[serde(rename = "High")]
    high: f64,
    #[serde(rename = "Low")]
    low: f64,
    #[serde(rename = "Close")]
    close: f64,
    #[serde(rename = "Volume")]
    volume: f64,
}

fn records<T: for<'de> Deserialize<'de>>(csv_text: &str, what: &str) -> Result<Vec<T>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .with_context(|| format!("malformed {} CSV", what))
}

/// `tickers.csv` -> selector options, file order preserved.
pub fn parse_tickers(csv_text: &str) -> Result<Vec<Ticker>> {
    let rows: Vec<TickerRecord> = records(csv_text, "tickers")?;
    Ok(rows.iter().map(|r| Ticker::new(&r.ticker)).collect())
}

/// `portfolio.csv` -> current holdings.
pub fn parse_portfolio(csv_text: &str) -> Result<Vec<PortfolioRow>> {
    let rows: Vec<PortfolioRecord> = records(csv_text, "portfolio")?;
    Ok(rows
        .into_iter()
        .map(|r| PortfolioRow {
            ticker: Ticker::new(&r.ticker),
            units: r.units,
            value: r.value,
        })
        .collect())
}

/// `plot_json.csv` -> raw stored-plot rows (tag + JSON payload).
pub fn parse_plot_rows(csv_text: &str) -> Result<Vec<StoredPlotRow>> {
    let rows: Vec<PlotRecord> = records(csv_text, "plot_json")?;
    Ok(rows
        .into_iter()
        .map(|r| StoredPlotRow {
            name: r.plot,
            json: r.json,
        })
        .collect())
}

/// `<ticker>.csv` -> column-oriented price history.
pub fn parse_price_series(ticker: Ticker, csv_text: &str) -> Result<PriceSeries> {
    let rows: Vec<PriceRecord> = records(csv_text, "price series")?;

    let mut series = PriceSeries::empty(ticker);
    for row in rows {
        series.timestamps.push(date_string_to_epoch_ms(&row.date)?);
        series.opens.push(row.open);
        series.highs.push(row.high);
        series.lows.push(row.low);
        series.closes.push(row.close);
        series.volumes.push(row.volume);
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ticker_list_and_strips_parens() {
        let tickers = parse_tickers("Tickers\nVAS\nIOO(AU)\n").unwrap();
        assert_eq!(tickers.len(), 2);
        assert_eq!(tickers[1].as_str(), "IOOAU");
    }

    #[test]
    fn parses_portfolio_with_optional_metadata() {
        let csv = "Ticker,Units,Value\nVAS,12,1020.5\nETHI,,\n";
        let rows = parse_portfolio(csv).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].units, Some(12.0));
        assert_eq!(rows[1].ticker.as_str(), "ETHI");
        assert_eq!(rows[1].value, None);
    }

    #[test]
    fn parses_plot_rows_with_quoted_json() {
        let csv = "Plot,JSON\nCorrelation,\"{\"\"type\"\":\"\"heatmap\"\"}\"\n";
        let rows = parse_plot_rows(csv).unwrap();
        assert_eq!(rows[0].name, "Correlation");
        assert_eq!(rows[0].json, r#"{"type":"heatmap"}"#);
    }

    #[test]
    fn parses_price_series() {
        let csv = "Date,Open,High,Low,Close,Volume\n\
                   2024-01-02,10.0,10.5,9.8,10.2,1000\n\
                   2024-01-03,10.2,10.8,10.1,10.7,1500\n";
        let series = parse_price_series(Ticker::new("VAS"), csv).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.closes, vec![10.2, 10.7]);
        assert!(series.timestamps[1] > series.timestamps[0]);
    }

    #[test]
    fn malformed_rows_are_errors() {
        assert!(parse_price_series(Ticker::new("X"), "Date,Open\n2024-01-02,1\n").is_err());
        assert!(
            parse_price_series(
                Ticker::new("X"),
                "Date,Open,High,Low,Close,Volume\nnot-a-date,1,1,1,1,1\n"
            )
            .is_err()
        );
        assert!(parse_portfolio("Ticker,Units,Value\nVAS,abc,1\n").is_err());
    }
}
