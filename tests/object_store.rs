//! End-to-end fetch tests against a local mock bucket.

use pockets::data::{fetch_dashboard_data, fetch_detail_figure, fetch_returns_figure};
use pockets::figures::StoredPlotKind;
use pockets::{BucketClient, Ticker};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TICKERS_CSV: &str = "Tickers\nVAS(AU)\nETHI(AU)\nIOO\n";

const PORTFOLIO_CSV: &str = "\
Ticker,Units,Value
VAS(AU),100,9500.0
ETHI(AU),250,3100.5
";

const VAS_CSV: &str = "\
Date,Open,High,Low,Close,Volume
2024-01-02,95.0,96.2,94.8,96.0,10000
2024-01-03,96.0,97.5,95.9,97.2,12000
2024-01-04,97.2,97.3,95.0,95.5,9000
";

const ETHI_CSV: &str = "\
Date,Open,High,Low,Close,Volume
2024-01-02,12.0,12.4,11.9,12.2,5000
2024-01-03,12.2,12.8,12.1,12.7,7000
";

fn plot_json_csv() -> String {
    let heatmap = r#"{"type":"heatmap","title":"Holdings Correlation","labels":["VASAU","ETHIAU"],"values":[[1.0,0.35],[0.35,1.0]]}"#;
    let frontier = r#"{"type":"scatter","title":"Efficient Frontier","x_label":"Volatility","y_label":"Return","traces":[{"name":"Frontier","mode":"lines","points":[[0.10,0.04],[0.14,0.07],[0.20,0.09]]}]}"#;
    let bar = r#"{"type":"bar","title":"Diversification","labels":["VASAU","ETHIAU"],"values":[0.75,0.25]}"#;

    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["Plot", "JSON"]).unwrap();
    wtr.write_record(["Correlation", heatmap]).unwrap();
    wtr.write_record(["EF", frontier]).unwrap();
    wtr.write_record(["DiverseBar", bar]).unwrap();
    String::from_utf8(wtr.into_inner().unwrap()).unwrap()
}

async fn mount_object(server: &MockServer, name: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", name)))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

async fn mock_bucket() -> MockServer {
    let server = MockServer::start().await;
    mount_object(&server, "tickers.csv", TICKERS_CSV).await;
    mount_object(&server, "portfolio.csv", PORTFOLIO_CSV).await;
    mount_object(&server, "plot_json.csv", &plot_json_csv()).await;
    mount_object(&server, "VASAU.csv", VAS_CSV).await;
    mount_object(&server, "ETHIAU.csv", ETHI_CSV).await;
    server
}

#[tokio::test]
async fn fetch_object_returns_body() {
    let server = mock_bucket().await;
    let client = BucketClient::with_base_url(server.uri());

    let body = client.fetch_object("tickers.csv").await.unwrap();
    assert_eq!(body, TICKERS_CSV);
}

#[tokio::test]
async fn fetch_object_propagates_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tickers.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let client = BucketClient::with_base_url(server.uri());

    let err = client.fetch_object("tickers.csv").await.unwrap_err();
    assert!(err.to_string().contains("404"), "unexpected error: {err:#}");
}

#[tokio::test]
async fn startup_load_assembles_all_three_objects() {
    let server = mock_bucket().await;
    let client = BucketClient::with_base_url(server.uri());

    let data = fetch_dashboard_data(&client, None).await.unwrap();

    assert_eq!(data.tickers.len(), 3);
    assert_eq!(data.tickers[0], Ticker::new("VAS(AU)"));
    assert_eq!(data.portfolio.len(), 2);
    assert_eq!(
        data.plots.get(StoredPlotKind::Correlation).title(),
        "Holdings Correlation"
    );
    assert_eq!(
        data.plots.get(StoredPlotKind::EfficientFrontier).title(),
        "Efficient Frontier"
    );
}

#[tokio::test]
async fn startup_load_fails_when_an_object_is_missing() {
    let server = MockServer::start().await;
    mount_object(&server, "tickers.csv", TICKERS_CSV).await;
    mount_object(&server, "portfolio.csv", PORTFOLIO_CSV).await;
    // plot_json.csv not mounted
    let client = BucketClient::with_base_url(server.uri());

    assert!(fetch_dashboard_data(&client, None).await.is_err());
}

#[tokio::test]
async fn startup_load_reports_progress_per_object() {
    use pockets::data::SyncStatus;
    use std::sync::mpsc;

    let server = mock_bucket().await;
    let client = BucketClient::with_base_url(server.uri());
    let (tx, rx) = mpsc::channel();

    fetch_dashboard_data(&client, Some(tx)).await.unwrap();

    let events: Vec<_> = rx.try_iter().collect();
    let completed: Vec<_> = events
        .iter()
        .filter(|e| matches!(e.status, SyncStatus::Completed(_)))
        .map(|e| e.object.as_str())
        .collect();
    assert_eq!(completed, ["tickers.csv", "portfolio.csv", "plot_json.csv"]);
}

#[tokio::test]
async fn price_series_fetch_strips_parentheses_from_object_name() {
    let server = mock_bucket().await;
    let client = BucketClient::with_base_url(server.uri());

    let series = client
        .fetch_price_series(&Ticker::new("VAS(AU)"))
        .await
        .unwrap();
    assert_eq!(series.ticker.as_str(), "VASAU");
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes, vec![96.0, 97.2, 95.5]);
}

#[tokio::test]
async fn returns_figure_has_one_trace_per_ticker_starting_at_zero() {
    let server = mock_bucket().await;
    let client = BucketClient::with_base_url(server.uri());
    let tickers = vec![Ticker::new("VAS(AU)"), Ticker::new("ETHI(AU)")];

    let figure = fetch_returns_figure(&client, tickers).await.unwrap();

    assert_eq!(figure.traces.len(), 2);
    for trace in &figure.traces {
        let first = trace.points.first().unwrap();
        assert!(first[1].abs() < 1e-12, "trace {} starts at {}", trace.ticker, first[1]);
    }
}

#[tokio::test]
async fn detail_figure_carries_candles_and_volumes_on_one_axis() {
    let server = mock_bucket().await;
    let client = BucketClient::with_base_url(server.uri());

    let figure = fetch_detail_figure(&client, Ticker::new("ETHI(AU)"))
        .await
        .unwrap();

    assert_eq!(figure.candles.len(), 2);
    assert_eq!(figure.volumes.len(), 2);
    assert_eq!(figure.timestamps.len(), 2);
}
