use {
    eframe::{
        Frame, Storage,
        egui::{CentralPanel, Context, RichText, ScrollArea, TopBottomPanel, Visuals},
    },
    serde::{Deserialize, Serialize},
    std::{
        mem,
        sync::{
            mpsc,
            mpsc::{Receiver, TryRecvError},
        },
    },
};

use anyhow::Result;

use crate::{
    Cli,
    app::{AppState, BootstrapState, RunningState},
    config::{BUCKET, DF},
    data::{
        BucketClient, ProgressEvent, fetch_dashboard_data, fetch_detail_figure,
        fetch_returns_figure,
    },
    domain::Ticker,
    figures::{OhlcVolumeFigure, RelativeReturnsFigure},
    models::DashboardData,
    ui::{DashboardAction, DashboardView, UI_CONFIG, UI_TEXT, render_bootstrap, render_dashboard},
};

#[cfg(not(target_arch = "wasm32"))]
use {std::thread, tokio::runtime::Runtime};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct App {
    // Persisted across sessions
    pub(crate) returns_selection: Vec<Ticker>,
    pub(crate) individual_selection: Option<Ticker>,

    #[serde(skip)]
    client: BucketClient,
    #[serde(skip)]
    state: AppState,
    #[serde(skip)]
    data: Option<DashboardData>,

    // Startup load channels
    #[serde(skip)]
    data_rx: Option<Receiver<Result<DashboardData>>>,
    #[serde(skip)]
    progress_rx: Option<Receiver<ProgressEvent>>,

    // Relative-returns callback plumbing
    #[serde(skip)]
    returns_figure: Option<RelativeReturnsFigure>,
    #[serde(skip)]
    returns_rx: Option<Receiver<Result<RelativeReturnsFigure>>>,

    // Individual-detail callback plumbing
    #[serde(skip)]
    detail_figure: Option<OhlcVolumeFigure>,
    #[serde(skip)]
    detail_rx: Option<Receiver<Result<OhlcVolumeFigure>>>,

    #[serde(skip)]
    last_error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            returns_selection: Vec::new(),
            individual_selection: None,
            client: BucketClient::default(),
            state: AppState::default(),
            data: None,
            data_rx: None,
            progress_rx: None,
            returns_figure: None,
            returns_rx: None,
            detail_figure: None,
            detail_rx: None,
            last_error: None,
        }
    }
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: App = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        let bucket = BUCKET.resolve_bucket(args.bucket.as_deref());
        log::info!("Using bucket '{}'", bucket);
        app.client = BucketClient::new(&bucket);
        app.state = AppState::Bootstrapping(BootstrapState::default());

        let (data_tx, data_rx) = mpsc::channel();
        let (prog_tx, prog_rx) = mpsc::channel();
        app.data_rx = Some(data_rx);
        app.progress_rx = Some(prog_rx);

        let client = app.client.clone();

        #[cfg(not(target_arch = "wasm32"))]
        thread::spawn(move || {
            let rt = Runtime::new().expect("Failed to create runtime");
            rt.block_on(async move {
                let result = fetch_dashboard_data(&client, Some(prog_tx)).await;
                let _ = data_tx.send(result);
            });
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = fetch_dashboard_data(&client, Some(prog_tx)).await;
            let _ = data_tx.send(result);
        });

        app
    }

    // --- BOOTSTRAP PHASE ---

    pub(crate) fn tick_bootstrap_state(
        &mut self,
        ctx: &Context,
        state: &mut BootstrapState,
    ) -> AppState {
        self.update_loading_progress(state);
        ctx.request_repaint();
        if let Some(next_state) = self.finalize_bootstrap_if_ready(state) {
            return next_state;
        }
        render_bootstrap(ctx, state);
        AppState::Bootstrapping(state.clone())
    }

    fn update_loading_progress(&mut self, state: &mut BootstrapState) {
        use crate::data::SyncStatus;

        if let Some(rx) = &self.progress_rx {
            while let Ok(event) = rx.try_recv() {
                state.objects.insert(event.index, (event.object, event.status));
            }
            state.completed = state
                .objects
                .values()
                .filter(|(_, s)| matches!(s, SyncStatus::Completed(_)))
                .count();
            state.failed = state
                .objects
                .values()
                .filter(|(_, s)| matches!(s, SyncStatus::Failed(_)))
                .count();
        }
    }

    fn finalize_bootstrap_if_ready(&mut self, state: &mut BootstrapState) -> Option<AppState> {
        let rx = self.data_rx.as_ref()?;
        match rx.try_recv() {
            Ok(Ok(data)) => {
                self.restore_initial_selection(&data);
                self.data = Some(data);
                // Both callbacks fire once with the initial selections,
                // exactly like the first page load.
                self.start_returns_fetch();
                self.start_detail_fetch();
                Some(AppState::Running(RunningState))
            }
            Ok(Err(err)) => {
                log::error!("Startup load failed: {:#}", err);
                state.fatal = Some(format!("{:#}", err));
                self.data_rx = None;
                None
            }
            Err(_) => None,
        }
    }

    /// Reconcile persisted selections with freshly loaded data.
    fn restore_initial_selection(&mut self, data: &DashboardData) {
        self.returns_selection
            .retain(|t| data.tickers.contains(t) || data.portfolio_tickers().contains(t));
        if self.returns_selection.is_empty() {
            self.returns_selection = data.portfolio_tickers();
        }

        let individual_valid = self
            .individual_selection
            .as_ref()
            .is_some_and(|t| data.tickers.contains(t));
        if !individual_valid {
            self.individual_selection = data.default_individual();
        }

        if DF.log_selection {
            log::info!(
                "initial selections: returns={:?} individual={:?}",
                self.returns_selection,
                self.individual_selection
            );
        }
    }

    // --- RUNNING PHASE ---

    pub(crate) fn tick_running_state(&mut self, ctx: &Context) {
        self.poll_figure_channels();

        self.render_top_panel(ctx);
        self.render_status_panel(ctx);
        self.render_central_panel(ctx);

        if self.returns_rx.is_some() || self.detail_rx.is_some() {
            // A fetch is in flight; keep polling even without input events.
            ctx.request_repaint();
        }
    }

    fn poll_figure_channels(&mut self) {
        if let Some(rx) = &self.returns_rx {
            match rx.try_recv() {
                Ok(Ok(figure)) => {
                    if DF.log_figures {
                        log::info!("returns figure: {} traces", figure.traces.len());
                    }
                    self.last_error = None;
                    self.returns_figure = Some(figure);
                    self.returns_rx = None;
                }
                Ok(Err(err)) => {
                    log::error!("Relative-returns fetch failed: {:#}", err);
                    self.last_error = Some(format!("{:#}", err));
                    self.returns_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                // Worker died without sending; drop the receiver so the
                // spinner and repaint loop don't run forever.
                Err(TryRecvError::Disconnected) => {
                    log::error!("Relative-returns fetch worker exited without a result");
                    self.last_error = Some("Relative-returns fetch aborted".to_string());
                    self.returns_rx = None;
                }
            }
        }

        if let Some(rx) = &self.detail_rx {
            match rx.try_recv() {
                Ok(Ok(figure)) => {
                    if DF.log_figures {
                        log::info!("detail figure: {} candles", figure.candles.len());
                    }
                    self.last_error = None;
                    self.detail_figure = Some(figure);
                    self.detail_rx = None;
                }
                Ok(Err(err)) => {
                    log::error!("Individual-detail fetch failed: {:#}", err);
                    self.last_error = Some(format!("{:#}", err));
                    self.detail_rx = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    log::error!("Individual-detail fetch worker exited without a result");
                    self.last_error = Some("Individual-detail fetch aborted".to_string());
                    self.detail_rx = None;
                }
            }
        }
    }

    fn start_returns_fetch(&mut self) {
        let (tx, rx) = mpsc::channel();
        self.returns_rx = Some(rx);

        let client = self.client.clone();
        let tickers = self.returns_selection.clone();
        spawn_fetch(tx, async move { fetch_returns_figure(&client, tickers).await });
    }

    fn start_detail_fetch(&mut self) {
        let Some(ticker) = self.individual_selection.clone() else {
            return;
        };
        let (tx, rx) = mpsc::channel();
        self.detail_rx = Some(rx);

        let client = self.client.clone();
        spawn_fetch(tx, async move { fetch_detail_figure(&client, ticker).await });
    }

    fn handle_action(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::SubmitReturns => self.start_returns_fetch(),
            DashboardAction::SelectIndividual(ticker) => {
                if DF.log_selection {
                    log::info!("individual selection -> {}", ticker);
                }
                self.individual_selection = Some(ticker);
                self.start_detail_fetch();
            }
        }
    }

    fn render_top_panel(&self, ctx: &Context) {
        TopBottomPanel::top("title_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.heading(RichText::new(UI_TEXT.title).size(22.0).strong());
            });
    }

    fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(self.client.base_url()).weak());
                    if let Some(err) = &self.last_error {
                        ui.separator();
                        ui.colored_label(crate::config::plot::PLOT_CONFIG.color_loss, err);
                    }
                });
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        let mut action: Option<DashboardAction> = None;

        {
            let Some(data) = &self.data else {
                return;
            };
            let mut view = DashboardView {
                data,
                returns_selection: &mut self.returns_selection,
                returns_figure: self.returns_figure.as_ref(),
                returns_pending: self.returns_rx.is_some(),
                individual_selection: self.individual_selection.as_ref(),
                detail_figure: self.detail_figure.as_ref(),
                detail_pending: self.detail_rx.is_some(),
            };

            CentralPanel::default().show(ctx, |ui| {
                ScrollArea::vertical().show(ui, |ui| {
                    action = render_dashboard(ui, &mut view);
                });
            });
        }

        if let Some(action) = action {
            self.handle_action(action);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        setup_custom_visuals(ctx);
        let current = mem::take(&mut self.state);
        self.state = match current {
            AppState::Bootstrapping(mut s) => self.tick_bootstrap_state(ctx, &mut s),
            AppState::Running(_) => {
                self.tick_running_state(ctx);
                AppState::Running(RunningState)
            }
        };
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        if DF.log_selection {
            log::info!(
                "💾 SAVE: returns={:?} individual={:?}",
                self.returns_selection,
                self.individual_selection
            );
        }
        eframe::set_value(storage, eframe::APP_KEY, self);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}

// One helper per target: run an async fetch off the UI thread and deliver
// its output over the channel.

#[cfg(not(target_arch = "wasm32"))]
fn spawn_fetch<T, F>(tx: mpsc::Sender<T>, fut: F)
where
    T: Send + 'static,
    F: std::future::Future<Output = T> + Send + 'static,
{
    thread::spawn(move || {
        let rt = Runtime::new().expect("Failed to create runtime");
        let output = rt.block_on(fut);
        let _ = tx.send(output);
    });
}

#[cfg(target_arch = "wasm32")]
fn spawn_fetch<T, F>(tx: mpsc::Sender<T>, fut: F)
where
    T: 'static,
    F: std::future::Future<Output = T> + 'static,
{
    wasm_bindgen_futures::spawn_local(async move {
        let _ = tx.send(fut.await);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_fetch_worker_clears_channel_and_reports() {
        let mut app = App::default();
        let (tx, rx) = mpsc::channel::<Result<RelativeReturnsFigure>>();
        app.returns_rx = Some(rx);
        drop(tx); // worker gone, nothing sent

        app.poll_figure_channels();

        assert!(app.returns_rx.is_none());
        assert!(app.last_error.is_some());
    }

    #[test]
    fn pending_fetch_keeps_receiver_alive() {
        let mut app = App::default();
        let (_tx, rx) = mpsc::channel::<Result<OhlcVolumeFigure>>();
        app.detail_rx = Some(rx);

        app.poll_figure_channels();

        assert!(app.detail_rx.is_some());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn delivered_figure_replaces_receiver_and_error() {
        let mut app = App::default();
        app.last_error = Some("stale".to_string());
        let (tx, rx) = mpsc::channel();
        app.returns_rx = Some(rx);
        tx.send(Ok(RelativeReturnsFigure::default())).unwrap();

        app.poll_figure_channels();

        assert!(app.returns_rx.is_none());
        assert!(app.returns_figure.is_some());
        assert!(app.last_error.is_none());
    }
}
