// src/app/state.rs

use std::collections::BTreeMap;

use crate::data::SyncStatus;

#[derive(Clone)]
pub(crate) struct RunningState;

pub(crate) enum AppState {
    Bootstrapping(BootstrapState),
    Running(RunningState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Bootstrapping(BootstrapState::default())
    }
}

#[derive(Default, Clone)]
pub(crate) struct BootstrapState {
    /// Startup objects by fetch order: name and latest status.
    pub(crate) objects: BTreeMap<usize, (String, SyncStatus)>,
    pub(crate) completed: usize,
    pub(crate) failed: usize,
    /// Set when the whole load is unrecoverable (the app stays on this screen).
    pub(crate) fatal: Option<String>,
}
