//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit a line for every object fetched from the bucket.
    pub log_fetch: bool,

    /// Log selector changes (ticker multi-select, individual dropdown).
    pub log_selection: bool,

    /// Log figure rebuilds delivered by background fetches.
    pub log_figures: bool,
}

pub const DF: LogFlags = LogFlags {
    log_fetch: true,

    log_selection: false,
    log_figures: false,
};
