//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Every executed or rejected trade.
    pub log_trades: bool,

    /// Route changes, including wallet-gate redirects.
    pub log_navigation: bool,

    pub log_wallet: bool,

    /// Listing submissions (logged as JSON).
    pub log_listing: bool,

    /// Chart geometry per redraw. Very noisy.
    pub log_render: bool,

    /// Frame timings over the slow-frame threshold
    pub log_performance: bool,

    /// Frames slower than this are reported when `log_performance` is on.
    pub slow_frame_micros: u128,
}

pub const DF: LogFlags = LogFlags {
    log_trades: true,
    log_navigation: true,
    log_wallet: true,
    log_listing: true,

    log_render: false,
    log_performance: false,

    slow_frame_micros: 50_000,
};
