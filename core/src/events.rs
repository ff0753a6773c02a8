//! Host lifecycle signals.
//!
//! One-way notifications the plugin host delivers: window lifecycle for
//! the native Actions window, the per-frame tick, and player progression
//! changes. No payload beyond identifiers.

/// Signals routed into the panel session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// The native Actions window finished setup and is on screen.
    ActionWindowOpened,
    /// The native Actions window is about to be torn down.
    ActionWindowClosing,
    /// Per-frame update; also the only safe point to rebuild indexes.
    FrameTick,
    ClassJobChanged { class_job_id: u32 },
    LevelChanged { class_job_id: u32, level: u32 },
}

/// Anything that consumes host signals.
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: &HostSignal);
}
