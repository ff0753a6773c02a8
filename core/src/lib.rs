pub mod adjust;
pub mod config;
pub mod events;
pub mod host;
pub mod reconcile;
pub mod session;
pub mod ui_values;

#[cfg(test)]
mod test_host;


// Re-exports for convenience
pub use adjust::AdjustmentIndex;
pub use events::{HostSignal, SignalHandler};
pub use host::{ActionData, AddonMetrics, GameHost};
pub use session::PanelSession;
pub use ui_values::{ActionTab, UiValue, extract_display_order};
