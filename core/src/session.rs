//! Panel session: signal routing and per-frame reconciliation.
//!
//! The session owns the adjustment index and the missing-action list and
//! nothing else owns them. Everything runs on the host's single thread:
//! a signal is handled to completion before the next arrives, so there
//! is no locking and no re-entrancy.

use slotwatch_types::PanelConfig;

use crate::adjust::AdjustmentIndex;
use crate::events::{HostSignal, SignalHandler};
use crate::host::{ActionData, AddonMetrics, GameHost};
use crate::reconcile::{missing_actions, occupied_action_ids};
use crate::ui_values::ActionTab;

/// Runtime state behind the overlay panel.
pub struct PanelSession<H> {
    host: H,
    config: PanelConfig,
    index: AdjustmentIndex,
    missing: Vec<ActionData>,
    addon_metrics: AddonMetrics,
    open: bool,
    /// Rebuild latch, drained at the start of the next frame tick.
    refresh_queued: bool,
}

impl<H: GameHost> PanelSession<H> {
    pub fn new(host: H, config: PanelConfig) -> Self {
        Self {
            host,
            config,
            index: AdjustmentIndex::default(),
            missing: Vec::new(),
            addon_metrics: AddonMetrics::default(),
            open: false,
            refresh_queued: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The current frame's missing actions, in display order.
    pub fn missing_actions(&self) -> &[ActionData] {
        &self.missing
    }

    /// Last observed placement of the native Actions window.
    pub fn addon_metrics(&self) -> AddonMetrics {
        self.addon_metrics
    }

    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn host(&self) -> &H {
        &self.host
    }

    #[cfg(test)]
    pub(crate) fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The one user command: ask the host to open its native Actions
    /// window. The panel itself opens through the window's lifecycle
    /// signals, never directly.
    pub fn open_native_window(&self) {
        self.host.show_action_window();
    }

    /// Adopt a window that was already on screen when the add-on loaded
    /// (installed or reloaded mid-session); the setup signal for it
    /// fired long ago and will not come again.
    pub fn adopt_shown_window(&mut self) {
        if self.host.action_menu().is_some_and(|menu| menu.shown) {
            self.open_panel();
        }
    }

    fn open_panel(&mut self) {
        self.open = true;
        self.queue_refresh();
    }

    /// Queue an index rebuild for the next frame tick. Rebuilds are
    /// coalesced rather than run inline so they never read host memory
    /// in the middle of the host's own update pass.
    fn queue_refresh(&mut self) {
        self.refresh_queued = true;
    }

    /// Progression changed: refresh, but only while the native window is
    /// shown. A hidden window means the panel is closed and the maps get
    /// rebuilt on the next open anyway.
    fn queue_refresh_if_shown(&mut self) {
        if self.host.action_menu().is_some_and(|menu| menu.shown) {
            self.queue_refresh();
        }
    }

    fn drain_refresh(&mut self) {
        if !self.refresh_queued {
            return;
        }
        self.refresh_queued = false;

        match AdjustmentIndex::build(&self.host, &self.config.action_sources) {
            Some(index) => {
                tracing::debug!(
                    "[INDEX] rebuilt: {} actions across {} adjustment sets",
                    index.len(),
                    index.set_count()
                );
                self.index = index;
            }
            // Host state mid-load; keep the stale index, the next
            // trigger retries.
            None => tracing::debug!("[INDEX] host state unavailable, keeping previous index"),
        }
    }

    /// Per-frame pass: snapshot the window and hotbars, rebuild the
    /// missing list from scratch. Any absent host instance skips the
    /// whole pass for this tick.
    fn reconcile(&mut self) {
        let Some(menu) = self.host.action_menu() else {
            return;
        };
        self.addon_metrics = menu.metrics;

        let Some(kind) = self.host.active_hotbar_kind() else {
            return;
        };
        let Some(hotbars) = self.host.hotbars(kind) else {
            return;
        };
        let occupied = occupied_action_ids(&hotbars);

        let tab_actions = ActionTab::from_selector(menu.tab_selector)
            .and_then(|tab| self.host.actions_for(tab.source()))
            .unwrap_or_default();

        self.missing = missing_actions(&menu, &tab_actions, &occupied, &self.index);
    }

    /// Window teardown: both the index and the missing list go together,
    /// and stay empty until the window reopens.
    fn close(&mut self) {
        self.open = false;
        self.refresh_queued = false;
        self.missing.clear();
        self.index.clear();
    }
}

impl<H: GameHost> SignalHandler for PanelSession<H> {
    fn handle_signal(&mut self, signal: &HostSignal) {
        match signal {
            HostSignal::ActionWindowOpened => {
                tracing::info!("[PANEL] action window opened");
                self.open_panel();
            }
            HostSignal::ActionWindowClosing => {
                tracing::info!("[PANEL] action window closing");
                self.close();
            }
            HostSignal::ClassJobChanged { .. } | HostSignal::LevelChanged { .. } => {
                self.queue_refresh_if_shown();
            }
            HostSignal::FrameTick => {
                self.drain_refresh();
                if self.open {
                    self.reconcile();
                }
            }
        }
    }
}
