//! Fabricated host for the core test suites.
//!
//! Every query answers from plain fields, and each availability flag
//! simulates one of the host instances going away mid-session.

use std::cell::Cell;

use hashbrown::HashMap;
use slotwatch_types::{ActionId, ActionSourceKind, HotbarKind};

use crate::host::{
    ActionData, ActionMenuQuery, ActionMenuSnapshot, ActionResolver, Hotbar, HotbarQuery,
    HotbarSlot, PlayerQuery, PlayerSnapshot,
};
use crate::ui_values::UiValue;

pub(crate) struct TestHost {
    pub player_available: bool,
    pub player_level: u32,
    pub class_job_id: u32,
    pub menu: Option<ActionMenuSnapshot>,
    pub lists_available: bool,
    pub resolver_available: bool,
    pub hotbar_kind: Option<HotbarKind>,
    pub standard_bars: Option<Vec<Hotbar>>,
    pub cross_bars: Option<Vec<Hotbar>>,
    pub show_requests: Cell<u32>,
    source_lists: HashMap<ActionSourceKind, Vec<ActionData>>,
    adjustments: HashMap<ActionId, ActionId>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            player_available: true,
            player_level: 100,
            class_job_id: 1,
            menu: Some(ActionMenuSnapshot {
                shown: true,
                ..Default::default()
            }),
            lists_available: true,
            resolver_available: true,
            hotbar_kind: Some(HotbarKind::Standard),
            standard_bars: Some(Vec::new()),
            cross_bars: Some(Vec::new()),
            show_requests: Cell::new(0),
            source_lists: HashMap::new(),
            adjustments: HashMap::new(),
        }
    }

    pub fn set_actions(&mut self, source: ActionSourceKind, actions: Vec<ActionData>) {
        self.source_lists.insert(source, actions);
    }

    /// Register an upgrade: `raw` resolves to `adjusted`. Unregistered
    /// ids resolve to themselves.
    pub fn set_adjustment(&mut self, raw: ActionId, adjusted: ActionId) {
        self.adjustments.insert(raw, adjusted);
    }

    pub fn menu_mut(&mut self) -> &mut ActionMenuSnapshot {
        self.menu.as_mut().expect("menu fixture present")
    }

    /// Put one standard bar on the grid with the given action slots.
    pub fn slot_standard_actions(&mut self, ids: &[ActionId]) {
        let slots = ids.iter().map(|&id| HotbarSlot::action(id)).collect();
        self.standard_bars = Some(vec![Hotbar { slots }]);
    }
}

/// Slotable weaponskill-category action with a derived icon and name.
pub(crate) fn action(id: ActionId, required_level: u32) -> ActionData {
    ActionData {
        action_id: id,
        category_id: 3,
        required_level,
        slotable: true,
        icon_id: 1000 + id,
        name: format!("Action {id}"),
    }
}

/// Value buffer in the window's documented layout from (id, hidden)
/// pairs.
pub(crate) fn order_buffer(entries: &[(ActionId, bool)]) -> Vec<UiValue> {
    let mut values = vec![UiValue::Null; 16];
    for &(action_id, hidden) in entries {
        values.push(UiValue::UInt(action_id));
        values.extend([UiValue::Null, UiValue::Null, UiValue::Null]);
        values.push(UiValue::UInt(if hidden { 0x100 } else { 0 }));
        values.extend([UiValue::Null, UiValue::Null, UiValue::Null]);
    }
    values
}

impl PlayerQuery for TestHost {
    fn player(&self) -> Option<PlayerSnapshot> {
        self.player_available.then(|| PlayerSnapshot {
            class_job_id: self.class_job_id,
            level: self.player_level,
        })
    }
}

impl ActionMenuQuery for TestHost {
    fn action_menu(&self) -> Option<ActionMenuSnapshot> {
        self.menu.clone()
    }

    fn actions_for(&self, source: ActionSourceKind) -> Option<Vec<ActionData>> {
        if !self.lists_available {
            return None;
        }
        Some(self.source_lists.get(&source).cloned().unwrap_or_default())
    }

    fn show_action_window(&self) {
        self.show_requests.set(self.show_requests.get() + 1);
    }
}

impl HotbarQuery for TestHost {
    fn active_hotbar_kind(&self) -> Option<HotbarKind> {
        self.hotbar_kind
    }

    fn hotbars(&self, kind: HotbarKind) -> Option<Vec<Hotbar>> {
        match kind {
            HotbarKind::Standard => self.standard_bars.clone(),
            HotbarKind::Cross => self.cross_bars.clone(),
        }
    }
}

impl ActionResolver for TestHost {
    fn resolve_adjusted(&self, action_id: ActionId) -> Option<ActionId> {
        self.resolver_available
            .then(|| self.adjustments.get(&action_id).copied().unwrap_or(action_id))
    }
}
