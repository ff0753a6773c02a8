//! Read-only views into host-owned game state.
//!
//! The game client owns every structure this add-on reads: the player
//! progression table, the action lists behind the native Actions window,
//! the hotbar grids, and the window metrics. Each query copies a snapshot
//! out on the spot and returns `None` whenever the backing instance is
//! absent. Snapshots are never cached across ticks; the host only
//! guarantees its pointers for the duration of a single access.

use slotwatch_types::{ActionId, ActionSourceKind, HotbarKind};

use crate::ui_values::UiValue;

/// Window param value the client uses for the role-action list view.
pub const ROLE_ACTION_PARAM: u32 = 41;

// ─────────────────────────────────────────────────────────────────────────────
// Snapshots
// ─────────────────────────────────────────────────────────────────────────────

/// One player-usable action, copied out of a host action list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionData {
    pub action_id: ActionId,
    /// Raw category id; see `slotwatch_types::ActionCategory` for the
    /// values the list views group by.
    pub category_id: u8,
    pub required_level: u32,
    /// Whether this action can ever occupy a hotbar slot.
    pub slotable: bool,
    pub icon_id: u32,
    pub name: String,
}

/// Player identity and progression at the moment of the query.
///
/// `level` is already resolved for the active class/job; the host keeps
/// per-class levels in a table indexed by an exp-array index, and that
/// lookup happens behind [`PlayerQuery::player`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSnapshot {
    pub class_job_id: u32,
    pub level: u32,
}

/// Placement of the native Actions window, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AddonMetrics {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// State of the native Actions window and its backing agent.
#[derive(Debug, Clone, Default)]
pub struct ActionMenuSnapshot {
    /// Whether the native window is currently shown.
    pub shown: bool,
    /// Raw tab selector; see [`crate::ui_values::ActionTab`].
    pub tab_selector: u32,
    /// Compact list view (categories collapsed into one list).
    pub compact_view: bool,
    /// Window param; [`ROLE_ACTION_PARAM`] marks the role-action view.
    pub window_param: u32,
    pub metrics: AddonMetrics,
    /// The window's tagged value buffer, the source of display order.
    pub values: Vec<UiValue>,
}

/// One hotbar slot. Non-action slot kinds (macros, items, emotes) never
/// suppress a missing-action row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotbarSlot {
    pub kind: SlotKind,
    pub action_id: ActionId,
}

impl HotbarSlot {
    pub fn empty() -> Self {
        Self { kind: SlotKind::Empty, action_id: 0 }
    }

    pub fn action(action_id: ActionId) -> Self {
        Self { kind: SlotKind::Action, action_id }
    }
}

/// What a hotbar slot holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Empty,
    Action,
    Macro,
    Item,
    Emote,
    Other,
}

/// One hotbar: a fixed row of slots from either grid family.
#[derive(Debug, Clone, Default)]
pub struct Hotbar {
    pub slots: Vec<HotbarSlot>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Query Traits
// ─────────────────────────────────────────────────────────────────────────────

/// Player progression queries.
pub trait PlayerQuery {
    /// `None` while player data is absent (loading screens, login).
    fn player(&self) -> Option<PlayerSnapshot>;
}

/// Queries against the native Actions window and its agent.
pub trait ActionMenuQuery {
    /// Snapshot of the window and its value buffer. `None` when either
    /// the window or its agent is gone.
    fn action_menu(&self) -> Option<ActionMenuSnapshot>;

    /// The actions in one host list. `None` when the agent is gone;
    /// a present-but-empty list is `Some(vec![])`.
    fn actions_for(&self, source: ActionSourceKind) -> Option<Vec<ActionData>>;

    /// Ask the host to open its native Actions window.
    fn show_action_window(&self);
}

/// Queries against the hotbar grids.
pub trait HotbarQuery {
    /// Which grid family is active, per the host's layout flag.
    fn active_hotbar_kind(&self) -> Option<HotbarKind>;

    /// All bars of one grid family.
    fn hotbars(&self, kind: HotbarKind) -> Option<Vec<Hotbar>>;
}

/// The host's upgrade/replacement resolution function.
pub trait ActionResolver {
    /// Canonical id the given action currently resolves to. Equal to the
    /// input when no upgrade applies; `None` when the resolver instance
    /// is unavailable.
    fn resolve_adjusted(&self, action_id: ActionId) -> Option<ActionId>;
}

/// Everything the panel session needs from the host, injected at
/// construction so the logic runs against fabricated state in tests.
pub trait GameHost: PlayerQuery + ActionMenuQuery + HotbarQuery + ActionResolver {}

impl<T: PlayerQuery + ActionMenuQuery + HotbarQuery + ActionResolver> GameHost for T {}
