//! Shared data and configuration types for Slotwatch.
//!
//! These types are deliberately free of any host-client bindings so the
//! core reconciliation logic and the overlay renderer can both depend on
//! them without dragging in the plugin layer.

pub mod formatting;

use serde::{Deserialize, Serialize};

/// Stable identifier the game client assigns to a player action.
pub type ActionId = u32;

// ─────────────────────────────────────────────────────────────────────────────
// Game Enums
// ─────────────────────────────────────────────────────────────────────────────

/// Action category as the client encodes it in action rows.
///
/// Only the three categories that appear in the Actions window list views
/// are modeled; anything else is carried as a raw id and never grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ActionCategory {
    Spell = 2,
    Weaponskill = 3,
    Ability = 4,
}

impl ActionCategory {
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            2 => Some(Self::Spell),
            3 => Some(Self::Weaponskill),
            4 => Some(Self::Ability),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        self as u8
    }

    /// Plural label shown as a group header above the first action of
    /// this category.
    pub fn header_label(self) -> &'static str {
        match self {
            Self::Spell => "Spells",
            Self::Weaponskill => "Weaponskills",
            Self::Ability => "Abilities",
        }
    }
}

/// The two hotbar grid families the client maintains. Only the active
/// family counts when deciding whether an action is already slotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotbarKind {
    Standard,
    Cross,
}

/// Host-provided action lists the indexer can union together.
///
/// The set that actually gets unioned is configuration, not code: see
/// [`PanelConfig::action_sources`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionSourceKind {
    ClassJob,
    General,
    GatheringRole,
    CombatRole,
    Duty,
}

impl ActionSourceKind {
    /// The sources unioned by default: class/job actions plus both role
    /// action lists.
    pub const DEFAULT_SOURCES: [ActionSourceKind; 3] = [
        ActionSourceKind::ClassJob,
        ActionSourceKind::GatheringRole,
        ActionSourceKind::CombatRole,
    ];
}

// ─────────────────────────────────────────────────────────────────────────────
// Panel Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Which side of the native Actions window the panel attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnchorSide {
    /// Right of the window when it fits on the visible area, else left.
    #[default]
    Auto,
    Left,
    Right,
}

/// User-facing panel settings, loaded from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Action lists unioned when rebuilding the adjustment index.
    pub action_sources: Vec<ActionSourceKind>,
    /// Panel placement relative to the native Actions window.
    pub anchor: AnchorSide,
    /// Scale applied to action icons (the native asset is oversized).
    pub icon_scale: f32,
    /// Vertical gap between action rows, in unscaled pixels.
    pub row_gap: f32,
    /// Show category group headers in the compact list view.
    pub show_category_headers: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            action_sources: ActionSourceKind::DEFAULT_SOURCES.to_vec(),
            anchor: AnchorSide::Auto,
            icon_scale: 0.5,
            row_gap: 5.0,
            show_category_headers: true,
        }
    }
}
