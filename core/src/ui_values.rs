//! Decoding of the Actions window's tagged value buffer.
//!
//! The native window exposes its visible list as a flat array of tagged
//! values. The layout constants below are versioned against the current
//! client build; a client update that moves them touches this module and
//! nothing else.

use slotwatch_types::{ActionId, ActionSourceKind};

/// Index of the first action entry in the value buffer.
const FIRST_ACTION_INDEX: usize = 16;
/// Distance between consecutive action entries.
const ACTION_STRIDE: usize = 8;
/// Offset from an action entry to its visibility flags.
const FLAGS_OFFSET: usize = 4;
/// Bit set in the flags value when the entry is hidden from the list.
const HIDDEN_MASK: u32 = 0x100;

/// A single tagged value from the window's buffer, mirroring the
/// client's value union. Only the tags the walk below inspects are
/// distinguished; everything else decodes to `Null`.
#[derive(Debug, Clone, PartialEq)]
pub enum UiValue {
    UInt(u32),
    Int(i32),
    Bool(bool),
    Text(String),
    Null,
}

/// Tabs of the native Actions window backed by an action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionTab {
    ClassJob,
    GatheringRole,
    CombatRole,
}

impl ActionTab {
    /// Map the window's raw tab selector. Values without a backing list
    /// (traits, pvp, pet tabs) return `None` and degrade to an empty
    /// display order downstream.
    pub fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            0 => Some(Self::ClassJob),
            2 => Some(Self::GatheringRole),
            8 => Some(Self::CombatRole),
            _ => None,
        }
    }

    /// The host list this tab displays.
    pub fn source(self) -> ActionSourceKind {
        match self {
            Self::ClassJob => ActionSourceKind::ClassJob,
            Self::GatheringRole => ActionSourceKind::GatheringRole,
            Self::CombatRole => ActionSourceKind::CombatRole,
        }
    }
}

/// Extract the display-ordered action ids for the given tab selector.
///
/// Walks the buffer from [`FIRST_ACTION_INDEX`] in [`ACTION_STRIDE`]
/// steps. The walk ends at the first entry that is not UInt-tagged (the
/// end marker of the valid range); entries whose flags carry
/// [`HIDDEN_MASK`] are skipped. An unrecognized selector yields an empty
/// order.
pub fn extract_display_order(values: &[UiValue], tab_selector: u32) -> Vec<ActionId> {
    if ActionTab::from_selector(tab_selector).is_none() {
        return Vec::new();
    }

    let mut order = Vec::new();
    let mut index = FIRST_ACTION_INDEX;
    while let Some(UiValue::UInt(action_id)) = values.get(index) {
        // A non-UInt flag entry reads as "visible"; only the action
        // entry's tag terminates the walk.
        let hidden = matches!(
            values.get(index + FLAGS_OFFSET),
            Some(UiValue::UInt(flags)) if flags & HIDDEN_MASK != 0
        );
        if !hidden {
            order.push(*action_id);
        }
        index += ACTION_STRIDE;
    }
    order
}
