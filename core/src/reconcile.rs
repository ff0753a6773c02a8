//! Missing-action reconciliation.
//!
//! Every frame the panel asks one question: which actions in the list
//! the player is currently looking at are absent from every hotbar slot,
//! even under an upgraded or replaced form? An action whose upgraded
//! variant is slotted is not missing; the two share an adjustment set.

use std::collections::HashSet;

use slotwatch_types::ActionId;

use crate::adjust::AdjustmentIndex;
use crate::host::{ActionData, ActionMenuSnapshot, Hotbar, SlotKind};
use crate::ui_values::extract_display_order;

/// Raw action ids occupying the given bars.
///
/// Empty slots and non-action slot kinds (macros, items, emotes) are
/// ignored, as are action slots the client left zeroed.
pub fn occupied_action_ids(hotbars: &[Hotbar]) -> HashSet<ActionId> {
    let mut occupied = HashSet::new();
    for bar in hotbars {
        for slot in &bar.slots {
            if slot.kind == SlotKind::Action && slot.action_id != 0 {
                occupied.insert(slot.action_id);
            }
        }
    }
    occupied
}

/// Compute the display-ordered actions not represented on any hotbar.
///
/// `tab_actions` is the full action list behind the window's active tab;
/// the display order extracted from the value buffer is joined against
/// it to recover full records, preserving display order. An action
/// survives the filter when it is slotable, known to the index, and no
/// member of its adjustment set occupies a hotbar slot. Duplicate ids
/// (the same action surfacing through two list sources) keep their first
/// occurrence only.
///
/// The result replaces the previous frame's list wholesale.
pub fn missing_actions(
    menu: &ActionMenuSnapshot,
    tab_actions: &[ActionData],
    occupied: &HashSet<ActionId>,
    index: &AdjustmentIndex,
) -> Vec<ActionData> {
    let order = extract_display_order(&menu.values, menu.tab_selector);

    let mut missing = Vec::new();
    let mut emitted: HashSet<ActionId> = HashSet::new();
    for action_id in order {
        let Some(action) = tab_actions.iter().find(|a| a.action_id == action_id) else {
            continue;
        };
        if !action.slotable {
            continue;
        }
        let Some(adjusted) = index.adjusted(action.action_id) else {
            continue;
        };
        // Construction pairs every cache entry with a set; an empty set
        // is inconsistent state and reads as "already represented"
        // rather than surfacing a bogus row.
        let set = index.set_for(adjusted);
        if set.is_empty() || set.iter().any(|id| occupied.contains(id)) {
            continue;
        }
        if !emitted.insert(action.action_id) {
            continue;
        }
        missing.push(action.clone());
    }
    missing
}
