//! Action adjustment indexing.
//!
//! The client replaces actions as the player levels: a base action and
//! its upgraded variants all resolve to one canonical "adjusted" id and
//! behave as the same hotbar slot. The index holds both directions of
//! that relation so the reconciler can ask "is anything equivalent to
//! this action already slotted?" in constant time.

use std::collections::HashSet;

use hashbrown::HashMap;
use slotwatch_types::{ActionId, ActionSourceKind};

use crate::host::{ActionData, ActionMenuQuery, ActionResolver, PlayerQuery};

/// Raw-to-adjusted mapping and its inverse, rebuilt whenever the player's
/// class, job, or level changes while the panel is visible.
///
/// An instance is immutable between rebuilds; [`AdjustmentIndex::build`]
/// returns a fresh value and the session swaps it in wholesale, so the
/// reconciler never observes a half-built index.
#[derive(Debug, Clone, Default)]
pub struct AdjustmentIndex {
    /// Raw action id -> adjusted (canonical) id.
    cache: HashMap<ActionId, ActionId>,
    /// Adjusted id -> raw ids resolving to it, in filtered-input order.
    sets: HashMap<ActionId, Vec<ActionId>>,
}

impl AdjustmentIndex {
    /// Rebuild from live host state.
    ///
    /// Unions the configured source lists by action id (first occurrence
    /// wins), keeps actions that are slotable and within the player's
    /// current level, and resolves each through the host.
    ///
    /// Returns `None` without partial results if any required host state
    /// is unavailable; the caller keeps its previous index. Stale data
    /// beats partial data here, and the next class/level/open trigger
    /// retries anyway.
    pub fn build<H>(host: &H, sources: &[ActionSourceKind]) -> Option<Self>
    where
        H: PlayerQuery + ActionMenuQuery + ActionResolver,
    {
        let player = host.player()?;

        let mut seen: HashSet<ActionId> = HashSet::new();
        let mut unioned: Vec<ActionData> = Vec::new();
        for source in sources {
            for action in host.actions_for(*source)? {
                if seen.insert(action.action_id) {
                    unioned.push(action);
                }
            }
        }

        let mut index = Self::default();
        for action in unioned
            .iter()
            .filter(|a| a.slotable && a.required_level <= player.level)
        {
            let adjusted = host.resolve_adjusted(action.action_id)?;
            index.cache.insert(action.action_id, adjusted);
            index.sets.entry(adjusted).or_default().push(action.action_id);
        }
        Some(index)
    }

    /// Adjusted id for a raw action id, if the action made it through the
    /// slotable/level filter on the last rebuild.
    pub fn adjusted(&self, raw: ActionId) -> Option<ActionId> {
        self.cache.get(&raw).copied()
    }

    /// Raw ids collapsing to the given adjusted id.
    ///
    /// An adjusted id the index has never seen yields an empty slice
    /// rather than a panic. By construction that never happens for ids
    /// coming out of [`AdjustmentIndex::adjusted`]; the reconciler reads
    /// an empty set as "already represented" so inconsistent state drops
    /// a row instead of fabricating one.
    pub fn set_for(&self, adjusted: ActionId) -> &[ActionId] {
        self.sets.get(&adjusted).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    /// Drop both maps. Invoked on window close together with the
    /// missing-action list.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.sets.clear();
    }

    #[cfg(test)]
    pub(crate) fn cached_raw_ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.cache.keys().copied()
    }

    /// Break the construction invariant on purpose, for the fail-safe
    /// reconciler tests.
    #[cfg(test)]
    pub(crate) fn remove_set_for_tests(&mut self, adjusted: ActionId) {
        self.sets.remove(&adjusted);
    }
}
