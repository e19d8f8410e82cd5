//! The user's inclusion choices for export.
//!
//! Keys are purely positional ([`ArtifactId`]), so flags stay valid across
//! pure re-renders of an unchanged document and are wiped only when a new
//! document is loaded. There is no process-wide state; every session owns
//! its own set.

use sheaf_types::ArtifactId;
use std::collections::HashMap;

#[derive(Debug, Default, Clone)]
pub struct SelectionSet {
    flags: HashMap<ArtifactId, bool>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips the inclusion flag for an artifact. Unknown identities start
    /// from the default `false`.
    pub fn toggle(&mut self, id: ArtifactId) {
        let flag = self.flags.entry(id).or_insert(false);
        *flag = !*flag;
    }

    pub fn set(&mut self, id: ArtifactId, included: bool) {
        self.flags.insert(id, included);
    }

    pub fn is_selected(&self, id: ArtifactId) -> bool {
        self.flags.get(&id).copied().unwrap_or(false)
    }

    /// Identities currently switched on, in no particular order.
    pub fn selected_ids(&self) -> impl Iterator<Item = ArtifactId> + '_ {
        self.flags
            .iter()
            .filter(|&(_, &included)| included)
            .map(|(&id, _)| id)
    }

    /// Called on new-document load; every flag goes back to `false`.
    pub fn reset(&mut self) {
        self.flags.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_unselected() {
        let set = SelectionSet::new();
        assert!(!set.is_selected(ArtifactId::new(0, 0, 0)));
    }

    #[test]
    fn toggle_flips_back_and_forth() {
        let mut set = SelectionSet::new();
        let id = ArtifactId::new(0, 1, 0);
        set.toggle(id);
        assert!(set.is_selected(id));
        set.toggle(id);
        assert!(!set.is_selected(id));
    }

    #[test]
    fn reset_clears_everything() {
        let mut set = SelectionSet::new();
        set.set(ArtifactId::new(0, 0, 0), true);
        set.set(ArtifactId::new(1, 2, 0), true);
        set.reset();
        assert_eq!(set.selected_ids().count(), 0);
    }

    #[test]
    fn flags_are_independent_per_identity() {
        let mut set = SelectionSet::new();
        set.toggle(ArtifactId::new(0, 0, 0));
        assert!(!set.is_selected(ArtifactId::new(0, 0, 1)));
        assert!(!set.is_selected(ArtifactId::new(0, 1, 0)));
    }
}
