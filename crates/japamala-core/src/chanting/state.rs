use std::collections::BTreeSet;

use tracing::warn;

use super::{ChantingStats, SessionState};
use crate::catalog::{Catalog, Mantra, DEFAULT_MANTRA_ID};
use crate::error::StoreError;
use crate::storage::{keys, read_record, KeyValueStore};

/// Everything the engine owns, persisted together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChantingState {
    pub session: SessionState,
    pub stats: ChantingStats,
    pub custom_mantras: Vec<Mantra>,
    pub favorites: BTreeSet<String>,
}

impl ChantingState {
    /// Read each record from the store. Missing or malformed records start
    /// from their defaults.
    ///
    /// # Errors
    /// Returns an error if a store read fails.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Result<Self, StoreError> {
        Ok(Self {
            session: read_record(store, keys::SESSION)?,
            stats: read_record(store, keys::STATS)?,
            custom_mantras: read_record(store, keys::CUSTOM_MANTRAS)?,
            favorites: read_record(store, keys::FAVORITES)?,
        })
    }

    pub(crate) fn catalog(&self) -> Catalog<'_> {
        Catalog::new(&self.custom_mantras)
    }

    /// Encode every record for a single `set_many` write.
    pub(crate) fn to_entries(&self) -> Result<Vec<(&'static str, String)>, serde_json::Error> {
        Ok(vec![
            (keys::SESSION, serde_json::to_string(&self.session)?),
            (keys::STATS, serde_json::to_string(&self.stats)?),
            (keys::CUSTOM_MANTRAS, serde_json::to_string(&self.custom_mantras)?),
            (keys::FAVORITES, serde_json::to_string(&self.favorites)?),
        ])
    }

    /// Repair references and ranges that stored data may violate.
    /// Returns `true` when anything changed.
    pub(crate) fn normalize(&mut self, cycle_length: u32) -> bool {
        let mut changed = false;

        for mantra in &mut self.custom_mantras {
            if !mantra.is_custom {
                mantra.is_custom = true;
                changed = true;
            }
        }

        if !self.catalog().contains(&self.session.current_mantra_id) {
            warn!(
                mantra_id = %self.session.current_mantra_id,
                "stored active mantra no longer exists, using default"
            );
            self.session.current_mantra_id = DEFAULT_MANTRA_ID.to_string();
            self.session.current_count = 0;
            changed = true;
        }

        if self.session.current_count >= cycle_length {
            warn!(
                count = self.session.current_count,
                cycle_length, "stored count out of range, resetting"
            );
            self.session.current_count = 0;
            changed = true;
        }

        let before = self.favorites.len();
        let custom = &self.custom_mantras;
        self.favorites
            .retain(|id| Catalog::new(custom).contains(id));
        if self.favorites.len() != before {
            warn!(
                dropped = before - self.favorites.len(),
                "dropping favorites that are not in the catalog"
            );
            changed = true;
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::NewMantra;
    use crate::storage::MemoryStore;

    #[test]
    fn load_from_empty_store_is_default() {
        let store = MemoryStore::new();
        assert_eq!(ChantingState::load(&store).unwrap(), ChantingState::default());
    }

    #[test]
    fn entries_roundtrip_through_store() {
        let mut state = ChantingState::default();
        state.session.current_count = 12;
        state.stats.lifetime_count = 12;
        state
            .custom_mantras
            .push(NewMantra::new("x", "X").into_mantra("custom-x".into()));
        state.favorites.insert("custom-x".into());

        let mut store = MemoryStore::new();
        store.set_many(&state.to_entries().unwrap()).unwrap();
        assert_eq!(ChantingState::load(&store).unwrap(), state);
    }

    #[test]
    fn favorites_persist_as_a_list() {
        let mut state = ChantingState::default();
        state.favorites.insert("ram-1".into());
        let entries = state.to_entries().unwrap();
        let (_, json) = entries.iter().find(|(k, _)| *k == keys::FAVORITES).unwrap();
        assert_eq!(json, r#"["ram-1"]"#);
    }

    #[test]
    fn normalize_repairs_dangling_references() {
        let mut state = ChantingState::default();
        state.session.current_mantra_id = "custom-gone".into();
        state.session.current_count = 30;
        state.favorites.insert("custom-gone".into());
        state.favorites.insert("ram-1".into());

        assert!(state.normalize(108));
        assert_eq!(state.session.current_mantra_id, DEFAULT_MANTRA_ID);
        assert_eq!(state.session.current_count, 0);
        assert_eq!(state.favorites, BTreeSet::from(["ram-1".to_string()]));
    }

    #[test]
    fn normalize_clamps_out_of_range_count() {
        let mut state = ChantingState::default();
        state.session.current_count = 500;
        state.session.current_round = 3;
        assert!(state.normalize(108));
        assert_eq!(state.session.current_count, 0);
        assert_eq!(state.session.current_round, 3);
    }

    #[test]
    fn normalize_leaves_valid_state_alone() {
        let mut state = ChantingState::default();
        state.session.current_count = 107;
        assert!(!state.normalize(108));
    }
}
