use std::{
    collections::{hash_map::Entry, HashMap},
    hash::Hash,
};

use mirage_shared::{AssetId, NetworkId, SceneId};

use crate::error::IdentityConflictError;

/// Where the object bound to a network id came from
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SpawnOrigin {
    /// A pre-placed scene object, owned by whoever placed it
    Scene(SceneId),
    /// Instantiated from the template registered for the asset id
    Template(AssetId),
    /// Built by the spawn handler registered for the asset id
    Handler(AssetId),
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct IdentityRecord<E: Copy> {
    pub entity: E,
    pub origin: SpawnOrigin,
}

/// Maps every network id to the live local object representing it.
/// Holds at most one record per network id.
#[derive(Debug)]
pub struct IdentityTable<E: Copy + Eq + Hash> {
    records: HashMap<NetworkId, IdentityRecord<E>>,
}

impl<E: Copy + Eq + Hash> Default for IdentityTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy + Eq + Hash> IdentityTable<E> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn entity(&self, network_id: &NetworkId) -> Option<E> {
        self.records.get(network_id).map(|record| record.entity)
    }

    pub fn record(&self, network_id: &NetworkId) -> Option<&IdentityRecord<E>> {
        self.records.get(network_id)
    }

    pub fn contains(&self, network_id: &NetworkId) -> bool {
        self.records.contains_key(network_id)
    }

    /// Binds `entity` to `network_id`. Registering the same entity again is
    /// a no-op; registering a different one fails and leaves the table as is.
    pub fn register(
        &mut self,
        network_id: NetworkId,
        entity: E,
        origin: SpawnOrigin,
    ) -> Result<(), IdentityConflictError> {
        match self.records.entry(network_id) {
            Entry::Occupied(occupied) => {
                if occupied.get().entity == entity {
                    Ok(())
                } else {
                    Err(IdentityConflictError { network_id })
                }
            }
            Entry::Vacant(vacant) => {
                vacant.insert(IdentityRecord { entity, origin });
                Ok(())
            }
        }
    }

    pub fn remove(&mut self, network_id: &NetworkId) -> Option<IdentityRecord<E>> {
        self.records.remove(network_id)
    }

    pub fn network_ids(&self) -> Vec<NetworkId> {
        self.records.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NetworkId, &IdentityRecord<E>)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
