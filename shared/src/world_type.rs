use crate::{Replicate, SpatialHint};

/// Read access to the host world in which spawned objects live.
/// `E` is the world's own handle for an object.
pub trait WorldRefType<E> {
    /// check whether entity exists
    fn has_entity(&self, entity: &E) -> bool;
    /// check whether entity carries the network identity facet, which is
    /// required for it to be tracked as a networked object
    fn has_identity(&self, entity: &E) -> bool;
    /// number of replicated components attached to the entity
    fn replica_count(&self, entity: &E) -> usize;
}

/// Mutable access to the host world, used to instantiate templates, let
/// spawn handlers build objects, and write replicated state
pub trait WorldMutType<E>: WorldRefType<E> {
    // Entities
    /// spawn an empty entity
    fn spawn_entity(&mut self) -> E;
    /// deep-copy an entity and all its components, returns None if the
    /// source entity no longer exists
    fn duplicate_entity(&mut self, entity: &E) -> Option<E>;
    /// despawn an entity
    fn despawn_entity(&mut self, entity: &E);
    /// attach the network identity facet to an entity
    fn insert_identity(&mut self, entity: &E);

    // Components
    /// attach a replicated component, appended after existing ones
    fn insert_boxed_replica(&mut self, entity: &E, replica: Box<dyn Replicate>);
    /// gets an entity's replicated component by position
    fn replica_mut(&mut self, entity: &E, index: usize) -> Option<&mut dyn Replicate>;
    /// write whichever spatial fields are present onto the entity
    fn apply_spatial(&mut self, entity: &E, spatial: &SpatialHint);
}
