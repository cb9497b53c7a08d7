use mirage_shared::{SpawnDirective, WorldMutType};

/// Builds custom objects for an asset id, in place of a template.
///
/// Any `FnMut(&mut dyn WorldMutType<E>, &SpawnDirective) -> Option<E>` is a
/// SpawnHandler which despawns its objects on unspawn.
pub trait SpawnHandler<E> {
    /// Creates the object for `directive`. The returned object must carry a
    /// network identity, otherwise it is passed straight back to `unspawn`.
    fn spawn(&mut self, world: &mut dyn WorldMutType<E>, directive: &SpawnDirective)
        -> Option<E>;

    /// Disposes of an object this handler spawned, once the server unspawns it
    fn unspawn(&mut self, world: &mut dyn WorldMutType<E>, entity: &E) {
        world.despawn_entity(entity);
    }
}

impl<E, F> SpawnHandler<E> for F
where
    F: FnMut(&mut dyn WorldMutType<E>, &SpawnDirective) -> Option<E>,
{
    fn spawn(
        &mut self,
        world: &mut dyn WorldMutType<E>,
        directive: &SpawnDirective,
    ) -> Option<E> {
        self(world, directive)
    }
}
