use std::hash::Hash;

use mirage_shared::{SpawnDirective, WorldMutType};

use crate::{
    error::{SpawnError, SpawnFailed},
    identity_table::{IdentityTable, SpawnOrigin},
    spawn_registry::SpawnRegistry,
};

/// How a directive was resolved to its local object
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ResolutionOutcome {
    /// The network id was already bound, nothing was looked up or created
    Existing,
    /// The object was bound to the network id by this resolution
    Spawned(SpawnOrigin),
}

impl ResolutionOutcome {
    pub fn is_existing(&self) -> bool {
        matches!(self, ResolutionOutcome::Existing)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Resolution<E: Copy> {
    pub entity: E,
    pub outcome: ResolutionOutcome,
}

/// Decides which local object represents a spawn directive.
///
/// Precedence, first match wins:
/// 1. an object already bound to the directive's network id
/// 2. the scene object registered for a non-zero scene id (an unknown scene
///    id fails, there is no fall-through to the asset id)
/// 3. an instance of the template registered for the asset id
/// 4. the object built by the spawn handler registered for the asset id
///
/// Newly resolved objects are registered in the IdentityTable before
/// `resolve` returns. Payloads aren't applied here.
pub struct SpawnResolver<'t, E: Copy + Eq + Hash> {
    identities: &'t mut IdentityTable<E>,
    registry: &'t mut SpawnRegistry<E>,
}

impl<'t, E: Copy + Eq + Hash> SpawnResolver<'t, E> {
    pub fn new(identities: &'t mut IdentityTable<E>, registry: &'t mut SpawnRegistry<E>) -> Self {
        Self {
            identities,
            registry,
        }
    }

    pub fn resolve<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        directive: &SpawnDirective,
    ) -> Result<Resolution<E>, SpawnFailed> {
        if let Some(entity) = self.identities.entity(&directive.network_id) {
            return Ok(Resolution {
                entity,
                outcome: ResolutionOutcome::Existing,
            });
        }

        match self.spawn(world, directive) {
            Ok(resolution) => Ok(resolution),
            Err(cause) => {
                let failed = SpawnFailed::new(directive, cause);
                failed.report();
                Err(failed)
            }
        }
    }

    fn spawn<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        directive: &SpawnDirective,
    ) -> Result<Resolution<E>, SpawnError> {
        if directive.is_unidentified() {
            return Err(SpawnError::MissingIdentifier);
        }

        let (entity, origin) = if directive.scene_id.is_scene() {
            let Some(entity) = self.registry.scene_object(&directive.scene_id) else {
                return Err(SpawnError::SceneObjectNotFound(directive.scene_id));
            };
            (entity, SpawnOrigin::Scene(directive.scene_id))
        } else {
            self.spawn_asset(world, directive)?
        };

        self.identities
            .register(directive.network_id, entity, origin)
            .map_err(|conflict| SpawnError::IdentityConflict(conflict.network_id))?;

        Ok(Resolution {
            entity,
            outcome: ResolutionOutcome::Spawned(origin),
        })
    }

    fn spawn_asset<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        directive: &SpawnDirective,
    ) -> Result<(E, SpawnOrigin), SpawnError> {
        let asset_id = directive.asset_id;

        let Some(spawner) = self.registry.asset_spawner_mut(&asset_id) else {
            return Err(SpawnError::UnknownAsset(asset_id));
        };

        // a template shadows any handler under the same asset id
        if let Some(template) = spawner.template() {
            let template = *template;
            return match world.duplicate_entity(&template) {
                Some(entity) => Ok((entity, SpawnOrigin::Template(asset_id))),
                None => Err(SpawnError::RegisteredTemplateMissing(asset_id)),
            };
        }

        let Some(handler) = spawner.handler_mut() else {
            return Err(SpawnError::UnknownAsset(asset_id));
        };

        match handler.spawn(world, directive) {
            None => Err(SpawnError::HandlerReturnedNothing(asset_id)),
            Some(entity) => {
                if world.has_identity(&entity) {
                    Ok((entity, SpawnOrigin::Handler(asset_id)))
                } else {
                    // nothing will track it, hand it back
                    handler.unspawn(world, &entity);
                    Err(SpawnError::HandlerResultInvalid(asset_id))
                }
            }
        }
    }
}
