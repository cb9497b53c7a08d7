use std::hash::Hash;

use log::{info, warn};

use mirage_shared::{NetworkId, SpawnDirective, UnspawnDirective, WorldMutType};

use crate::{
    config::{ExistingPayload, SpawnConfig},
    error::SpawnFailed,
    identity_table::{IdentityTable, SpawnOrigin},
    payload_applier::PayloadApplier,
    spawn_registry::SpawnRegistry,
    spawn_resolver::{Resolution, ResolutionOutcome, SpawnResolver},
};

/// Owns the spawn state of one network session: which network ids are bound
/// to which local objects, and what the registry knows how to spawn.
pub struct Spawner<E: Copy + Eq + Hash> {
    config: SpawnConfig,
    identities: IdentityTable<E>,
    registry: SpawnRegistry<E>,
}

impl<E: Copy + Eq + Hash> Spawner<E> {
    pub fn new(config: SpawnConfig) -> Self {
        Self::with_registry(config, SpawnRegistry::new())
    }

    pub fn with_registry(config: SpawnConfig, registry: SpawnRegistry<E>) -> Self {
        Self {
            config,
            identities: IdentityTable::new(),
            registry,
        }
    }

    pub fn config(&self) -> &SpawnConfig {
        &self.config
    }

    pub fn registry(&self) -> &SpawnRegistry<E> {
        &self.registry
    }

    /// Registration must not happen while directives are being processed
    pub fn registry_mut(&mut self) -> &mut SpawnRegistry<E> {
        &mut self.registry
    }

    pub fn identities(&self) -> &IdentityTable<E> {
        &self.identities
    }

    pub fn entity(&self, network_id: &NetworkId) -> Option<E> {
        self.identities.entity(network_id)
    }

    pub fn resolver(&mut self) -> SpawnResolver<'_, E> {
        SpawnResolver::new(&mut self.identities, &mut self.registry)
    }

    /// Resolves the directive to a local object, then applies its initial
    /// state. A directive for an object that already exists only has its
    /// payload applied if the config asks for it.
    pub fn spawn<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        directive: &SpawnDirective,
    ) -> Result<Resolution<E>, SpawnFailed> {
        let resolution = self.resolver().resolve(world, directive)?;

        let reapply = match resolution.outcome {
            ResolutionOutcome::Existing => self.config.existing_payload == ExistingPayload::Reapply,
            ResolutionOutcome::Spawned(_) => true,
        };
        if !reapply {
            return Ok(resolution);
        }

        if let Err(cause) = PayloadApplier::apply(world, &resolution.entity, directive) {
            if !resolution.outcome.is_existing() && self.config.rollback_on_corrupt_payload {
                self.unspawn(world, &directive.network_id);
            }
            let failed = SpawnFailed::new(directive, cause);
            failed.report();
            return Err(failed);
        }

        Ok(resolution)
    }

    pub fn receive_unspawn<W: WorldMutType<E>>(
        &mut self,
        world: &mut W,
        directive: &UnspawnDirective,
    ) -> Option<E> {
        self.unspawn(world, &directive.network_id)
    }

    /// Unbinds the network id and disposes of its object according to where
    /// it came from. Scene objects are left in the world.
    pub fn unspawn<W: WorldMutType<E>>(&mut self, world: &mut W, network_id: &NetworkId) -> Option<E> {
        let Some(record) = self.identities.remove(network_id) else {
            warn!("received unspawn for unknown network object {}", network_id);
            return None;
        };

        match record.origin {
            SpawnOrigin::Scene(_) => {}
            SpawnOrigin::Template(_) => world.despawn_entity(&record.entity),
            SpawnOrigin::Handler(asset_id) => {
                let handler = match self.registry.asset_spawner_mut(&asset_id) {
                    Some(spawner) => spawner.handler_mut(),
                    None => None,
                };
                match handler {
                    Some(handler) => handler.unspawn(world, &record.entity),
                    // handler was unregistered while its object was alive
                    None => world.despawn_entity(&record.entity),
                }
            }
        }

        Some(record.entity)
    }

    /// Session teardown: unspawns every bound object
    pub fn reset<W: WorldMutType<E>>(&mut self, world: &mut W) {
        let network_ids = self.identities.network_ids();
        if !network_ids.is_empty() {
            info!("clearing {} spawned network objects", network_ids.len());
        }
        for network_id in network_ids {
            self.unspawn(world, &network_id);
        }
    }
}
