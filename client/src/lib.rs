//! # Mirage Client
//! Resolves the spawn directives an authoritative server sends into local
//! objects: reusing objects that already exist, binding objects placed in the
//! scene before the session began, instantiating registered templates, or
//! delegating to custom spawn handlers. Then applies the initial replicated
//! state.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces
)]

extern crate log;

pub use mirage_shared::{
    AssetId, NetworkId, Replicate, SceneId, SpatialHint, SpawnDirective, UnspawnDirective,
    WorldMutType, WorldRefType,
};

mod config;
mod error;
mod identity_table;
mod payload_applier;
mod spawn_handler;
mod spawn_registry;
mod spawn_resolver;
mod spawner;

pub use config::{ExistingPayload, SpawnConfig};
pub use error::{IdentityConflictError, RegistryError, SpawnError, SpawnFailed};
pub use identity_table::{IdentityRecord, IdentityTable, SpawnOrigin};
pub use payload_applier::PayloadApplier;
pub use spawn_handler::SpawnHandler;
pub use spawn_registry::{AssetSpawner, SpawnRegistry};
pub use spawn_resolver::{Resolution, ResolutionOutcome, SpawnResolver};
pub use spawner::Spawner;
