//! # Mirage Shared
//! Identifiers, spawn directives and replicated-state payloads exchanged
//! between a mirage client and the authoritative server.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

pub use mirage_serde as serde;
pub use mirage_serde::{BitReader, BitWrite, BitWriter, Serde, SerdeErr};

mod asset_id;
mod network_id;
mod payload;
mod replicate;
mod scene_id;
mod spatial;
mod spawn_directive;
mod world_type;

pub use asset_id::AssetId;
pub use network_id::NetworkId;
pub use payload::write_payload;
pub use replicate::Replicate;
pub use scene_id::SceneId;
pub use spatial::{Quat, SpatialHint, Vec3};
pub use spawn_directive::{SpawnDirective, UnspawnDirective};
pub use world_type::{WorldMutType, WorldRefType};
