use std::{error::Error, fmt};

use log::{error, warn};

use mirage_shared::{AssetId, NetworkId, SceneId, SpawnDirective};

/// The specific reason a spawn directive could not be turned into a local
/// object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpawnError {
    /// The directive carried neither an asset id nor a scene id
    MissingIdentifier,
    /// No scene object is registered under the directive's scene id
    SceneObjectNotFound(SceneId),
    /// Neither a template nor a handler is registered for the asset id
    UnknownAsset(AssetId),
    /// A template is registered for the asset id, but it no longer exists
    RegisteredTemplateMissing(AssetId),
    /// The asset's spawn handler did not produce an object
    HandlerReturnedNothing(AssetId),
    /// The asset's spawn handler produced an object without a network identity
    HandlerResultInvalid(AssetId),
    /// The initial state payload could not be read onto the object
    PayloadCorrupt(NetworkId),
    /// The network id was bound to a different object while resolving
    IdentityConflict(NetworkId),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            SpawnError::MissingIdentifier => {
                write!(f, "Spawn directive has neither an asset id nor a scene id")
            }
            SpawnError::SceneObjectNotFound(scene_id) => write!(
                f,
                "Spawn scene object not found for scene id {}. Make sure the scene containing the object is loaded",
                scene_id
            ),
            SpawnError::UnknownAsset(asset_id) => write!(
                f,
                "Failed to spawn asset {}: no template or spawn handler registered",
                asset_id
            ),
            SpawnError::RegisteredTemplateMissing(asset_id) => write!(
                f,
                "Template registered for asset {} no longer exists",
                asset_id
            ),
            SpawnError::HandlerReturnedNothing(asset_id) => write!(
                f,
                "Spawn handler for asset {} returned no object",
                asset_id
            ),
            SpawnError::HandlerResultInvalid(asset_id) => write!(
                f,
                "Object returned by spawn handler for asset {} does not have a network identity",
                asset_id
            ),
            SpawnError::PayloadCorrupt(network_id) => write!(
                f,
                "Initial state payload for network object {} is corrupt",
                network_id
            ),
            SpawnError::IdentityConflict(network_id) => write!(
                f,
                "Network id {} is already bound to another object",
                network_id
            ),
        }
    }
}

impl Error for SpawnError {}

/// Uniform failure reported for every rejected spawn directive, carrying the
/// directive's identifiers and the specific cause
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnFailed {
    pub network_id: NetworkId,
    pub asset_id: AssetId,
    pub scene_id: SceneId,
    pub cause: SpawnError,
}

impl SpawnFailed {
    pub(crate) fn new(directive: &SpawnDirective, cause: SpawnError) -> Self {
        Self {
            network_id: directive.network_id,
            asset_id: directive.asset_id,
            scene_id: directive.scene_id,
            cause,
        }
    }

    pub fn cause(&self) -> &SpawnError {
        &self.cause
    }

    /// Logs the specific cause, then the umbrella failure
    pub(crate) fn report(&self) {
        warn!("{}", self.cause);
        error!("{}", self);
    }
}

impl fmt::Display for SpawnFailed {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "Could not spawn network object {} (asset id: {}, scene id: {})",
            self.network_id, self.asset_id, self.scene_id
        )
    }
}

impl Error for SpawnFailed {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.cause)
    }
}

/// Rejected write into the SpawnRegistry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// Templates & handlers can't be keyed by the empty asset id
    EmptyAssetId,
    /// Scene objects can't be keyed by the zero scene id
    InvalidSceneId,
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            RegistryError::EmptyAssetId => write!(
                f,
                "Can not register a template or spawn handler under an empty asset id"
            ),
            RegistryError::InvalidSceneId => {
                write!(f, "Can not register a scene object under scene id 0")
            }
        }
    }
}

impl Error for RegistryError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityConflictError {
    pub network_id: NetworkId,
}

impl fmt::Display for IdentityConflictError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(
            f,
            "Error while attempting to register network id {}: it is already bound to a different object!",
            self.network_id
        )
    }
}

impl Error for IdentityConflictError {}
