use std::{collections::HashMap, fmt, hash::Hash};

use log::warn;

use mirage_shared::{AssetId, SceneId};

use crate::{error::RegistryError, spawn_handler::SpawnHandler};

/// What is registered under an asset id. A template takes precedence over a
/// handler registered under the same id.
pub enum AssetSpawner<E> {
    Template(E),
    Handler(Box<dyn SpawnHandler<E>>),
    Both {
        template: E,
        handler: Box<dyn SpawnHandler<E>>,
    },
}

impl<E> AssetSpawner<E> {
    pub fn template(&self) -> Option<&E> {
        match self {
            AssetSpawner::Template(template) | AssetSpawner::Both { template, .. } => {
                Some(template)
            }
            AssetSpawner::Handler(_) => None,
        }
    }

    pub fn has_template(&self) -> bool {
        self.template().is_some()
    }

    pub fn has_handler(&self) -> bool {
        !matches!(self, AssetSpawner::Template(_))
    }

    pub(crate) fn handler_mut(&mut self) -> Option<&mut dyn SpawnHandler<E>> {
        match self {
            AssetSpawner::Handler(handler) | AssetSpawner::Both { handler, .. } => {
                Some(handler.as_mut())
            }
            AssetSpawner::Template(_) => None,
        }
    }

    fn with_template(self, template: E) -> Self {
        match self {
            AssetSpawner::Template(_) => AssetSpawner::Template(template),
            AssetSpawner::Handler(handler) | AssetSpawner::Both { handler, .. } => {
                AssetSpawner::Both { template, handler }
            }
        }
    }

    fn with_handler(self, handler: Box<dyn SpawnHandler<E>>) -> Self {
        match self {
            AssetSpawner::Handler(_) => AssetSpawner::Handler(handler),
            AssetSpawner::Template(template) | AssetSpawner::Both { template, .. } => {
                AssetSpawner::Both { template, handler }
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for AssetSpawner<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetSpawner::Template(template) => f.debug_tuple("Template").field(template).finish(),
            AssetSpawner::Handler(_) => f.write_str("Handler"),
            AssetSpawner::Both { template, .. } => {
                f.debug_struct("Both").field("template", template).finish()
            }
        }
    }
}

/// Lookup tables populated by configuration code before (or between)
/// sessions: what to spawn for an asset id, and which pre-placed object a
/// scene id refers to
pub struct SpawnRegistry<E: Copy + Eq + Hash> {
    assets: HashMap<AssetId, AssetSpawner<E>>,
    scene_objects: HashMap<SceneId, E>,
}

impl<E: Copy + Eq + Hash> Default for SpawnRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Copy + Eq + Hash> SpawnRegistry<E> {
    pub fn new() -> Self {
        Self {
            assets: HashMap::new(),
            scene_objects: HashMap::new(),
        }
    }

    // Lookup

    pub fn scene_object(&self, scene_id: &SceneId) -> Option<E> {
        self.scene_objects.get(scene_id).copied()
    }

    pub fn asset_spawner(&self, asset_id: &AssetId) -> Option<&AssetSpawner<E>> {
        self.assets.get(asset_id)
    }

    pub(crate) fn asset_spawner_mut(&mut self, asset_id: &AssetId) -> Option<&mut AssetSpawner<E>> {
        self.assets.get_mut(asset_id)
    }

    pub fn has_asset(&self, asset_id: &AssetId) -> bool {
        self.assets.contains_key(asset_id)
    }

    pub fn scene_ids(&self) -> impl Iterator<Item = &SceneId> {
        self.scene_objects.keys()
    }

    // Templates

    pub fn register_template(&mut self, asset_id: AssetId, template: E) -> Result<(), RegistryError> {
        if asset_id.is_empty() {
            return Err(RegistryError::EmptyAssetId);
        }

        let spawner = match self.assets.remove(&asset_id) {
            Some(existing) => {
                if existing.has_template() {
                    warn!("replacing template already registered for asset {}", asset_id);
                }
                existing.with_template(template)
            }
            None => AssetSpawner::Template(template),
        };
        self.assets.insert(asset_id, spawner);

        Ok(())
    }

    pub fn unregister_template(&mut self, asset_id: &AssetId) -> Option<E> {
        let (template, remaining) = match self.assets.remove(asset_id)? {
            AssetSpawner::Template(template) => (Some(template), None),
            AssetSpawner::Both { template, handler } => {
                (Some(template), Some(AssetSpawner::Handler(handler)))
            }
            handler @ AssetSpawner::Handler(_) => (None, Some(handler)),
        };
        if let Some(remaining) = remaining {
            self.assets.insert(*asset_id, remaining);
        }
        template
    }

    // Handlers

    pub fn register_handler<H: SpawnHandler<E> + 'static>(
        &mut self,
        asset_id: AssetId,
        handler: H,
    ) -> Result<(), RegistryError> {
        self.register_boxed_handler(asset_id, Box::new(handler))
    }

    pub fn register_boxed_handler(
        &mut self,
        asset_id: AssetId,
        handler: Box<dyn SpawnHandler<E>>,
    ) -> Result<(), RegistryError> {
        if asset_id.is_empty() {
            return Err(RegistryError::EmptyAssetId);
        }

        let spawner = match self.assets.remove(&asset_id) {
            Some(existing) => {
                if existing.has_handler() {
                    warn!("replacing spawn handler already registered for asset {}", asset_id);
                }
                existing.with_handler(handler)
            }
            None => AssetSpawner::Handler(handler),
        };
        self.assets.insert(asset_id, spawner);

        Ok(())
    }

    pub fn unregister_handler(&mut self, asset_id: &AssetId) -> Option<Box<dyn SpawnHandler<E>>> {
        let (handler, remaining) = match self.assets.remove(asset_id)? {
            AssetSpawner::Handler(handler) => (Some(handler), None),
            AssetSpawner::Both { template, handler } => {
                (Some(handler), Some(AssetSpawner::Template(template)))
            }
            template @ AssetSpawner::Template(_) => (None, Some(template)),
        };
        if let Some(remaining) = remaining {
            self.assets.insert(*asset_id, remaining);
        }
        handler
    }

    // Scene Objects

    pub fn register_scene_object(&mut self, scene_id: SceneId, entity: E) -> Result<(), RegistryError> {
        if !scene_id.is_scene() {
            return Err(RegistryError::InvalidSceneId);
        }

        if self.scene_objects.insert(scene_id, entity).is_some() {
            warn!("replacing scene object already registered for scene id {}", scene_id);
        }

        Ok(())
    }

    pub fn unregister_scene_object(&mut self, scene_id: &SceneId) -> Option<E> {
        self.scene_objects.remove(scene_id)
    }

    pub fn clear(&mut self) {
        self.assets.clear();
        self.scene_objects.clear();
    }
}
