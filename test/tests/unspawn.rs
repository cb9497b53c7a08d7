use std::{cell::RefCell, rc::Rc};

use mirage_client::{
    AssetId, NetworkId, SceneId, SpawnConfig, SpawnDirective, SpawnHandler, Spawner,
    UnspawnDirective, WorldMutType, WorldRefType,
};
use mirage_test::{Entity, World};

const PREFAB: AssetId = AssetId::from_u128(0x0a0a_0000_0000_4000_8000_0000_0000_000a);
const POOLED: AssetId = AssetId::from_u128(0x0b0b_0000_0000_4000_8000_0000_0000_000b);

/// Hands out entities and takes them back without despawning them
struct PoolHandler {
    returned: Rc<RefCell<Vec<Entity>>>,
}

impl SpawnHandler<Entity> for PoolHandler {
    fn spawn(
        &mut self,
        world: &mut dyn WorldMutType<Entity>,
        _directive: &SpawnDirective,
    ) -> Option<Entity> {
        let entity = world.spawn_entity();
        world.insert_identity(&entity);
        Some(entity)
    }

    fn unspawn(&mut self, _world: &mut dyn WorldMutType<Entity>, entity: &Entity) {
        self.returned.borrow_mut().push(*entity);
    }
}

struct Session {
    world: World,
    spawner: Spawner<Entity>,
    scene_object: Entity,
    returned: Rc<RefCell<Vec<Entity>>>,
}

fn session() -> Session {
    let mut world = World::new();
    let prefab = world.spawn_networked("PrefabX");
    let scene_object = world.spawn_networked("SceneObjS");
    let returned = Rc::new(RefCell::new(Vec::new()));

    let mut spawner = Spawner::new(SpawnConfig::default());
    let registry = spawner.registry_mut();
    registry.register_template(PREFAB, prefab).unwrap();
    registry
        .register_handler(
            POOLED,
            PoolHandler {
                returned: returned.clone(),
            },
        )
        .unwrap();
    registry
        .register_scene_object(SceneId::new(100020), scene_object)
        .unwrap();

    Session {
        world,
        spawner,
        scene_object,
        returned,
    }
}

fn spawn(session: &mut Session, directive: SpawnDirective) -> Entity {
    session
        .spawner
        .spawn(&mut session.world, &directive)
        .unwrap()
        .entity
}

#[test]
fn template_instance_is_despawned() {
    let mut session = session();
    let instance = spawn(
        &mut session,
        SpawnDirective::new(NetworkId::new(1)).with_asset_id(PREFAB),
    );

    let unspawned = session
        .spawner
        .receive_unspawn(&mut session.world, &UnspawnDirective::new(NetworkId::new(1)));

    assert_eq!(unspawned, Some(instance));
    assert!(!session.world.has_entity(&instance));
    assert!(session.spawner.entity(&NetworkId::new(1)).is_none());
}

#[test]
fn scene_object_is_only_unbound() {
    let mut session = session();
    let bound = spawn(
        &mut session,
        SpawnDirective::new(NetworkId::new(2)).with_scene_id(SceneId::new(100020)),
    );
    assert_eq!(bound, session.scene_object);

    session
        .spawner
        .unspawn(&mut session.world, &NetworkId::new(2));

    assert!(session.world.has_entity(&bound));
    assert!(session.spawner.entity(&NetworkId::new(2)).is_none());
    assert_eq!(
        session.spawner.registry().scene_object(&SceneId::new(100020)),
        Some(bound)
    );
}

#[test]
fn handler_instance_goes_back_to_handler() {
    let mut session = session();
    let instance = spawn(
        &mut session,
        SpawnDirective::new(NetworkId::new(3)).with_asset_id(POOLED),
    );

    session
        .spawner
        .unspawn(&mut session.world, &NetworkId::new(3));

    assert_eq!(*session.returned.borrow(), vec![instance]);
    assert!(session.world.has_entity(&instance));
}

#[test]
fn unregistered_handler_instance_is_despawned() {
    let mut session = session();
    let instance = spawn(
        &mut session,
        SpawnDirective::new(NetworkId::new(3)).with_asset_id(POOLED),
    );
    assert!(session.spawner.registry_mut().unregister_handler(&POOLED).is_some());

    session
        .spawner
        .unspawn(&mut session.world, &NetworkId::new(3));

    assert!(session.returned.borrow().is_empty());
    assert!(!session.world.has_entity(&instance));
}

#[test]
fn unknown_network_id_is_ignored() {
    let mut session = session();
    let entity_count = session.world.entity_count();

    let unspawned = session
        .spawner
        .unspawn(&mut session.world, &NetworkId::new(404));

    assert_eq!(unspawned, None);
    assert_eq!(session.world.entity_count(), entity_count);
}

#[test]
fn reset_unspawns_everything() {
    let mut session = session();
    let instance = spawn(
        &mut session,
        SpawnDirective::new(NetworkId::new(1)).with_asset_id(PREFAB),
    );
    spawn(
        &mut session,
        SpawnDirective::new(NetworkId::new(2)).with_scene_id(SceneId::new(100020)),
    );
    let pooled = spawn(
        &mut session,
        SpawnDirective::new(NetworkId::new(3)).with_asset_id(POOLED),
    );

    session.spawner.reset(&mut session.world);

    assert!(session.spawner.identities().is_empty());
    assert!(!session.world.has_entity(&instance));
    assert!(session.world.has_entity(&session.scene_object));
    assert_eq!(*session.returned.borrow(), vec![pooled]);
}
