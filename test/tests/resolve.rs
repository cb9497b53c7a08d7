use std::{cell::Cell, cell::RefCell, rc::Rc};

use mirage_client::{
    AssetId, IdentityTable, NetworkId, ResolutionOutcome, SceneId, SpawnConfig, SpawnDirective,
    SpawnError, SpawnOrigin, SpawnRegistry, SpawnResolver, Spawner, WorldMutType, WorldRefType,
};
use mirage_test::{Entity, Health, World};

const ASSET_A: AssetId = AssetId::from_u128(0x0a0a_0000_0000_4000_8000_0000_0000_000a);
const ASSET_B: AssetId = AssetId::from_u128(0x0b0b_0000_0000_4000_8000_0000_0000_000b);

fn networked_handler(
    calls: Rc<Cell<usize>>,
) -> impl FnMut(&mut dyn WorldMutType<Entity>, &SpawnDirective) -> Option<Entity> {
    move |world: &mut dyn WorldMutType<Entity>, _directive: &SpawnDirective| {
        calls.set(calls.get() + 1);
        let entity = world.spawn_entity();
        world.insert_identity(&entity);
        Some(entity)
    }
}

#[test]
fn existing_entry_wins_over_registry() {
    let mut world = World::new();
    let bound = world.spawn_networked("Bound");
    let prefab = world.spawn_networked("PrefabX");
    let scene_object = world.spawn_networked("SceneObjS");

    let mut identities = IdentityTable::new();
    identities
        .register(NetworkId::new(7), bound, SpawnOrigin::Template(ASSET_B))
        .unwrap();
    let mut registry = SpawnRegistry::new();
    registry.register_template(ASSET_A, prefab).unwrap();
    registry
        .register_scene_object(SceneId::new(5), scene_object)
        .unwrap();

    let directive = SpawnDirective::new(NetworkId::new(7))
        .with_asset_id(ASSET_A)
        .with_scene_id(SceneId::new(5));
    let resolution = SpawnResolver::new(&mut identities, &mut registry)
        .resolve(&mut world, &directive)
        .unwrap();

    assert_eq!(resolution.entity, bound);
    assert_eq!(resolution.outcome, ResolutionOutcome::Existing);
    assert_eq!(world.entity_count(), 3);
}

#[test]
fn missing_identifier_registers_nothing() {
    let mut world = World::new();
    let mut spawner = Spawner::<Entity>::new(SpawnConfig::default());

    let failed = spawner
        .spawn(&mut world, &SpawnDirective::new(NetworkId::new(1)))
        .unwrap_err();

    assert_eq!(failed.cause, SpawnError::MissingIdentifier);
    assert_eq!(failed.network_id, NetworkId::new(1));
    assert!(spawner.identities().is_empty());
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn scene_object_wins_over_asset() {
    let mut world = World::new();
    let prefab = world.spawn_networked("PrefabX");
    let scene_object = world.spawn_networked("SceneObjS");

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner.registry_mut().register_template(ASSET_A, prefab).unwrap();
    spawner
        .registry_mut()
        .register_scene_object(SceneId::new(100020), scene_object)
        .unwrap();

    let directive = SpawnDirective::new(NetworkId::new(1003))
        .with_scene_id(SceneId::new(100020))
        .with_asset_id(ASSET_A);
    let resolution = spawner.spawn(&mut world, &directive).unwrap();

    assert_eq!(resolution.entity, scene_object);
    assert_eq!(
        resolution.outcome,
        ResolutionOutcome::Spawned(SpawnOrigin::Scene(SceneId::new(100020)))
    );
    assert_eq!(spawner.entity(&NetworkId::new(1003)), Some(scene_object));
    // no template instance was created
    assert_eq!(world.entity_count(), 2);
}

#[test]
fn unknown_scene_id_does_not_fall_back_to_asset() {
    let mut world = World::new();
    let prefab = world.spawn_networked("PrefabX");

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner.registry_mut().register_template(ASSET_A, prefab).unwrap();

    let directive = SpawnDirective::new(NetworkId::new(4))
        .with_scene_id(SceneId::new(77))
        .with_asset_id(ASSET_A);
    let failed = spawner.spawn(&mut world, &directive).unwrap_err();

    assert_eq!(failed.cause, SpawnError::SceneObjectNotFound(SceneId::new(77)));
    assert_eq!(failed.scene_id, SceneId::new(77));
    assert_eq!(failed.asset_id, ASSET_A);
    assert!(spawner.identities().is_empty());
    assert_eq!(world.entity_count(), 1);
}

#[test]
fn template_instance_is_registered() {
    let mut world = World::new();
    let prefab = world.spawn_networked("PrefabX");
    world.insert_replica(&prefab, Health::new(100, 100));

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner.registry_mut().register_template(ASSET_A, prefab).unwrap();

    let directive = SpawnDirective::new(NetworkId::new(1002)).with_asset_id(ASSET_A);
    let resolution = spawner.spawn(&mut world, &directive).unwrap();

    let instance = resolution.entity;
    assert_ne!(instance, prefab);
    assert_eq!(world.duplicated_from(&instance), Some(prefab));
    assert_eq!(world.name(&instance), Some("PrefabX"));
    assert_eq!(world.replica::<Health>(&instance), Some(&Health::new(100, 100)));
    assert_eq!(spawner.entity(&NetworkId::new(1002)), Some(instance));
    assert_eq!(
        spawner.identities().record(&NetworkId::new(1002)).unwrap().origin,
        SpawnOrigin::Template(ASSET_A)
    );
}

#[test]
fn template_shadows_handler() {
    let mut world = World::new();
    let prefab = world.spawn_networked("PrefabX");
    let calls = Rc::new(Cell::new(0));

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner
        .registry_mut()
        .register_handler(ASSET_A, networked_handler(calls.clone()))
        .unwrap();
    spawner.registry_mut().register_template(ASSET_A, prefab).unwrap();

    let directive = SpawnDirective::new(NetworkId::new(2)).with_asset_id(ASSET_A);
    let resolution = spawner.spawn(&mut world, &directive).unwrap();

    assert_eq!(world.duplicated_from(&resolution.entity), Some(prefab));
    assert_eq!(calls.get(), 0);
}

#[test]
fn handler_is_invoked_once_with_directive() {
    let mut world = World::new();
    let received = Rc::new(RefCell::new(Vec::new()));

    let mut spawner = Spawner::new(SpawnConfig::default());
    let handler_received = received.clone();
    spawner
        .registry_mut()
        .register_handler(
            ASSET_B,
            move |world: &mut dyn WorldMutType<Entity>, directive: &SpawnDirective| {
                handler_received.borrow_mut().push(directive.clone());
                let entity = world.spawn_entity();
                world.insert_identity(&entity);
                Some(entity)
            },
        )
        .unwrap();

    let directive = SpawnDirective::new(NetworkId::new(9))
        .with_asset_id(ASSET_B)
        .with_owner(true);
    let resolution = spawner.spawn(&mut world, &directive).unwrap();

    assert_eq!(*received.borrow(), vec![directive]);
    assert!(world.has_identity(&resolution.entity));
    assert_eq!(
        resolution.outcome,
        ResolutionOutcome::Spawned(SpawnOrigin::Handler(ASSET_B))
    );
    assert_eq!(spawner.entity(&NetworkId::new(9)), Some(resolution.entity));
}

#[test]
fn handler_result_without_identity_is_invalid() {
    let mut world = World::new();

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner
        .registry_mut()
        .register_handler(
            ASSET_B,
            |world: &mut dyn WorldMutType<Entity>, _directive: &SpawnDirective| {
                Some(world.spawn_entity())
            },
        )
        .unwrap();

    let directive = SpawnDirective::new(NetworkId::new(3)).with_asset_id(ASSET_B);
    let failed = spawner.spawn(&mut world, &directive).unwrap_err();

    assert_eq!(failed.cause, SpawnError::HandlerResultInvalid(ASSET_B));
    assert!(spawner.identities().is_empty());
    // handed back to the handler, whose default unspawn despawns it
    assert_eq!(world.entity_count(), 0);
}

#[test]
fn handler_returning_nothing_fails() {
    let mut world = World::new();

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner
        .registry_mut()
        .register_handler(
            ASSET_B,
            |_world: &mut dyn WorldMutType<Entity>, _directive: &SpawnDirective| None,
        )
        .unwrap();

    let directive = SpawnDirective::new(NetworkId::new(3)).with_asset_id(ASSET_B);
    let failed = spawner.spawn(&mut world, &directive).unwrap_err();

    assert_eq!(failed.cause, SpawnError::HandlerReturnedNothing(ASSET_B));
    assert!(spawner.identities().is_empty());
}

#[test]
fn unregistered_asset_is_unknown() {
    let mut world = World::new();
    let mut spawner = Spawner::<Entity>::new(SpawnConfig::default());

    let directive = SpawnDirective::new(NetworkId::new(3)).with_asset_id(ASSET_A);
    let failed = spawner.spawn(&mut world, &directive).unwrap_err();

    assert_eq!(failed.cause, SpawnError::UnknownAsset(ASSET_A));
}

#[test]
fn despawned_template_is_missing_without_handler_fallback() {
    let mut world = World::new();
    let prefab = world.spawn_networked("PrefabX");
    let calls = Rc::new(Cell::new(0));

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner.registry_mut().register_template(ASSET_A, prefab).unwrap();
    spawner
        .registry_mut()
        .register_handler(ASSET_A, networked_handler(calls.clone()))
        .unwrap();
    world.despawn_entity(&prefab);

    let directive = SpawnDirective::new(NetworkId::new(3)).with_asset_id(ASSET_A);
    let failed = spawner.spawn(&mut world, &directive).unwrap_err();

    assert_eq!(failed.cause, SpawnError::RegisteredTemplateMissing(ASSET_A));
    assert_eq!(calls.get(), 0);
    assert!(spawner.identities().is_empty());
}

#[test]
fn resolving_twice_returns_same_instance() {
    let mut world = World::new();
    let calls = Rc::new(Cell::new(0));

    let mut spawner = Spawner::new(SpawnConfig::default());
    spawner
        .registry_mut()
        .register_handler(ASSET_B, networked_handler(calls.clone()))
        .unwrap();

    let directive = SpawnDirective::new(NetworkId::new(11)).with_asset_id(ASSET_B);
    let first = spawner.spawn(&mut world, &directive).unwrap();
    let second = spawner.spawn(&mut world, &directive).unwrap();

    assert_eq!(first.entity, second.entity);
    assert!(!first.outcome.is_existing());
    assert!(second.outcome.is_existing());
    assert_eq!(calls.get(), 1);
    assert_eq!(spawner.identities().len(), 1);
}

#[test]
fn failure_reports_source_cause() {
    use std::error::Error;

    let mut world = World::new();
    let mut spawner = Spawner::<Entity>::new(SpawnConfig::default());

    let directive = SpawnDirective::new(NetworkId::new(3)).with_asset_id(ASSET_A);
    let failed = spawner.spawn(&mut world, &directive).unwrap_err();

    let source = failed.source().unwrap().to_string();
    assert_eq!(source, SpawnError::UnknownAsset(ASSET_A).to_string());
    assert!(failed.to_string().contains(&NetworkId::new(3).to_string()));
}
