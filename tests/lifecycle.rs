use dense_ecs::{Entity, World};

#[derive(Clone, Copy, Default, Debug, PartialEq)]
struct Tag(u8);

#[test]
fn ids_are_sequential_from_zero() {
    let mut world = World::new();
    for expected in 0..64u32 {
        let e = world.create_entity();
        assert_eq!(e.id(), expected);
    }
    assert_eq!(world.entity_count(), 64);
}

#[test]
fn destroyed_ids_are_never_reissued() {
    let mut world = World::new();
    let a = world.create_entity();
    let b = world.create_entity();
    world.destroy_entity(a);
    world.destroy_entity(b);

    let c = world.create_entity();
    assert_eq!(c.id(), 2);
    assert!(!world.is_alive(a));
    assert!(!world.is_alive(b));
    assert!(world.is_alive(c));
}

#[test]
fn destroy_out_of_range_is_silent_noop() {
    let mut world = World::new();
    let e = world.create_entity();
    world.destroy_entity(Entity(9999));
    assert!(world.is_alive(e));
    assert_eq!(world.entity_count(), 1);
}

#[test]
fn destroy_is_idempotent() {
    let mut world = World::new();
    let e = world.create_entity();
    world.destroy_entity(e);
    world.destroy_entity(e);
    assert!(!world.is_alive(e));
}

#[test]
fn add_component_fails_on_dead_entity() {
    let mut world = World::new();
    let e = world.create_entity();
    world.destroy_entity(e);
    assert!(world.add_component(e, Tag(1)).is_err());
}

#[test]
fn add_component_fails_on_out_of_range_entity() {
    let mut world = World::new();
    world.create_entity();
    assert!(world.add_component(Entity(42), Tag(1)).is_err());
}

#[test]
fn failed_add_mutates_nothing() {
    let mut world = World::new();
    let e = world.create_entity();
    world.destroy_entity(e);

    world.add_component(e, Tag(7)).unwrap_err();

    // The failed add must not have created a pool: removal of a
    // never-stored type still reports the missing pool.
    assert!(world.remove_component::<Tag>(e).is_err());
    assert!(world.get_component::<Tag>(e).is_none());
}

#[test]
fn capacity_hints_do_not_affect_behavior() {
    let mut hinted = World::with_capacity(1024, 16);
    let mut bare = World::new();

    let a = hinted.create_entity();
    let b = bare.create_entity();
    assert_eq!(a.id(), b.id());

    hinted.add_component(a, Tag(3)).unwrap();
    bare.add_component(b, Tag(3)).unwrap();
    assert_eq!(
        hinted.get_component::<Tag>(a),
        bare.get_component::<Tag>(b)
    );
}

#[test]
fn default_world_is_empty() {
    let world = World::default();
    assert_eq!(world.entity_count(), 0);
    assert!(!world.is_alive(Entity(0)));
}
