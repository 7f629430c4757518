use dense_ecs::{Entity, World};

#[derive(Clone, Copy, Default, Debug, PartialEq)]
struct Position {
    x: f32,
    y: f32,
}

#[derive(Clone, Copy, Default, Debug, PartialEq)]
struct Velocity {
    dx: f32,
    dy: f32,
}

#[derive(Clone, Copy, Default, Debug, PartialEq)]
struct Spin(f32);

#[derive(Clone, Copy, Default, Debug, PartialEq)]
struct Charge(i8);

#[test]
fn query_matches_exactly_the_entities_with_all_types() {
    let mut world = World::new();

    let only_pos = world.create_entity();
    world.add_component(only_pos, Position::default()).unwrap();

    let both = world.create_entity();
    world.add_component(both, Position::default()).unwrap();
    world
        .add_component(both, Velocity { dx: 1.0, dy: 0.0 })
        .unwrap();

    let mut pos_hits = Vec::new();
    world.for_each1::<Position, _>(|e, _| pos_hits.push(e));
    assert_eq!(pos_hits, vec![only_pos, both]);

    let mut pair_hits = Vec::new();
    world.for_each2::<Position, Velocity, _>(|e, _, _| pair_hits.push(e));
    assert_eq!(pair_hits, vec![both]);
}

#[test]
fn visits_in_ascending_id_order() {
    let mut world = World::new();
    // Attach in reverse creation order to make sure iteration order is
    // driven by the ID, not insertion order.
    let entities: Vec<Entity> = (0..32).map(|_| world.create_entity()).collect();
    for e in entities.iter().rev() {
        world.add_component(*e, Spin(e.id() as f32)).unwrap();
    }

    let mut seen = Vec::new();
    world.for_each1::<Spin, _>(|e, _| seen.push(e.id()));
    let expected: Vec<u32> = (0..32).collect();
    assert_eq!(seen, expected);
}

#[test]
fn zero_type_query_visits_all_alive_entities() {
    let mut world = World::new();
    let a = world.create_entity();
    let b = world.create_entity();
    let c = world.create_entity();
    world.destroy_entity(b);

    let mut seen = Vec::new();
    world.for_each_alive(|e| seen.push(e));
    assert_eq!(seen, vec![a, c]);
}

#[test]
fn dead_entities_are_skipped_even_with_matching_masks() {
    let mut world = World::new();
    let a = world.create_entity();
    let b = world.create_entity();
    world.add_component(a, Spin(1.0)).unwrap();
    world.add_component(b, Spin(2.0)).unwrap();

    // b still has its component data after destruction, but queries only
    // visit live entities.
    world.destroy_entity(b);
    assert!(world.get_component::<Spin>(b).is_some());

    let mut seen = Vec::new();
    world.for_each1::<Spin, _>(|e, _| seen.push(e));
    assert_eq!(seen, vec![a]);
}

#[test]
fn removed_components_drop_out_of_queries() {
    let mut world = World::new();
    let a = world.create_entity();
    let b = world.create_entity();
    world.add_component(a, Spin(1.0)).unwrap();
    world.add_component(b, Spin(2.0)).unwrap();
    world.remove_component::<Spin>(a).unwrap();

    let mut seen = Vec::new();
    world.for_each1::<Spin, _>(|e, _| seen.push(e));
    assert_eq!(seen, vec![b]);
}

#[test]
fn query_of_never_stored_type_visits_nothing() {
    let mut world = World::new();
    let e = world.create_entity();
    world.add_component(e, Position::default()).unwrap();

    let mut count = 0;
    world.for_each2::<Position, Charge, _>(|_, _, _| count += 1);
    assert_eq!(count, 0);
}

#[test]
fn query_on_empty_world_visits_nothing() {
    let mut world = World::new();
    let mut count = 0;
    world.for_each1::<Spin, _>(|_, _| count += 1);
    world.for_each_alive(|_| count += 1);
    assert_eq!(count, 0);
}

#[test]
fn visitor_mutations_persist() {
    let mut world = World::new();
    let e = world.create_entity();
    world
        .add_component(e, Position { x: 0.0, y: 0.0 })
        .unwrap();
    world
        .add_component(e, Velocity { dx: 2.0, dy: -1.0 })
        .unwrap();

    for _ in 0..3 {
        world.for_each2::<Position, Velocity, _>(|_, pos, vel| {
            pos.x += vel.dx;
            pos.y += vel.dy;
        });
    }

    assert_eq!(
        world.get_component::<Position>(e),
        Some(&Position { x: 6.0, y: -3.0 })
    );
}

#[test]
fn three_and_four_type_queries_require_every_mask() {
    let mut world = World::new();

    let full = world.create_entity();
    world.add_component(full, Position::default()).unwrap();
    world.add_component(full, Velocity::default()).unwrap();
    world.add_component(full, Spin(1.0)).unwrap();
    world.add_component(full, Charge(1)).unwrap();

    let partial = world.create_entity();
    world.add_component(partial, Position::default()).unwrap();
    world.add_component(partial, Velocity::default()).unwrap();
    world.add_component(partial, Spin(2.0)).unwrap();

    let mut three = Vec::new();
    world.for_each3::<Position, Velocity, Spin, _>(|e, _, _, _| three.push(e));
    assert_eq!(three, vec![full, partial]);

    let mut four = Vec::new();
    world.for_each4::<Position, Velocity, Spin, Charge, _>(|e, _, _, _, _| four.push(e));
    assert_eq!(four, vec![full]);
}

#[test]
#[should_panic(expected = "same component type twice")]
fn duplicate_type_in_query_panics() {
    let mut world = World::new();
    let e = world.create_entity();
    world.add_component(e, Spin(1.0)).unwrap();
    world.for_each2::<Spin, Spin, _>(|_, _, _| {});
}
