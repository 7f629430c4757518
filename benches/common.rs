#![allow(dead_code)]

use rand::seq::SliceRandom;
use rand::SeedableRng;

use dense_ecs::{Entity, World};

pub const ENTITIES_SMALL: usize = 10_000;
pub const ENTITIES_MED: usize = 200_000;

#[derive(Clone, Copy, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Copy, Default)]
pub struct Velocity {
    pub dx: f32,
    pub dy: f32,
}

#[derive(Clone, Copy, Default)]
pub struct Score {
    pub value: u64,
}

/// Builds a World where every entity carries a `Score`, plus the entity
/// list in creation order.
pub fn populate_scores(count: usize) -> (World, Vec<Entity>) {
    let mut world = World::with_capacity(count, 4);
    let mut entities = Vec::with_capacity(count);
    for i in 0..count {
        let e = world.create_entity();
        world.add_component(e, Score { value: i as u64 }).unwrap();
        entities.push(e);
    }
    (world, entities)
}

/// Builds a World where every entity carries `Position` + `Velocity`.
pub fn populate_movers(count: usize) -> World {
    let mut world = World::with_capacity(count, 4);
    for i in 0..count {
        let e = world.create_entity();
        world
            .add_component(e, Position { x: i as f32, y: 0.0 })
            .unwrap();
        world
            .add_component(e, Velocity { dx: 1.0, dy: 0.5 })
            .unwrap();
    }
    world
}

/// Deterministically shuffled copy of `entities`.
pub fn shuffled(entities: &[Entity]) -> Vec<Entity> {
    let mut out = entities.to_vec();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    out.shuffle(&mut rng);
    out
}
