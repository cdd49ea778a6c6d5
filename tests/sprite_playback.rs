//! Integration tests for sprite animation playback.
//!
//! Drives the animation system through a real `World` and `Schedule`, with
//! manifests built in memory. Rendering is not involved; only the frame
//! selection logic is observed.

use bevy_ecs::prelude::*;

use spritelab::components::animator::Animator;
use spritelab::components::sprite::Sprite;
use spritelab::resources::sheetstore::{Animation, SheetStore, SpriteManifest};
use spritelab::resources::worldtime::WorldTime;
use spritelab::systems::animation::advance_animations;
use spritelab::systems::time::update_world_time;

fn demo_manifest() -> SpriteManifest {
    SpriteManifest {
        spritesheet: "guy.png".to_string(),
        frame_width: 24,
        frame_height: 24,
        animations: vec![
            Animation {
                id: "roll".to_string(),
                frames: vec![0, 1, 2, 3],
                fps: 10.0,
            },
            Animation {
                id: "blink".to_string(),
                frames: vec![2, 5, 9],
                fps: 10.0,
            },
        ],
    }
}

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());

    let mut sheets = SheetStore::default();
    sheets.insert("guy", demo_manifest());
    world.insert_resource(sheets);

    world
}

fn spawn_sprite(world: &mut World, animation: &str) -> Entity {
    let manifest = demo_manifest();
    let mut animator = Animator::new();
    animator.set_animation(&manifest, animation);
    world
        .spawn((
            Sprite {
                sheet_key: "guy".to_string(),
                scale: 1.0,
                mirror_x: false,
            },
            animator,
        ))
        .id()
}

/// Advance the clock by `dt` seconds and run one animation pass.
fn tick_animation(world: &mut World, dt: f32) {
    update_world_time(world, dt);
    let mut schedule = Schedule::default();
    schedule.add_systems(advance_animations);
    schedule.run(world);
}

#[test]
fn starts_on_first_listed_frame() {
    let mut world = make_world();
    let entity = spawn_sprite(&mut world, "blink");

    let animator = world.get::<Animator>(entity).unwrap();
    assert_eq!(animator.frame, 2);
    assert_eq!(animator.cursor, 0);
}

#[test]
fn frame_advances_only_past_threshold() {
    // fps 10 -> a step needs >100ms since the previous one. At 60ms ticks
    // every second tick crosses the threshold.
    let mut world = make_world();
    let entity = spawn_sprite(&mut world, "roll");

    let expected = [0, 1, 1, 2];
    for want in expected {
        tick_animation(&mut world, 0.06);
        let animator = world.get::<Animator>(entity).unwrap();
        assert_eq!(animator.frame, want);
    }
}

#[test]
fn immediate_second_tick_does_not_advance() {
    let mut world = make_world();
    let entity = spawn_sprite(&mut world, "roll");

    tick_animation(&mut world, 0.2);
    assert_eq!(world.get::<Animator>(entity).unwrap().frame, 1);

    // 1ms later: the step just happened, nothing to do yet
    tick_animation(&mut world, 0.001);
    assert_eq!(world.get::<Animator>(entity).unwrap().frame, 1);
}

#[test]
fn wraps_to_first_frame() {
    let mut world = make_world();
    let entity = spawn_sprite(&mut world, "blink");

    tick_animation(&mut world, 0.2);
    assert_eq!(world.get::<Animator>(entity).unwrap().frame, 5);
    tick_animation(&mut world, 0.2);
    assert_eq!(world.get::<Animator>(entity).unwrap().frame, 9);
    tick_animation(&mut world, 0.2);

    let animator = world.get::<Animator>(entity).unwrap();
    assert_eq!(animator.frame, 2);
    assert_eq!(animator.cursor, 0);
}

#[test]
fn missing_sheet_keeps_sprite_frozen() {
    let mut world = make_world();
    let manifest = demo_manifest();
    let mut animator = Animator::new();
    animator.set_animation(&manifest, "roll");
    let entity = world
        .spawn((
            Sprite {
                sheet_key: "ghost".to_string(), // no such sheet loaded
                scale: 1.0,
                mirror_x: false,
            },
            animator,
        ))
        .id();

    tick_animation(&mut world, 0.5);
    tick_animation(&mut world, 0.5);

    assert_eq!(world.get::<Animator>(entity).unwrap().frame, 0);
}

#[test]
fn sprites_advance_independently() {
    let mut world = make_world();
    let roller = spawn_sprite(&mut world, "roll");
    let blinker = spawn_sprite(&mut world, "blink");

    tick_animation(&mut world, 0.2);

    assert_eq!(world.get::<Animator>(roller).unwrap().frame, 1);
    assert_eq!(world.get::<Animator>(blinker).unwrap().frame, 5);
}
