//! Sprite Lab main entry point.
//!
//! A small 2D playground built on:
//! - **raylib** for windowing and graphics
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Two demo scenes are selectable from the command line:
//! - `sprite`: plays a sheet animation described by a JSON manifest
//! - `grid`: an interactive pixel grid painted with the mouse
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (sprite, animator, positions, canvas)
//! - [`events`] – pointer events and grid drawing commands
//! - [`game`] – scene setup and the painter observer
//! - [`resources`] – ECS resources (config, stores, grid model, surface)
//! - [`systems`] – ECS systems (pointer, grid upkeep, animation, render)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window and the ECS world
//! 2. Set up the selected scene (assets, entities, observers)
//! 3. Run the schedule each frame: pointer input, grid upkeep, animation
//!    playback, rendering
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --scene grid
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use bevy_ecs::prelude::*;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::events::grid::GridCmd;
use crate::resources::appconfig::AppConfig;
use crate::resources::sheetstore::SheetStore;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::advance_animations;
use crate::systems::grid::{apply_grid_changes, apply_grid_commands, update_grid_messages};
use crate::systems::pointer::emit_pointer_events;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Selectable demo scenes.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scene {
    /// Animated sprite playback from a sheet manifest.
    Sprite,
    /// Interactive pixel grid painting.
    Grid,
}

/// Sprite Lab
#[derive(Parser)]
#[command(version, about = "Sprite sheet playback and pixel grid painting")]
struct Cli {
    /// Path to the INI configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Demo scene to run.
    #[arg(long, value_enum, default_value = "sprite")]
    scene: Scene,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => AppConfig::with_path(path),
        None => AppConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("Could not load config, using defaults: {}", e);
    }

    let (window_width, window_height) = config.window_size();

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Sprite Lab")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(SheetStore::default());
    world.insert_resource(TextureStore::default());
    world.init_resource::<Messages<GridCmd>>();

    let scene_result = match cli.scene {
        Scene::Sprite => game::setup_sprite_scene(&mut world, &mut rl, &thread, &config),
        Scene::Grid => game::setup_grid_scene(&mut world, &mut rl, &thread, &config),
    };
    if let Err(e) = scene_result {
        log::error!("Failed to set up scene: {}", e);
        std::process::exit(1);
    }

    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(emit_pointer_events);
    update.add_systems(update_grid_messages.after(emit_pointer_events));
    update.add_systems(apply_grid_changes.after(update_grid_messages));
    update.add_systems(apply_grid_commands.after(apply_grid_changes));
    update.add_systems(advance_animations);
    update.add_systems(
        render_system
            .after(advance_animations)
            .after(apply_grid_commands),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}
