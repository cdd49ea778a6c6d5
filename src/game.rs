use std::path::Path;

use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::*;
use log::info;
use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

use crate::components::animator::Animator;
use crate::components::pixelcanvas::PixelCanvas;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::events::grid::GridCmd;
use crate::events::pointer::{GridPointerEvent, PointerHooks, PointerKind, translate_pointer_events};
use crate::resources::appconfig::AppConfig;
use crate::resources::gridsurface::GridSurface;
use crate::resources::pixelgrid::PixelGrid;
use crate::resources::sheetstore::{SheetStore, SpriteManifest};
use crate::resources::texturestore::TextureStore;

/// Fill color the demo painter draws with.
const PAINT_COLOR: Color = Color::RED;

/// Painter state: whether the mouse button is currently held.
#[derive(Resource, Debug, Default)]
pub struct PaintBrush {
    pub down: bool,
}

/// Derive the sheet key from the manifest path ("assets/guy.json" -> "guy").
fn sheet_key_for(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("sprite")
        .to_string()
}

/// Build the sprite playback scene: load the manifest and its sheet
/// texture, then spawn one animated sprite as configured.
pub fn setup_sprite_scene(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let manifest = SpriteManifest::load_from_file(&config.manifest_path)?;
    let texture = rl
        .load_texture(th, &manifest.spritesheet)
        .map_err(|e| format!("Failed to load texture '{}': {}", manifest.spritesheet, e))?;
    // Pixel-art sheet: nearest-neighbor so scaling stays sharp
    unsafe {
        ffi::SetTextureFilter(*texture, TextureFilter::TEXTURE_FILTER_POINT as i32);
    }

    let key = sheet_key_for(&config.manifest_path);
    let mut animator = Animator::new();
    animator.set_animation(&manifest, &config.animation);

    world
        .resource_mut::<SheetStore>()
        .insert(key.clone(), manifest);
    world
        .resource_mut::<TextureStore>()
        .insert(key.clone(), texture);

    world.spawn((
        ScreenPosition::new(config.sprite_x, config.sprite_y),
        Sprite {
            sheet_key: key.clone(),
            scale: config.sprite_scale,
            mirror_x: config.sprite_mirror,
        },
        animator,
    ));

    info!(
        "Sprite scene ready: sheet '{}', animation '{}'",
        key, config.animation
    );
    Ok(())
}

/// Build the pixel grid scene: grid model, drawing surface, canvas entity,
/// and the pointer observer chain feeding the painter.
pub fn setup_grid_scene(
    world: &mut World,
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    config: &AppConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let grid = PixelGrid::new(config.grid);
    let (full_w, full_h) = (grid.full_width(), grid.full_height());
    let surface = GridSurface::new(rl, th, full_w as u32, full_h as u32)?;

    // Center the canvas in the window
    let (win_w, win_h) = config.window_size();
    let origin_x = ((win_w as i32 - full_w) / 2).max(0) as f32;
    let origin_y = ((win_h as i32 - full_h) / 2).max(0) as f32;

    world.insert_resource(grid);
    world.insert_non_send_resource(surface);
    world.init_resource::<PaintBrush>();
    world.spawn((ScreenPosition::new(origin_x, origin_y), PixelCanvas));

    // The translator entity is kept in PointerHooks so the chain can be
    // detached later by despawning it.
    let translator = world.spawn(Observer::new(translate_pointer_events)).id();
    world.insert_resource(PointerHooks { translator });
    world.spawn(Observer::new(paint_cells_observer));
    // Ensure the observers are registered before anything triggers events.
    world.flush();

    world
        .resource_mut::<Messages<GridCmd>>()
        .write(GridCmd::SetFillColor(PAINT_COLOR));

    info!(
        "Grid scene ready: {}x{} cells, surface {}x{} px",
        config.grid.pixel_width, config.grid.pixel_height, full_w, full_h
    );
    Ok(())
}

/// Observer that paints cells while the mouse button is held.
///
/// `Down` starts a stroke and paints its cell, `Move` extends the stroke
/// only while held, `Up` ends it.
pub fn paint_cells_observer(
    trigger: On<GridPointerEvent>,
    brush: Option<ResMut<PaintBrush>>,
    mut writer: MessageWriter<GridCmd>,
) {
    let Some(mut brush) = brush else {
        return;
    };
    let event = trigger.event();
    match event.kind {
        PointerKind::Down => {
            brush.down = true;
            writer.write(GridCmd::SetPixel {
                col: event.cell_x as f32,
                row: event.cell_y as f32,
            });
        }
        PointerKind::Move => {
            if brush.down {
                writer.write(GridCmd::SetPixel {
                    col: event.cell_x as f32,
                    row: event.cell_y as f32,
                });
            }
        }
        PointerKind::Up => brush.down = false,
    }
}
