//! Render system.
//!
//! Draws straight to the window framebuffer once per frame: animated
//! sprites first, then the pixel grid surface if one exists. Everything is
//! positioned in screen pixels via
//! [`ScreenPosition`](crate::components::screenposition::ScreenPosition).

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::animator::Animator;
use crate::components::pixelcanvas::PixelCanvas;
use crate::components::screenposition::ScreenPosition;
use crate::components::sprite::Sprite;
use crate::resources::appconfig::AppConfig;
use crate::resources::gridsurface::GridSurface;
use crate::resources::sheetstore::SheetStore;
use crate::resources::texturestore::TextureStore;

/// Draw all sprites and the grid surface.
///
/// Sprites whose manifest or texture is missing are skipped silently; the
/// animation system already freezes them.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    sprites: Query<(&Sprite, &Animator, &ScreenPosition)>,
    canvas: Query<&ScreenPosition, With<PixelCanvas>>,
    sheets: Res<SheetStore>,
    textures: Res<TextureStore>,
    surface: Option<NonSend<GridSurface>>,
    config: Res<AppConfig>,
) {
    let canvas_width = config.window_width as f32;

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    for (sprite, animator, pos) in sprites.iter() {
        let Some(manifest) = sheets.get(&sprite.sheet_key) else {
            continue;
        };
        let Some(tex) = textures.get(&sprite.sheet_key) else {
            continue;
        };

        let mut src = manifest.source_rect(animator.frame, tex.width);
        let mut dest = Rectangle {
            x: pos.x(),
            y: pos.y(),
            width: src.width * sprite.scale,
            height: src.height * sprite.scale,
        };
        if sprite.mirror_x {
            // Negative source width flips the frame; the destination moves
            // so the flipped sprite is anchored from the right window edge.
            src.width = -src.width;
            dest.x = canvas_width - pos.x() - dest.width;
        }

        d.draw_texture_pro(
            tex,
            src,
            dest,
            Vector2 { x: 0.0, y: 0.0 },
            0.0,
            Color::WHITE,
        );
    }

    if let Some(surface) = surface {
        if let Ok(origin) = canvas.single() {
            let dest = Rectangle {
                x: origin.x(),
                y: origin.y(),
                width: surface.width as f32,
                height: surface.height as f32,
            };
            // The safe draw handle wants &Texture2D; the render texture's
            // color attachment is only reachable as an ffi value, so draw
            // it through the ffi call directly.
            unsafe {
                ffi::DrawTexturePro(
                    surface.texture.texture,
                    surface.source_rect().into(),
                    dest.into(),
                    ffi::Vector2 { x: 0.0, y: 0.0 },
                    0.0,
                    Color::WHITE.into(),
                );
            }
        }
    }
}
