use bevy_ecs::prelude::Component;

/// Sprite is identified by the sheet key of its manifest/texture pair.
/// The frame cell size comes from the manifest; `scale` multiplies it into
/// the destination rectangle. With `mirror_x` the sprite is drawn flipped
/// horizontally, anchored at the canvas width.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub sheet_key: String,
    pub scale: f32,
    pub mirror_x: bool,
}
