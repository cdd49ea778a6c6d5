//! Animation playback system.
//!
//! Advances every [`Animator`](crate::components::animator::Animator)
//! against the world clock. The stepping rule itself lives on the
//! component; this system only resolves the entity's manifest and feeds
//! the current time in.

use bevy_ecs::prelude::*;

use crate::components::animator::Animator;
use crate::components::sprite::Sprite;
use crate::resources::sheetstore::SheetStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback for all sprites.
///
/// Entities whose sheet key has no manifest are skipped and keep their
/// current frame.
pub fn advance_animations(
    mut query: Query<(&Sprite, &mut Animator)>,
    sheets: Res<SheetStore>,
    time: Res<WorldTime>,
) {
    let now_ms = time.elapsed_ms();
    for (sprite, mut animator) in query.iter_mut() {
        let Some(manifest) = sheets.get(&sprite.sheet_key) else {
            continue;
        };
        animator.advance(manifest, now_ms);
    }
}
