use bevy_ecs::prelude::Resource;

/// Accumulated frame time for the running world.
#[derive(Resource, Clone, Copy, Default)]
pub struct WorldTime {
    /// Seconds since the world started.
    pub elapsed: f32,
    /// Seconds covered by the current frame.
    pub delta: f32,
}

impl WorldTime {
    /// Elapsed time in milliseconds, as animation timers consume it.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed as f64 * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_ms_scales_seconds() {
        let time = WorldTime {
            elapsed: 0.25,
            delta: 0.016,
        };
        assert_eq!(time.elapsed_ms(), 250.0);
    }
}
