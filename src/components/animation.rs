use bevy_ecs::prelude::Component;

/// Playback state of the clip currently shown on an entity's sprite.
///
/// Clip data lives in [`AnimationStore`](crate::resources::animationstore::AnimationStore);
/// this only tracks which clip and where in it we are.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to `key`, restarting playback. Does nothing if `key` is already
    /// playing, so holding a direction does not restart its walk cycle.
    ///
    /// Returns whether the clip changed.
    pub fn play(&mut self, key: &str) -> bool {
        if self.animation_key == key {
            return false;
        }
        self.animation_key = key.to_string();
        self.frame_index = 0;
        self.elapsed_time = 0.0;
        true
    }

    pub fn current(&self) -> &str {
        &self.animation_key
    }
}
