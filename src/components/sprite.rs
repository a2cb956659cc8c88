use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Sprite is identified by a texture key, its size in texture pixels and an offset if the texture is a spritesheet.
/// The offset is used to select the correct frame from the spritesheet.
/// The origin selects the pivot point (in texture pixels) relative to the frame's top-left
/// used for placement when rendering. `scale` multiplies the frame size in world space.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub offset: Vector2,
    pub origin: Vector2,
    pub scale: f32,
    pub flip_h: bool,
}

impl Sprite {
    /// World-space size after scaling.
    pub fn world_size(&self) -> Vector2 {
        Vector2::new(self.width * self.scale, self.height * self.scale)
    }
}
