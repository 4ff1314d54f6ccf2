use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Textured quad drawn at an entity's [`MapPosition`].
///
/// `tex_key` names a texture in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore); `origin`
/// is the pivot in pixels relative to the quad's top-left corner. When the
/// texture is missing the render system falls back to a flat rectangle so a
/// failed load never draws garbage.
///
/// [`MapPosition`]: super::mapposition::MapPosition
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
    pub origin: Vector2,
}

impl Sprite {
    /// Square sprite with a centered pivot.
    pub fn centered_square(tex_key: impl Into<String>, side: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width: side,
            height: side,
            origin: Vector2 {
                x: side / 2.0,
                y: side / 2.0,
            },
        }
    }
}
