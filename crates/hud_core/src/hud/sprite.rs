//! Sprite widget - textured quads backed by a lent texture

use std::sync::Arc;

use super::GuiTransformable;
use crate::foundation::math::Vec2;
use crate::render::{DrawCommand, Drawable, RenderStates, RenderTarget};
use crate::resources::Texture;
use crate::HudResult;

/// Textured rectangle.
///
/// Holds a share of a texture owned by the resource manager; the manager
/// keeps the texture cached for as long as any sprite uses it.
#[derive(Debug, Clone)]
pub struct Sprite {
    texture: Arc<Texture>,
    size: Vec2,
    transformable: GuiTransformable,
}

impl Sprite {
    /// Sprite showing the whole texture at its native size
    pub fn new(texture: Arc<Texture>) -> Self {
        let size = texture.size();
        Self {
            texture,
            size,
            transformable: GuiTransformable::new(),
        }
    }

    /// Stretch (or tile, for repeated textures) to `size`
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
    }

    /// Drawn size in local units
    pub const fn size(&self) -> Vec2 {
        self.size
    }

    /// Texture being drawn
    pub const fn texture(&self) -> &Arc<Texture> {
        &self.texture
    }

    /// Position relative to the parent, in unscaled GUI units
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.transformable.set_position(x, y);
    }

    /// Rescale position and size
    pub fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.transformable.handle_gui_scale_change(gui_scale);
        self.transformable.set_scale(gui_scale, gui_scale);
    }
}

impl Drawable for Sprite {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        let states = states.combined(&self.transformable.transform());

        target.submit(DrawCommand::Sprite {
            texture: Arc::clone(&self.texture),
            size: self.size,
            transform: states.transform,
        })
    }
}
