//! Draw commands emitted by HUD drawables

use std::sync::Arc;

use crate::foundation::math::{Transform2D, Vec2, Vec4};
use crate::resources::{PositionedGlyph, Texture};

/// A single primitive submitted to a [`super::RenderTarget`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Laid-out text
    Text {
        /// Text content
        string: String,
        /// Name of the font the glyphs were laid out with
        font: String,
        /// Character size in pixels
        character_size: u32,
        /// Fill color (RGBA)
        color: Vec4,
        /// Glyph placements relative to the text origin
        glyphs: Vec<PositionedGlyph>,
        /// Width and height of the laid-out text
        bounds: Vec2,
        /// Local-to-target transform
        transform: Transform2D,
    },
    /// Solid rectangle with optional outline
    Rect {
        /// Width and height in local units
        size: Vec2,
        /// Fill color (RGBA)
        fill: Vec4,
        /// Outline color (RGBA)
        outline: Vec4,
        /// Outline thickness, 0 for none
        outline_thickness: f32,
        /// Local-to-target transform
        transform: Transform2D,
    },
    /// Textured quad
    Sprite {
        /// Texture lent by the resource manager
        texture: Arc<Texture>,
        /// Width and height in local units
        size: Vec2,
        /// Local-to-target transform
        transform: Transform2D,
    },
}

impl DrawCommand {
    /// Local-to-target transform of this command
    pub fn transform(&self) -> &Transform2D {
        match self {
            Self::Text { transform, .. } | Self::Rect { transform, .. } | Self::Sprite { transform, .. } => transform,
        }
    }

    /// Target-space position of the command's local origin
    pub fn origin(&self) -> Vec2 {
        self.transform().origin()
    }
}
