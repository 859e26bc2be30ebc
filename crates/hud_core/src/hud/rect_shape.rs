//! Rectangle widget - solid or outlined boxes (frames, button backgrounds)

use super::GuiTransformable;
use crate::foundation::math::{Vec2, Vec4};
use crate::render::{DrawCommand, Drawable, RenderStates, RenderTarget};
use crate::HudResult;

/// Rectangle with a fill and an optional outline
#[derive(Debug, Clone, PartialEq)]
pub struct RectShape {
    size: Vec2,
    fill: Vec4,
    outline: Vec4,
    /// Pixels, not affected by GUI scale
    outline_thickness: f32,
    transformable: GuiTransformable,
}

impl RectShape {
    /// Filled rectangle without outline
    pub fn new(width: f32, height: f32, fill: Vec4) -> Self {
        Self {
            size: Vec2::new(width, height),
            fill,
            outline: Vec4::zeros(),
            outline_thickness: 0.0,
            transformable: GuiTransformable::new(),
        }
    }

    /// Transparent rectangle drawn as an outline only
    pub fn frame(width: f32, height: f32, color: Vec4, thickness: f32) -> Self {
        let mut rect = Self::new(width, height, Vec4::zeros());
        rect.set_outline(color, thickness);
        rect
    }

    /// Change the outline. A thickness of 0 disables it.
    pub fn set_outline(&mut self, color: Vec4, thickness: f32) {
        self.outline = color;
        self.outline_thickness = thickness;
    }

    /// Change the fill color
    pub fn set_fill(&mut self, fill: Vec4) {
        self.fill = fill;
    }

    /// Size in unscaled GUI units
    pub const fn size(&self) -> Vec2 {
        self.size
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

impl Drawable for RectShape {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        let states = states.combined(&self.transformable.transform());

        target.submit(DrawCommand::Rect {
            size: self.size,
            fill: self.fill,
            outline: self.outline,
            outline_thickness: self.outline_thickness,
            transform: states.transform,
        })
    }
}
