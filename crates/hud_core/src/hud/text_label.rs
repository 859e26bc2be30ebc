//! Text widget - labels borrowing a font from the resource manager

use super::GuiTransformable;
use crate::foundation::math::{Vec2, Vec4};
use crate::render::{DrawCommand, Drawable, RenderStates, RenderTarget};
use crate::resources::{Font, PositionedGlyph};
use crate::HudResult;

/// Text label adjusted to GUI scale.
///
/// Borrows its font; owns its string and the glyph layout computed from it.
#[derive(Debug, Clone)]
pub struct TextLabel<'a> {
    font: &'a Font,
    string: String,
    /// Character size at GUI scale 1, e.g. [`super::consts::FONT_H2`]
    base_size: u32,
    color: Vec4,
    transformable: GuiTransformable,
    glyphs: Vec<PositionedGlyph>,
    bounds: Vec2,
}

impl<'a> TextLabel<'a> {
    /// Create a laid-out label
    pub fn new(string: impl Into<String>, font: &'a Font, base_size: u32, color: Vec4) -> Self {
        let mut label = Self {
            font,
            string: string.into(),
            base_size,
            color,
            transformable: GuiTransformable::new(),
            glyphs: Vec::new(),
            bounds: Vec2::zeros(),
        };
        label.relayout();
        label
    }

    /// Replace the text and redo the layout
    pub fn set_string(&mut self, string: impl Into<String>) {
        self.string = string.into();
        self.relayout();
    }

    /// Current text
    pub fn string(&self) -> &str {
        &self.string
    }

    /// Change the fill color
    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }

    /// Fill color
    pub const fn color(&self) -> Vec4 {
        self.color
    }

    /// Position relative to the parent, in unscaled GUI units
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.transformable.set_position(x, y);
    }

    /// Local transform
    pub const fn transformable(&self) -> &GuiTransformable {
        &self.transformable
    }

    /// Font this label was laid out with
    pub const fn font(&self) -> &'a Font {
        self.font
    }

    /// Character size after GUI scaling
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn character_size(&self) -> u32 {
        (self.base_size as f32 * self.transformable.gui_scale()) as u32
    }

    /// Glyph placements relative to the label origin
    pub fn glyphs(&self) -> &[PositionedGlyph] {
        &self.glyphs
    }

    /// Width and height of the laid-out text
    pub const fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Rescale position and character size
    pub fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.transformable.handle_gui_scale_change(gui_scale);
        self.relayout();
    }

    #[allow(clippy::cast_precision_loss)]
    fn relayout(&mut self) {
        let px = self.character_size() as f32;
        self.glyphs = self.font.layout(&self.string, px);
        self.bounds = self.font.measure(&self.string, px);
    }
}

impl Drawable for TextLabel<'_> {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        let states = states.combined(&self.transformable.transform());

        target.submit(DrawCommand::Text {
            string: self.string.clone(),
            font: self.font.name().to_owned(),
            character_size: self.character_size(),
            color: self.color,
            glyphs: self.glyphs.clone(),
            bounds: self.bounds,
            transform: states.transform,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hud::consts::HUD_COLOR;
    use crate::render::CommandBuffer;
    use approx::assert_relative_eq;

    #[test]
    fn test_layout_on_construction() {
        let font = Font::fixed_pitch("mono", 0.5, 1.0);
        let label = TextLabel::new("perks", &font, 20, HUD_COLOR);

        assert_eq!(label.glyphs().len(), 5);
        assert_relative_eq!(label.bounds(), Vec2::new(50.0, 20.0));
        assert!(std::ptr::eq(label.font(), &font));
    }

    #[test]
    fn test_gui_scale_resizes_text() {
        let font = Font::fixed_pitch("mono", 0.5, 1.0);
        let mut label = TextLabel::new("ab", &font, 20, HUD_COLOR);
        label.set_position(10.0, 10.0);
        label.handle_gui_scale_change(1.5);

        assert_eq!(label.character_size(), 30);
        assert_relative_eq!(label.bounds(), Vec2::new(30.0, 30.0));
        assert_eq!(label.transformable().position(), Vec2::new(15.0, 15.0));
    }

    #[test]
    fn test_draw_composes_position() {
        let font = Font::fixed_pitch("mono", 0.5, 1.0);
        let mut label = TextLabel::new("x", &font, 20, HUD_COLOR);
        label.set_position(100.0, 250.0);

        let mut target = CommandBuffer::new(800, 600);
        let parent = RenderStates::new(crate::foundation::math::Transform2D::translation(Vec2::new(5.0, 5.0)));
        label.draw(&mut target, parent).unwrap();

        assert_eq!(target.origins(), vec![Vec2::new(105.0, 255.0)]);
        assert_eq!(target.texts(), vec!["x"]);
    }

    #[test]
    fn test_set_string_relayouts() {
        let font = Font::fixed_pitch("mono", 1.0, 1.0);
        let mut label = TextLabel::new("a", &font, 10, HUD_COLOR);
        label.set_string("abc");

        assert_eq!(label.string(), "abc");
        assert_relative_eq!(label.bounds().x, 30.0);
    }
}
