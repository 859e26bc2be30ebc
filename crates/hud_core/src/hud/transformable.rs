//! GUI-scale aware local transform

use crate::foundation::math::{Transform2D, Vec2};

/// Position, rotation, scale and origin of a HUD element, aware of GUI scale.
///
/// The requested position is kept in unscaled GUI units. The effective
/// position is the requested one multiplied by the GUI scale and rounded to
/// whole pixels, so text and shapes stay crisp.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiTransformable {
    requested_position: Vec2,
    position: Vec2,
    /// Degrees
    rotation: f32,
    scale: Vec2,
    origin: Vec2,
    gui_scale: f32,
}

impl Default for GuiTransformable {
    fn default() -> Self {
        Self {
            requested_position: Vec2::zeros(),
            position: Vec2::zeros(),
            rotation: 0.0,
            scale: Vec2::new(1.0, 1.0),
            origin: Vec2::zeros(),
            gui_scale: 1.0,
        }
    }
}

impl GuiTransformable {
    /// Identity transform at GUI scale 1
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the position in unscaled GUI units
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.requested_position = Vec2::new(x, y);
        self.apply_gui_scale();
    }

    /// Effective (scaled, rounded) position
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Position as requested, before GUI scaling
    pub const fn requested_position(&self) -> Vec2 {
        self.requested_position
    }

    /// Set rotation in degrees
    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    /// Rotation in degrees
    pub const fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Set scale factors
    pub fn set_scale(&mut self, x: f32, y: f32) {
        self.scale = Vec2::new(x, y);
    }

    /// Scale factors
    pub const fn scale(&self) -> Vec2 {
        self.scale
    }

    /// Set the local point that position, rotation and scale refer to
    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = Vec2::new(x, y);
    }

    /// Local origin
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// GUI scale currently applied
    pub const fn gui_scale(&self) -> f32 {
        self.gui_scale
    }

    /// Recompute the effective position for a new GUI scale
    pub fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.gui_scale = gui_scale;
        self.apply_gui_scale();
    }

    fn apply_gui_scale(&mut self) {
        self.position = Vec2::new(
            (self.requested_position.x * self.gui_scale).round(),
            (self.requested_position.y * self.gui_scale).round(),
        );
    }

    /// Local transform: translate, rotate, scale, then shift by the origin
    pub fn transform(&self) -> Transform2D {
        Transform2D::translation(self.position)
            * Transform2D::rotation(self.rotation)
            * Transform2D::scaling(self.scale)
            * Transform2D::translation(-self.origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Point2;
    use approx::assert_relative_eq;

    #[test]
    fn test_position_scaled_and_rounded() {
        let mut t = GuiTransformable::new();
        t.set_position(101.0, 250.0);
        t.handle_gui_scale_change(1.25);

        assert_eq!(t.position(), Vec2::new(126.0, 313.0));
        assert_eq!(t.requested_position(), Vec2::new(101.0, 250.0));
    }

    #[test]
    fn test_scale_change_before_position() {
        let mut t = GuiTransformable::new();
        t.handle_gui_scale_change(2.0);
        t.set_position(10.0, 20.0);

        assert_eq!(t.position(), Vec2::new(20.0, 40.0));
    }

    #[test]
    fn test_default_transform_is_identity() {
        assert_eq!(GuiTransformable::new().transform(), Transform2D::identity());
    }

    #[test]
    fn test_origin_rotation_and_scale() {
        let mut t = GuiTransformable::new();
        t.set_position(50.0, 50.0);
        t.set_origin(10.0, 0.0);
        t.set_rotation(90.0);
        t.set_scale(2.0, 2.0);

        // the origin lands on the position
        let p = t.transform().transform_point(Point2::new(10.0, 0.0));
        assert_relative_eq!(p, Point2::new(50.0, 50.0), epsilon = 1e-4);

        let q = t.transform().transform_point(Point2::new(11.0, 0.0));
        assert_relative_eq!(q, Point2::new(50.0, 52.0), epsilon = 1e-4);
        assert_eq!(t.rotation(), 90.0);
        assert_eq!(t.scale(), Vec2::new(2.0, 2.0));
    }
}
