//! Read-only HUD geometry and style constants

use crate::foundation::math::{Vec2, Vec4};

/// Small print
pub const FONT_SPAN: u32 = 16;
/// Third-level heading
pub const FONT_H3: u32 = 18;
/// Second-level heading
pub const FONT_H2: u32 = 23;
/// First-level heading
pub const FONT_H1: u32 = 40;

/// Default HUD tint, rgb(0, 255, 153)
pub const HUD_COLOR: Vec4 = Vec4::new(0.0, 1.0, 0.6, 1.0);

/// Big simple button width
pub const BTN_SIMPLE_BIG_WIDTH: f32 = 128.0;
/// Big simple button height
pub const BTN_SIMPLE_BIG_HEIGHT: f32 = 65.0;
/// Narrow simple button width
pub const BTN_SIMPLE_NARROW_WIDTH: f32 = 131.0;
/// Narrow simple button height
pub const BTN_SIMPLE_NARROW_HEIGHT: f32 = 27.0;
/// Normal simple button width
pub const BTN_SIMPLE_NORMAL_WIDTH: f32 = 187.0;
/// Normal simple button height
pub const BTN_SIMPLE_NORMAL_HEIGHT: f32 = 27.0;

/// Outline thickness of an unselected normal button, in pixels
pub const BTN_BORDER_THICKNESS_NORMAL: f32 = 1.0;
/// Outline thickness of a selected normal button, in pixels
pub const BTN_BORDER_THICKNESS_NORMAL_SELECTED: f32 = 3.0;

/// Standard button shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonKind {
    /// 128x65
    Big,
    /// 131x27
    Narrow,
    /// 187x27
    Normal,
}

impl ButtonKind {
    /// Width and height in unscaled GUI units
    pub const fn size(self) -> Vec2 {
        match self {
            Self::Big => Vec2::new(BTN_SIMPLE_BIG_WIDTH, BTN_SIMPLE_BIG_HEIGHT),
            Self::Narrow => Vec2::new(BTN_SIMPLE_NARROW_WIDTH, BTN_SIMPLE_NARROW_HEIGHT),
            Self::Normal => Vec2::new(BTN_SIMPLE_NORMAL_WIDTH, BTN_SIMPLE_NORMAL_HEIGHT),
        }
    }
}

/// Width of the area a page may draw into
pub const FULL_PAGE_WIDTH: f32 = 1024.0;
/// Height of the area a page may draw into
pub const FULL_PAGE_HEIGHT: f32 = 596.0;
/// Page height left above the bottom button row
pub const FULL_PAGE_HEIGHT_SANS_BOTTOM_BTNS: f32 = FULL_PAGE_HEIGHT - BTN_SIMPLE_NORMAL_HEIGHT - 10.0;

/// Y of the bottom button row
pub const POS_PAGE_BTNS_Y: f32 = 565.0;
/// First slot of the bottom button row
pub const POS_PAGE_BTN_BOTTOM_1: Vec2 = Vec2::new(0.0, POS_PAGE_BTNS_Y);
/// Second slot of the bottom button row
pub const POS_PAGE_BTN_BOTTOM_2: Vec2 = Vec2::new(200.0, POS_PAGE_BTNS_Y);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_sizes() {
        assert_eq!(ButtonKind::Big.size(), Vec2::new(128.0, 65.0));
        assert_eq!(ButtonKind::Normal.size().y, BTN_SIMPLE_NARROW_HEIGHT);
    }

    #[test]
    fn test_page_area_leaves_room_for_buttons() {
        assert_eq!(FULL_PAGE_HEIGHT_SANS_BOTTOM_BTNS, 559.0);
        assert!(POS_PAGE_BTNS_Y + BTN_SIMPLE_NORMAL_HEIGHT <= FULL_PAGE_HEIGHT);
    }
}
