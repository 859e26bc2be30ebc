//! HUD module
//!
//! Widgets and pages drawn on top of the game:
//! - [`GuiTransformable`]: GUI-scale aware local transform
//! - [`TextLabel`], [`Sprite`]: drawables built from lent resources
//! - [`RectShape`]: plain rectangles and frames
//! - [`consts`]: read-only geometry (buttons, page area) and style values
//! - [`pages`]: the page contract, concrete pages and the page container

pub mod consts;
pub mod transformable;
pub mod text_label;
pub mod sprite;
pub mod rect_shape;
pub mod pages;

pub use transformable::GuiTransformable;
pub use text_label::TextLabel;
pub use sprite::Sprite;
pub use rect_shape::RectShape;
