//! Asset management system
//!
//! Fonts and textures are owned by [`ResourceManager`] and lent to pages.

pub mod font;
pub mod texture;
pub mod resource_manager;

pub use font::{Font, FontRole, PositionedGlyph};
pub use texture::Texture;
pub use resource_manager::{ResourceManager, ResourceManagerBuilder};
