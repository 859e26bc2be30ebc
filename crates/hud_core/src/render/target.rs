//! Render target and drawable traits
//!
//! Keeps pages independent of the actual graphics backend.

use super::{DrawCommand, RenderStates};
use crate::HudResult;

/// Backend-agnostic drawing surface
pub trait RenderTarget {
    /// Accept one primitive for drawing
    fn submit(&mut self, command: DrawCommand) -> HudResult<()>;

    /// Surface size in pixels
    fn size(&self) -> (u32, u32);
}

/// Anything that can draw itself into a [`RenderTarget`].
///
/// Implementations compose their local transform into a copy of `states`
/// and must not change their own state while drawing, so drawing twice with
/// the same states submits the same commands.
pub trait Drawable {
    /// Draw into `target` using the inherited `states`
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()>;
}

impl<T: Drawable + ?Sized> Drawable for Box<T> {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        (**self).draw(target, states)
    }
}
