//! Render dispatch module
//!
//! Backend-agnostic drawing surface for HUD pages:
//! - [`RenderStates`]: transform accumulator passed top-down while drawing
//! - [`DrawCommand`]: primitives emitted by drawables
//! - [`RenderTarget`]: anything that accepts draw commands
//! - [`Drawable`]: the capability every page and widget implements
//! - [`CommandBuffer`]: recording target used headless and in tests

pub mod states;
pub mod commands;
pub mod target;
pub mod command_buffer;

pub use states::RenderStates;
pub use commands::DrawCommand;
pub use target::{Drawable, RenderTarget};
pub use command_buffer::CommandBuffer;
