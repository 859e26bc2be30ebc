//! Recording render target

use super::{DrawCommand, RenderTarget};
use crate::foundation::math::Vec2;
use crate::HudResult;

/// Render target that records every submitted command.
///
/// Used for headless rendering and as the render target in tests; a real
/// backend can replay [`CommandBuffer::commands`] once per frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
    size: (u32, u32),
}

impl CommandBuffer {
    /// Create an empty buffer for a surface of the given size
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            commands: Vec::new(),
            size: (width, height),
        }
    }

    /// Commands recorded so far, in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Forget all recorded commands (start of a new frame)
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Target-space origin of every recorded command
    pub fn origins(&self) -> Vec<Vec2> {
        self.commands.iter().map(DrawCommand::origin).collect()
    }

    /// Strings of every recorded text command
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { string, .. } => Some(string.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Take ownership of the recorded commands
    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}

impl RenderTarget for CommandBuffer {
    fn submit(&mut self, command: DrawCommand) -> HudResult<()> {
        self.commands.push(command);
        Ok(())
    }

    fn size(&self) -> (u32, u32) {
        self.size
    }
}
