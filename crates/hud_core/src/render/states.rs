//! Render states passed down the drawable hierarchy

use crate::foundation::math::Transform2D;

/// Accumulated drawing state, built fresh for every draw call.
///
/// Passed by value: a child composing its own transform works on a copy, so
/// the parent's states stay untouched for the next sibling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RenderStates {
    /// Transform from the drawable's local space to target space
    pub transform: Transform2D,
}

impl RenderStates {
    /// States with the given transform
    pub const fn new(transform: Transform2D) -> Self {
        Self { transform }
    }

    /// States for a child whose local transform is `local`
    #[must_use]
    pub fn combined(self, local: &Transform2D) -> Self {
        Self { transform: self.transform.combine(local) }
    }
}
