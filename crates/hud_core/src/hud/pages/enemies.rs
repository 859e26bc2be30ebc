//! PipBuck -> Info -> Enemies

use super::{impl_page_base, GuiPage, PageBase};
use crate::hud::consts::{FONT_H2, HUD_COLOR};
use crate::hud::TextLabel;
use crate::render::{Drawable, RenderStates, RenderTarget};
use crate::resources::{FontRole, ResourceManager};
use crate::HudResult;

/// Bestiary of enemies met so far. For now only a placeholder label.
#[derive(Debug, Clone)]
pub struct EnemiesPage<'a> {
    base: PageBase,
    label: TextLabel<'a>,
}

impl<'a> EnemiesPage<'a> {
    /// Build the page, borrowing the fixed-width font.
    ///
    /// Fails if the font is not available.
    pub fn new(resources: &'a ResourceManager) -> HudResult<Self> {
        let font = resources.get_font(FontRole::Fixed)?;

        let mut label = TextLabel::new("enemies", font, FONT_H2, HUD_COLOR);
        label.set_position(100.0, 250.0);

        Ok(Self {
            base: PageBase::new("Enemies"),
            label,
        })
    }
}

impl Drawable for EnemiesPage<'_> {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        let states = self.base.compose(states);

        self.label.draw(target, states)
    }
}

impl GuiPage for EnemiesPage<'_> {
    impl_page_base!();

    fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.base.transformable_mut().handle_gui_scale_change(gui_scale);
        self.label.handle_gui_scale_change(gui_scale);
    }
}
