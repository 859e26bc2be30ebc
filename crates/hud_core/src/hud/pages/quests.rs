//! PipBuck -> Info -> Quests

use super::{impl_page_base, GuiPage, PageBase};
use crate::hud::consts::{FONT_H2, HUD_COLOR};
use crate::hud::TextLabel;
use crate::render::{Drawable, RenderStates, RenderTarget};
use crate::resources::{FontRole, ResourceManager};
use crate::HudResult;

/// Quest journal
#[derive(Debug, Clone)]
pub struct QuestsPage<'a> {
    base: PageBase,
    label: TextLabel<'a>,
}

impl<'a> QuestsPage<'a> {
    /// Build the page, borrowing the fixed-width font
    pub fn new(resources: &'a ResourceManager) -> HudResult<Self> {
        let mut label = TextLabel::new("quests", resources.get_font(FontRole::Fixed)?, FONT_H2, HUD_COLOR);
        label.set_position(100.0, 250.0);

        Ok(Self {
            base: PageBase::new("Quests"),
            label,
        })
    }
}

impl Drawable for QuestsPage<'_> {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        self.label.draw(target, self.base.compose(states))
    }
}

impl GuiPage for QuestsPage<'_> {
    impl_page_base!();

    fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.base.transformable_mut().handle_gui_scale_change(gui_scale);
        self.label.handle_gui_scale_change(gui_scale);
    }
}
