//! PipBuck -> Status -> Skills

use super::{impl_page_base, GuiPage, PageBase};
use crate::hud::consts::{FONT_H2, HUD_COLOR};
use crate::hud::TextLabel;
use crate::render::{Drawable, RenderStates, RenderTarget};
use crate::resources::{FontRole, ResourceManager};
use crate::HudResult;

/// Skill levels
#[derive(Debug, Clone)]
pub struct SkillsPage<'a> {
    base: PageBase,
    label: TextLabel<'a>,
}

impl<'a> SkillsPage<'a> {
    /// Build the page, borrowing the fixed-width font
    pub fn new(resources: &'a ResourceManager) -> HudResult<Self> {
        let mut label = TextLabel::new("skills", resources.get_font(FontRole::Fixed)?, FONT_H2, HUD_COLOR);
        label.set_position(500.0, 500.0);

        Ok(Self {
            base: PageBase::new("Skills"),
            label,
        })
    }
}

impl Drawable for SkillsPage<'_> {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        self.label.draw(target, self.base.compose(states))
    }
}

impl GuiPage for SkillsPage<'_> {
    impl_page_base!();

    fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.base.transformable_mut().handle_gui_scale_change(gui_scale);
        self.label.handle_gui_scale_change(gui_scale);
    }
}
