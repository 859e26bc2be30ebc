//! PipBuck -> Info -> Map

use std::path::Path;

use super::{impl_page_base, GuiPage, PageBase};
use crate::hud::consts::{
    BTN_BORDER_THICKNESS_NORMAL, FONT_H2, FULL_PAGE_HEIGHT_SANS_BOTTOM_BTNS, FULL_PAGE_WIDTH, HUD_COLOR,
};
use crate::hud::{RectShape, Sprite, TextLabel};
use crate::render::{Drawable, RenderStates, RenderTarget};
use crate::resources::{FontRole, ResourceManager};
use crate::HudResult;

/// Backdrop of the map area: a texture framed by a HUD-colored outline
#[derive(Debug, Clone)]
struct MapBackground {
    sprite: Sprite,
    frame: RectShape,
}

/// Map of the current location. For now only a placeholder label, optionally
/// drawn over a framed background covering the page area above the bottom
/// button row.
#[derive(Debug, Clone)]
pub struct MapPage<'a> {
    base: PageBase,
    background: Option<MapBackground>,
    label: TextLabel<'a>,
}

impl<'a> MapPage<'a> {
    /// Build the page, borrowing the fixed-width font
    pub fn new(resources: &'a ResourceManager) -> HudResult<Self> {
        let font = resources.get_font(FontRole::Fixed)?;

        let mut label = TextLabel::new("map", font, FONT_H2, HUD_COLOR);
        label.set_position(100.0, 250.0);

        Ok(Self {
            base: PageBase::new("Map"),
            background: None,
            label,
        })
    }

    /// Build the page over a background texture.
    ///
    /// A background that fails to load is replaced by the manager's missing
    /// texture; without one, construction fails.
    pub fn with_background(resources: &'a ResourceManager, background: impl AsRef<Path>) -> HudResult<Self> {
        let mut page = Self::new(resources)?;

        let mut sprite = Sprite::new(resources.get_texture_or_missing(background)?);
        sprite.set_size(FULL_PAGE_WIDTH, FULL_PAGE_HEIGHT_SANS_BOTTOM_BTNS);
        let frame = RectShape::frame(
            FULL_PAGE_WIDTH,
            FULL_PAGE_HEIGHT_SANS_BOTTOM_BTNS,
            HUD_COLOR,
            BTN_BORDER_THICKNESS_NORMAL,
        );

        page.background = Some(MapBackground { sprite, frame });
        Ok(page)
    }
}

impl Drawable for MapPage<'_> {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        let states = self.base.compose(states);

        if let Some(background) = &self.background {
            background.sprite.draw(target, states)?;
            background.frame.draw(target, states)?;
        }
        self.label.draw(target, states)
    }
}

impl GuiPage for MapPage<'_> {
    impl_page_base!();

    fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.base.transformable_mut().handle_gui_scale_change(gui_scale);
        if let Some(background) = &mut self.background {
            background.sprite.handle_gui_scale_change(gui_scale);
            background.frame.handle_gui_scale_change(gui_scale);
        }
        self.label.handle_gui_scale_change(gui_scale);
    }
}
