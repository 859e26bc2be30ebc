//! Page container
//!
//! Holds a heterogeneous set of pages and draws them through [`GuiPage`]
//! without knowing their concrete types.

use slotmap::SlotMap;

use super::GuiPage;
use crate::hud::GuiTransformable;
use crate::render::{Drawable, RenderStates, RenderTarget};
use crate::{HudError, HudResult};

slotmap::new_key_type! {
    /// Handle to a page stored in a [`PageContainer`]
    pub struct PageKey;
}

/// Owns pages of any type and draws the selected one.
///
/// Pages keep insertion order for [`PageContainer::draw_all`] and
/// [`PageContainer::titles`]. Keys of removed pages are never reused.
pub struct PageContainer<'a> {
    pages: SlotMap<PageKey, Box<dyn GuiPage + 'a>>,
    order: Vec<PageKey>,
    selected: Option<PageKey>,
    transformable: GuiTransformable,
}

impl Default for PageContainer<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> PageContainer<'a> {
    /// Empty container at the target origin
    pub fn new() -> Self {
        Self {
            pages: SlotMap::with_key(),
            order: Vec::new(),
            selected: None,
            transformable: GuiTransformable::new(),
        }
    }

    /// Take ownership of a page. The first page added becomes selected.
    pub fn add_page(&mut self, page: impl GuiPage + 'a) -> PageKey {
        self.add_boxed_page(Box::new(page))
    }

    /// Take ownership of an already boxed page
    pub fn add_boxed_page(&mut self, page: Box<dyn GuiPage + 'a>) -> PageKey {
        log::debug!("Adding page '{}'", page.title());

        let key = self.pages.insert(page);
        self.order.push(key);
        if self.selected.is_none() {
            self.selected = Some(key);
        }
        key
    }

    /// Remove a page, handing it back. Clears the selection if it pointed
    /// at the removed page.
    pub fn remove_page(&mut self, key: PageKey) -> Option<Box<dyn GuiPage + 'a>> {
        let page = self.pages.remove(key)?;
        self.order.retain(|k| *k != key);
        if self.selected == Some(key) {
            self.selected = None;
        }

        log::debug!("Removed page '{}'", page.title());
        Some(page)
    }

    /// Make `key` the page drawn by [`Drawable::draw`]
    pub fn select(&mut self, key: PageKey) -> HudResult<()> {
        if !self.pages.contains_key(key) {
            return Err(HudError::new(format!("no page with key {key:?}")));
        }

        self.selected = Some(key);
        Ok(())
    }

    /// Select the first page (in insertion order) with the given title
    pub fn select_by_title(&mut self, title: &str) -> HudResult<PageKey> {
        let key = self
            .order
            .iter()
            .copied()
            .find(|k| self.pages[*k].title() == title)
            .ok_or_else(|| HudError::new(format!("no page titled '{title}'")))?;

        self.selected = Some(key);
        Ok(key)
    }

    /// Currently selected page, if any
    pub const fn selected(&self) -> Option<PageKey> {
        self.selected
    }

    /// Page stored under `key`
    pub fn page(&self, key: PageKey) -> Option<&(dyn GuiPage + 'a)> {
        self.pages.get(key).map(|page| &**page)
    }

    /// Mutable page stored under `key`
    pub fn page_mut(&mut self, key: PageKey) -> Option<&mut (dyn GuiPage + 'a)> {
        self.pages.get_mut(key).map(|page| &mut **page)
    }

    /// Page titles in insertion order
    pub fn titles(&self) -> Vec<&str> {
        self.order.iter().map(|k| self.pages[*k].title()).collect()
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether no page was added
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Place the container on the target, in unscaled GUI units
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.transformable.set_position(x, y);
    }

    /// Container's own transform
    pub const fn transformable(&self) -> &GuiTransformable {
        &self.transformable
    }

    /// Apply a new GUI scale to the container and every page it holds
    pub fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        log::info!("GUI scale changed to {}", gui_scale);

        self.transformable.handle_gui_scale_change(gui_scale);
        for page in self.pages.values_mut() {
            page.handle_gui_scale_change(gui_scale);
        }
    }

    /// Draw every page in insertion order. Stops at the first page that
    /// fails to draw.
    pub fn draw_all(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        let states = states.combined(&self.transformable.transform());

        for key in &self.order {
            let page = &self.pages[*key];
            log::trace!("Drawing page '{}'", page.title());
            page.draw(target, states)?;
        }
        Ok(())
    }
}

impl Drawable for PageContainer<'_> {
    fn draw(&self, target: &mut dyn RenderTarget, states: RenderStates) -> HudResult<()> {
        let Some(page) = self.selected.and_then(|key| self.pages.get(key)) else {
            return Ok(());
        };

        page.draw(target, states.combined(&self.transformable.transform()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec2;
    use crate::hud::pages::{EnemiesPage, PerksPage};
    use crate::render::CommandBuffer;
    use crate::resources::{Font, FontRole, ResourceManager};

    fn resources() -> ResourceManager {
        ResourceManager::builder()
            .with_font(FontRole::Fixed, Font::fixed_pitch("mono", 0.5, 1.0))
            .build()
    }

    #[test]
    fn test_first_page_selected() {
        let resources = resources();
        let mut container = PageContainer::new();
        let enemies = container.add_page(EnemiesPage::new(&resources).unwrap());
        container.add_page(PerksPage::new(&resources).unwrap());

        assert_eq!(container.selected(), Some(enemies));
        assert_eq!(container.titles(), vec!["Enemies", "Perks"]);
        assert_eq!(container.len(), 2);
    }

    #[test]
    fn test_draw_selected_only() {
        let resources = resources();
        let mut container = PageContainer::new();
        container.add_page(EnemiesPage::new(&resources).unwrap());
        container.add_page(PerksPage::new(&resources).unwrap());
        container.select_by_title("Perks").unwrap();

        let mut target = CommandBuffer::new(1920, 1080);
        container.draw(&mut target, RenderStates::default()).unwrap();

        assert_eq!(target.texts(), vec!["perks"]);
    }

    #[test]
    fn test_draw_all_in_order_with_offset() {
        let resources = resources();
        let mut container = PageContainer::new();
        container.add_page(EnemiesPage::new(&resources).unwrap());
        container.add_page(PerksPage::new(&resources).unwrap());
        container.set_position(10.0, 20.0);

        let mut target = CommandBuffer::new(1920, 1080);
        container.draw_all(&mut target, RenderStates::default()).unwrap();

        assert_eq!(target.texts(), vec!["enemies", "perks"]);
        assert_eq!(target.origins(), vec![Vec2::new(110.0, 270.0), Vec2::new(510.0, 520.0)]);
    }

    #[test]
    fn test_remove_selected_clears_selection() {
        let resources = resources();
        let mut container = PageContainer::new();
        let key = container.add_page(EnemiesPage::new(&resources).unwrap());

        let removed = container.remove_page(key).unwrap();
        assert_eq!(removed.title(), "Enemies");
        assert_eq!(container.selected(), None);
        assert!(container.is_empty());
        assert!(container.select(key).is_err());

        let mut target = CommandBuffer::new(800, 600);
        container.draw(&mut target, RenderStates::default()).unwrap();
        assert!(target.is_empty());
    }

    #[test]
    fn test_unknown_title() {
        let mut container = PageContainer::new();
        let err = container.select_by_title("Quests").unwrap_err();
        assert_eq!(err.message(), "no page titled 'Quests'");
    }

    #[test]
    fn test_gui_scale_propagates() {
        let resources = resources();
        let mut container = PageContainer::new();
        let key = container.add_page(EnemiesPage::new(&resources).unwrap());
        container.set_position(10.0, 10.0);
        container.handle_gui_scale_change(2.0);

        assert_eq!(container.transformable().position(), Vec2::new(20.0, 20.0));
        assert_eq!(container.page(key).unwrap().transformable().gui_scale(), 2.0);

        let mut target = CommandBuffer::new(1920, 1080);
        container.draw(&mut target, RenderStates::default()).unwrap();
        assert_eq!(target.origins(), vec![Vec2::new(220.0, 520.0)]);
    }
}
