//! HUD pages
//!
//! A page is one self-contained section of the HUD (e.g. "Perks"). Every page
//! type implements [`GuiPage`], and [`PageContainer`] draws any mix of them
//! through that trait. Adding a page type needs no change here or in the
//! container.
//!
//! Pages are built from a `&'a ResourceManager`: they borrow the fonts they
//! need for `'a` and own every drawable built from them. A page whose
//! resources cannot be borrowed is never constructed.

/// Implements the [`GuiPage`] accessors for a page struct with a `base: PageBase` field
macro_rules! impl_page_base {
    () => {
        fn title(&self) -> &str {
            self.base.title()
        }

        fn transformable(&self) -> &$crate::hud::GuiTransformable {
            self.base.transformable()
        }

        fn transformable_mut(&mut self) -> &mut $crate::hud::GuiTransformable {
            self.base.transformable_mut()
        }
    };
}

pub(crate) use impl_page_base;

pub mod container;
pub mod effects;
pub mod enemies;
pub mod health;
pub mod map;
pub mod perks;
pub mod quests;
pub mod skills;

pub use container::{PageContainer, PageKey};
pub use effects::EffectsPage;
pub use enemies::EnemiesPage;
pub use health::HealthPage;
pub use map::MapPage;
pub use perks::PerksPage;
pub use quests::QuestsPage;
pub use skills::SkillsPage;

use super::GuiTransformable;
use crate::render::{Drawable, RenderStates};

/// Contract shared by every HUD page.
///
/// `draw` (from [`Drawable`]) must compose the page's local transform into a
/// copy of the inherited states before drawing any content. A page with no
/// content draws nothing.
pub trait GuiPage: Drawable {
    /// Display name, used for diagnostics and as a translation key
    fn title(&self) -> &str;

    /// The page's local transform
    fn transformable(&self) -> &GuiTransformable;

    /// Mutable access to the page's local transform
    fn transformable_mut(&mut self) -> &mut GuiTransformable;

    /// Place the page relative to its container, in unscaled GUI units
    fn set_position(&mut self, x: f32, y: f32) {
        self.transformable_mut().set_position(x, y);
    }

    /// React to a GUI scale change. Pages with content override this and
    /// forward the new scale to their drawables.
    fn handle_gui_scale_change(&mut self, gui_scale: f32) {
        self.transformable_mut().handle_gui_scale_change(gui_scale);
    }
}

/// Title and local transform every page carries
#[derive(Debug, Clone, PartialEq)]
pub struct PageBase {
    title: String,
    transformable: GuiTransformable,
}

impl PageBase {
    /// New page state at the container's origin
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            transformable: GuiTransformable::new(),
        }
    }

    /// Display name
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Local transform
    pub const fn transformable(&self) -> &GuiTransformable {
        &self.transformable
    }

    /// Mutable local transform
    pub fn transformable_mut(&mut self) -> &mut GuiTransformable {
        &mut self.transformable
    }

    /// States for drawing page content: the inherited states with this
    /// page's transform composed in. `inherited` itself is a copy and is
    /// left as the caller passed it.
    pub fn compose(&self, inherited: RenderStates) -> RenderStates {
        inherited.combined(&self.transformable.transform())
    }
}
