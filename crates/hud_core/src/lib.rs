//! # HUD Core
//!
//! Page composition and render dispatch for an in-game heads-up display.
//!
//! ## Features
//!
//! - **Pages**: independent HUD sections drawn through one [`render::Drawable`] contract
//! - **Transform composition**: every page composes its local transform into the inherited one
//! - **Resource lending**: fonts and textures are owned by [`resources::ResourceManager`]
//!   and lent to pages
//! - **Backend agnostic**: pages emit [`render::DrawCommand`]s into any [`render::RenderTarget`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hud_core::prelude::*;
//!
//! fn main() -> Result<(), HudError> {
//!     let config = HudConfig::load_from_file("hud.toml")?;
//!     let resources = ResourceManager::new(&config.resources)?;
//!
//!     let mut container = PageContainer::new();
//!     let enemies = container.add_page(EnemiesPage::new(&resources)?);
//!     container.add_page(PerksPage::new(&resources)?);
//!     container.handle_gui_scale_change(config.gui_scale);
//!     container.select(enemies)?;
//!
//!     let mut target = CommandBuffer::new(1920, 1000);
//!     container.draw(&mut target, RenderStates::default())?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod config;
pub mod resources;
pub mod render;
pub mod hud;

mod error;

pub use error::{HudError, HudResult};

/// Common imports for HUD users
pub mod prelude {
    pub use crate::{
        HudError, HudResult,
        config::{Config, HudConfig, ResourceConfig},
        foundation::math::{Transform2D, Vec2, Vec4},
        resources::{Font, FontRole, ResourceManager, Texture},
        render::{CommandBuffer, DrawCommand, Drawable, RenderStates, RenderTarget},
        hud::{
            GuiTransformable, TextLabel, Sprite, RectShape,
            pages::{
                GuiPage, PageBase, PageContainer, PageKey,
                EffectsPage, EnemiesPage, HealthPage, MapPage, PerksPage, QuestsPage, SkillsPage,
            },
        },
    };
}
