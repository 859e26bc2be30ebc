//! HUD demo: builds every page from a config file and dumps the draw commands
//!
//! Usage: `hud_demo [config.toml|config.ron] [--builtin-fonts]`
//!
//! Without a config argument `hud.toml` is read, falling back to defaults when
//! it does not exist. `--builtin-fonts` swaps the font files for fixed-pitch
//! metrics so the demo runs without any assets on disk.

use std::path::PathBuf;

use hud_core::foundation::logging;
use hud_core::prelude::*;

/// Core texture shown behind the map page
const MAP_BACKGROUND: &str = "res/hud/pipbuck.png";

#[derive(Debug, thiserror::Error)]
enum DemoError {
    #[error(transparent)]
    Hud(#[from] HudError),
    #[error("unknown argument: {0}")]
    Usage(String),
}

struct Args {
    config: Option<PathBuf>,
    builtin_fonts: bool,
}

fn parse_args() -> Result<Args, DemoError> {
    let mut args = Args {
        config: None,
        builtin_fonts: false,
    };

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--builtin-fonts" => args.builtin_fonts = true,
            _ if arg.starts_with("--") => return Err(DemoError::Usage(arg)),
            _ => args.config = Some(PathBuf::from(arg)),
        }
    }
    Ok(args)
}

fn load_config(path: Option<PathBuf>) -> Result<HudConfig, DemoError> {
    match path {
        Some(path) => Ok(HudConfig::load_validated(path)?),
        None => {
            let default_path = PathBuf::from("hud.toml");
            if default_path.exists() {
                Ok(HudConfig::load_validated(default_path)?)
            } else {
                log::warn!("No hud.toml found, using default configuration");
                Ok(HudConfig::default())
            }
        }
    }
}

fn builtin_resources() -> ResourceManager {
    ResourceManager::builder()
        .with_font(FontRole::Normal, Font::fixed_pitch("builtin-normal", 0.55, 1.36))
        .with_font(FontRole::Medium, Font::fixed_pitch("builtin-medium", 0.57, 1.36))
        .with_font(FontRole::Fixed, Font::fixed_pitch("builtin-fixed", 0.5, 1.2))
        .with_missing_texture(Texture::solid_color(2, 2, [255, 0, 255, 255]).with_repeated(true))
        .build()
}

fn build_container<'a>(resources: &'a ResourceManager, gui_scale: f32) -> HudResult<PageContainer<'a>> {
    let mut container = PageContainer::new();

    container.add_page(EffectsPage::new(resources)?);
    container.add_page(EnemiesPage::new(resources)?);
    container.add_page(HealthPage::new(resources)?);
    container.add_page(MapPage::with_background(resources, MAP_BACKGROUND)?);
    container.add_page(PerksPage::new(resources)?);
    container.add_page(QuestsPage::new(resources)?);
    container.add_page(SkillsPage::new(resources)?);

    container.handle_gui_scale_change(gui_scale);
    Ok(container)
}

fn dump(target: &CommandBuffer) {
    for command in target.commands() {
        let origin = command.origin();
        match command {
            DrawCommand::Text { string, font, character_size, .. } => {
                log::info!("  text {:?} ({} @ {}px) at ({}, {})", string, font, character_size, origin.x, origin.y);
            }
            DrawCommand::Rect { size, .. } => {
                log::info!("  rect {}x{} at ({}, {})", size.x, size.y, origin.x, origin.y);
            }
            DrawCommand::Sprite { texture, size, .. } => {
                log::info!(
                    "  sprite {}x{} texture as {}x{} at ({}, {})",
                    texture.width(),
                    texture.height(),
                    size.x,
                    size.y,
                    origin.x,
                    origin.y
                );
            }
        }
    }
}

fn run() -> Result<(), DemoError> {
    let args = parse_args()?;
    let config = load_config(args.config)?;

    let resources = if args.builtin_fonts {
        builtin_resources()
    } else {
        ResourceManager::new(&config.resources)?
    };

    let mut container = build_container(&resources, config.gui_scale)?;
    log::info!("Pages: {}", container.titles().join(", "));

    let mut target = CommandBuffer::new(1920, 1080);
    container.draw_all(&mut target, RenderStates::default())?;
    log::info!("draw_all submitted {} commands", target.len());
    dump(&target);

    for title in ["Enemies", "Perks"] {
        container.select_by_title(title)?;
        target.clear();
        container.draw(&mut target, RenderStates::default())?;
        log::info!("Selected '{}' submitted {} commands", title, target.len());
        dump(&target);
    }

    let cleaned = resources.clean_unused();
    log::info!("{} textures still cached after cleaning {}", resources.cached_texture_count(), cleaned);
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    log::info!("Starting HUD demo");

    match run() {
        Ok(()) => {
            log::info!("HUD demo completed successfully");
            Ok(())
        }
        Err(e) => {
            log::error!("HUD demo failed: {}", e);
            Err(e.into())
        }
    }
}
