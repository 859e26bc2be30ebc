//! Resource Manager - shared asset cache lending fonts and textures to HUD pages
//!
//! **OWNERSHIP**: the manager is the sole owner of every asset. Fonts are lent
//! as plain borrows (`&Font`), so the borrow checker guarantees that no page
//! outlives the manager that lent its fonts. Textures are lent as `Arc<Texture>`
//! so the manager can tell which ones are still in use and drop the rest in
//! [`ResourceManager::clean_unused`].
//!
//! **LOADING POLICY**:
//! - Fonts are loaded eagerly when the manager is constructed. A missing or
//!   broken font aborts construction, so the failure shows up at startup
//!   rather than when the first page is opened. Fonts are never unloaded.
//! - Textures are loaded lazily on first request and cached by path. The cache
//!   lock is held across the load, so concurrent first requests for the same
//!   path still produce exactly one instance.
//! - Core textures and the missing texture are loaded up front by
//!   [`ResourceManager::load_core`] and stay cached until the manager drops.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;

use super::{Font, FontRole, Texture};
use crate::config::ResourceConfig;
use crate::{HudError, HudResult};

/// Resource Manager - single owner of every HUD asset
///
/// Invariant: at most one loaded instance per font role and per texture path.
/// Repeated lookups return the same instance for the manager's lifetime
/// (textures: until dropped by [`ResourceManager::clean_unused`]).
pub struct ResourceManager {
    /// Fonts by role, populated once at construction
    fonts: HashMap<FontRole, Font>,

    /// Lazily loaded textures by path
    textures: Mutex<HashMap<PathBuf, Arc<Texture>>>,

    /// Handles keeping core textures alive through [`ResourceManager::clean_unused`]
    core_textures: Vec<Arc<Texture>>,

    /// Documented fallback lent by [`ResourceManager::get_texture_or_missing`]
    missing_texture: Option<Arc<Texture>>,
}

impl ResourceManager {
    /// Load every configured font and core texture.
    ///
    /// Any load failure is returned; the application must not continue
    /// without its core resources.
    pub fn new(config: &ResourceConfig) -> HudResult<Self> {
        log::info!("Creating ResourceManager with config: {:?}", config);

        let mut fonts = HashMap::with_capacity(FontRole::ALL.len());
        for role in FontRole::ALL {
            let path = config.fonts.path(role);
            let font = Font::from_file(path).map_err(|e| {
                log::error!("Failed to load {} font: {}", role, e);
                HudError::resource_unavailable(format!("font {} ({e})", path.display()))
            })?;
            fonts.insert(role, font);
        }

        let mut manager = Self {
            fonts,
            textures: Mutex::new(HashMap::new()),
            core_textures: Vec::new(),
            missing_texture: None,
        };
        manager.load_core(config)?;

        Ok(manager)
    }

    /// Load the core textures and the missing texture, keeping them cached
    /// for the manager's whole lifetime.
    ///
    /// The missing texture goes through the cache like any other texture, so
    /// its path maps to the same (repeated) instance that the fallback lends.
    pub fn load_core(&mut self, config: &ResourceConfig) -> HudResult<()> {
        log::debug!("Loading core resources");

        if let Some(path) = &config.missing_texture {
            let missing = self.load_cached(path, true)?;
            self.core_textures.push(Arc::clone(&missing));
            self.missing_texture = Some(missing);
        }

        for path in &config.core_textures {
            let texture = self.get_texture(path)?;
            self.core_textures.push(texture);
        }

        log::debug!("Core resources loaded");
        Ok(())
    }

    /// Start assembling a manager from already-built assets
    pub fn builder() -> ResourceManagerBuilder {
        ResourceManagerBuilder::default()
    }

    /// Borrow the font registered for `role`.
    ///
    /// The same role always yields the same instance.
    pub fn get_font(&self, role: FontRole) -> HudResult<&Font> {
        self.fonts.get(&role).ok_or_else(|| {
            log::error!("Font role {} requested but not loaded", role);
            HudError::resource_unavailable(format!("font role {role}"))
        })
    }

    /// Roles with a loaded font
    pub fn font_roles(&self) -> Vec<FontRole> {
        let mut roles: Vec<_> = self.fonts.keys().copied().collect();
        roles.sort();
        roles
    }

    /// Lend the texture at `path`, loading it on first use
    pub fn get_texture(&self, path: impl AsRef<Path>) -> HudResult<Arc<Texture>> {
        self.load_cached(path.as_ref(), false)
    }

    /// Cache lookup and load. The lock is held across the load, so
    /// concurrent first requests for a path still yield one instance.
    ///
    /// With `repeated` set, the cached instance is marked as repeated
    /// (replacing an earlier non-repeated entry for the same path).
    fn load_cached(&self, path: &Path, repeated: bool) -> HudResult<Arc<Texture>> {
        let mut textures = self.textures.lock();

        if let Some(texture) = textures.get(path) {
            if !repeated || texture.is_repeated() {
                log::trace!("Texture cache hit: {:?}", path);
                return Ok(Arc::clone(texture));
            }
        }

        let texture = match textures.get(path) {
            Some(cached) => Texture::clone(cached),
            None => Texture::from_file(path).map_err(|e| {
                log::error!("{}", e);
                HudError::resource_unavailable(format!("texture {} ({e})", path.display()))
            })?,
        };
        let texture = Arc::new(if repeated { texture.with_repeated(true) } else { texture });

        textures.insert(path.to_path_buf(), Arc::clone(&texture));
        Ok(texture)
    }

    /// Lend the texture at `path`, or the missing-texture placeholder if it
    /// cannot be loaded. Fails only when no placeholder is registered.
    pub fn get_texture_or_missing(&self, path: impl AsRef<Path>) -> HudResult<Arc<Texture>> {
        let path = path.as_ref();

        match self.get_texture(path) {
            Ok(texture) => Ok(texture),
            Err(e) => match &self.missing_texture {
                Some(missing) => {
                    log::warn!("Using missing texture in place of {:?}", path);
                    Ok(Arc::clone(missing))
                }
                None => Err(e),
            },
        }
    }

    /// Number of textures currently cached
    pub fn cached_texture_count(&self) -> usize {
        self.textures.lock().len()
    }

    /// Drop cached textures nobody else holds. Returns how many were dropped.
    pub fn clean_unused(&self) -> usize {
        let mut textures = self.textures.lock();
        let old_size = textures.len();

        // the only Arc left lives in the cache itself
        textures.retain(|_, texture| Arc::strong_count(texture) > 1);

        let cleaned = old_size - textures.len();
        log::debug!("Cleaned {} unused resources", cleaned);
        cleaned
    }
}

/// Assembles a [`ResourceManager`] from assets built by the caller
#[derive(Default)]
pub struct ResourceManagerBuilder {
    fonts: HashMap<FontRole, Font>,
    textures: HashMap<PathBuf, Arc<Texture>>,
    missing_texture: Option<Arc<Texture>>,
}

impl ResourceManagerBuilder {
    /// Register the font for `role`, replacing any earlier one
    #[must_use]
    pub fn with_font(mut self, role: FontRole, font: Font) -> Self {
        self.fonts.insert(role, font);
        self
    }

    /// Pre-populate the texture cache entry for `path`
    #[must_use]
    pub fn with_texture(mut self, path: impl Into<PathBuf>, texture: Texture) -> Self {
        self.textures.insert(path.into(), Arc::new(texture));
        self
    }

    /// Register the placeholder texture
    #[must_use]
    pub fn with_missing_texture(mut self, texture: Texture) -> Self {
        self.missing_texture = Some(Arc::new(texture.with_repeated(true)));
        self
    }

    /// Finish the manager
    pub fn build(self) -> ResourceManager {
        log::info!(
            "Creating ResourceManager with {} font(s) and {} texture(s)",
            self.fonts.len(),
            self.textures.len()
        );

        ResourceManager {
            fonts: self.fonts,
            textures: Mutex::new(self.textures),
            core_textures: Vec::new(),
            missing_texture: self.missing_texture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FontPaths;

    fn temp_png(name: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hud_core_{}_{name}.png", std::process::id()));
        image::RgbaImage::from_pixel(2, 2, image::Rgba([0, 255, 0, 255])).save(&path).unwrap();
        path
    }

    fn fixed_only() -> ResourceManager {
        ResourceManager::builder()
            .with_font(FontRole::Fixed, Font::fixed_pitch("mono", 0.5, 1.2))
            .build()
    }

    #[test]
    fn test_font_lookup_is_identity_stable() {
        let resources = fixed_only();

        let first = resources.get_font(FontRole::Fixed).unwrap();
        let second = resources.get_font(FontRole::Fixed).unwrap();
        assert!(std::ptr::eq(first, second));
        assert_eq!(resources.font_roles(), vec![FontRole::Fixed]);
    }

    #[test]
    fn test_unregistered_font_role_fails() {
        let resources = fixed_only();

        let err = resources.get_font(FontRole::Medium).unwrap_err();
        assert_eq!(err.message(), "resource unavailable: font role medium");
    }

    #[test]
    fn test_texture_cached_once() {
        let path = temp_png("cached");
        let resources = fixed_only();

        let a = resources.get_texture(&path).unwrap();
        let b = resources.get_texture(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(resources.cached_texture_count(), 1);
    }

    #[test]
    fn test_missing_texture_without_fallback_fails() {
        let resources = fixed_only();

        let err = resources.get_texture_or_missing("no/such/texture.png").unwrap_err();
        assert!(err.message().starts_with("resource unavailable: texture no/such/texture.png"));
        assert_eq!(resources.cached_texture_count(), 0);
    }

    #[test]
    fn test_missing_texture_fallback() {
        let resources = ResourceManager::builder()
            .with_missing_texture(Texture::solid_color(8, 8, [255, 0, 255, 255]))
            .build();

        let a = resources.get_texture_or_missing("no/such/a.png").unwrap();
        let b = resources.get_texture_or_missing("no/such/b.png").unwrap();

        assert!(Arc::ptr_eq(&a, &b));
        assert!(a.is_repeated());
        assert!(resources.get_texture("no/such/a.png").is_err());
    }

    #[test]
    fn test_clean_unused_keeps_lent_textures() {
        let resources = ResourceManager::builder()
            .with_texture("kept.png", Texture::solid_color(1, 1, [0; 4]))
            .with_texture("dropped.png", Texture::solid_color(1, 1, [0; 4]))
            .build();

        let kept = resources.get_texture("kept.png").unwrap();
        assert_eq!(resources.clean_unused(), 1);
        assert_eq!(resources.cached_texture_count(), 1);

        let again = resources.get_texture("kept.png").unwrap();
        assert!(Arc::ptr_eq(&kept, &again));
    }

    #[test]
    fn test_new_fails_on_missing_font_file() {
        let config = ResourceConfig {
            core_textures: Vec::new(),
            missing_texture: None,
            fonts: FontPaths {
                normal: PathBuf::from("missing/normal.ttf"),
                medium: PathBuf::from("missing/medium.ttf"),
                fixed: PathBuf::from("missing/fixed.ttf"),
            },
        };

        let err = ResourceManager::new(&config).err().expect("construction must fail");
        assert!(err.message().starts_with("resource unavailable: font missing/normal.ttf"));
    }

    fn core_config(core_textures: Vec<PathBuf>, missing_texture: Option<PathBuf>) -> ResourceConfig {
        ResourceConfig {
            core_textures,
            missing_texture,
            ..ResourceConfig::default()
        }
    }

    #[test]
    fn test_missing_texture_is_the_cached_instance() {
        let path = temp_png("missing");
        let mut resources = fixed_only();
        resources.load_core(&core_config(Vec::new(), Some(path.clone()))).unwrap();

        let fallback = resources.get_texture_or_missing("no/such.png").unwrap();
        let direct = resources.get_texture(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert!(Arc::ptr_eq(&fallback, &direct));
        assert!(direct.is_repeated());
        assert_eq!(resources.cached_texture_count(), 1);
    }

    #[test]
    fn test_core_textures_survive_clean_unused() {
        let core = temp_png("core");
        let mut resources = fixed_only();
        resources.load_core(&core_config(vec![core.clone()], None)).unwrap();
        std::fs::remove_file(&core).ok();

        assert_eq!(resources.cached_texture_count(), 1);
        assert_eq!(resources.clean_unused(), 0);
        assert_eq!(resources.cached_texture_count(), 1);

        // still served from the cache although the file is gone
        assert!(resources.get_texture(&core).is_ok());
    }

    #[test]
    fn test_load_core_fails_on_missing_core_texture() {
        let mut resources = fixed_only();

        let err = resources
            .load_core(&core_config(vec![PathBuf::from("no/such/core.png")], None))
            .unwrap_err();
        assert!(err.message().starts_with("resource unavailable: texture no/such/core.png"));
    }

    #[test]
    fn test_concurrent_first_access_loads_once() {
        let path = temp_png("concurrent");
        let resources = fixed_only();

        let lent: Vec<Arc<Texture>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8).map(|_| scope.spawn(|| resources.get_texture(&path).unwrap())).collect();
            handles.into_iter().map(|handle| handle.join().unwrap()).collect()
        });
        std::fs::remove_file(&path).ok();

        assert!(lent.iter().all(|texture| Arc::ptr_eq(texture, &lent[0])));
        assert_eq!(resources.cached_texture_count(), 1);
    }
}
