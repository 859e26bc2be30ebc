//! Textures lent out by the resource manager

use std::path::Path;

use crate::foundation::math::Vec2;
use crate::{HudError, HudResult};

/// Immutable RGBA8 image ready to hand to a render backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    smooth: bool,
    repeated: bool,
}

impl Texture {
    /// Load an image file. Loaded textures are smoothed.
    pub fn from_file(path: impl AsRef<Path>) -> HudResult<Self> {
        let path = path.as_ref();

        log::debug!("Loading texture from: {:?}", path);

        let img = image::open(path)
            .map_err(|e| HudError::new(format!("failed to load texture {}: {e}", path.display())))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();

        log::info!("Loaded texture {}x{} from {:?}", width, height, path);

        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
            smooth: true,
            repeated: false,
        })
    }

    /// Decode an in-memory image (embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> HudResult<Self> {
        let rgba = image::load_from_memory(bytes)
            .map_err(|e| HudError::new(format!("failed to decode texture from memory: {e}")))?
            .to_rgba8();
        let (width, height) = rgba.dimensions();

        Ok(Self {
            width,
            height,
            pixels: rgba.into_raw(),
            smooth: true,
            repeated: false,
        })
    }

    /// Single-color texture (placeholders and tests)
    pub fn solid_color(width: u32, height: u32, color: [u8; 4]) -> Self {
        let pixels = color.repeat((width * height) as usize);

        Self {
            width,
            height,
            pixels,
            smooth: false,
            repeated: false,
        }
    }

    /// Tile the texture when drawn larger than its size
    #[must_use]
    pub fn with_repeated(mut self, repeated: bool) -> Self {
        self.repeated = repeated;
        self
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Size as a vector
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Raw RGBA bytes, row-major
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Whether linear filtering is requested
    pub const fn is_smooth(&self) -> bool {
        self.smooth
    }

    /// Whether the texture tiles
    pub const fn is_repeated(&self) -> bool {
        self.repeated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_color() {
        let txt = Texture::solid_color(4, 2, [255, 0, 255, 255]);

        assert_eq!(txt.pixels().len(), 4 * 2 * 4);
        assert_eq!(&txt.pixels()[4..8], &[255, 0, 255, 255]);
        assert_eq!(txt.size(), Vec2::new(4.0, 2.0));
        assert!(!txt.is_repeated());
        assert!(txt.with_repeated(true).is_repeated());
    }

    #[test]
    fn test_file_roundtrip_is_smooth() {
        let path = std::env::temp_dir().join(format!("hud_core_{}_texture.png", std::process::id()));
        image::RgbaImage::from_pixel(3, 5, image::Rgba([1, 2, 3, 255])).save(&path).unwrap();

        let txt = Texture::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((txt.width(), txt.height()), (3, 5));
        assert!(txt.is_smooth());
        assert_eq!(&txt.pixels()[..4], &[1, 2, 3, 255]);
    }

    #[test]
    fn test_invalid_bytes() {
        assert!(Texture::from_bytes(&[0, 1, 2, 3]).is_err());
    }
}
