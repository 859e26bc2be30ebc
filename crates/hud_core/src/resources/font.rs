//! Fonts lent out by the resource manager

use std::fmt;
use std::path::Path;

use fontdue::FontSettings;
use serde::{Deserialize, Serialize};

use crate::foundation::math::Vec2;
use crate::{HudError, HudResult};

/// Logical font roles known at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FontRole {
    /// Regular body text
    Normal,
    /// Medium weight, used for headings and buttons
    Medium,
    /// Fixed-width text
    Fixed,
}

impl FontRole {
    /// Every role, in load order
    pub const ALL: [Self; 3] = [Self::Normal, Self::Medium, Self::Fixed];

    /// Lowercase role name used in logs and font names
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Medium => "medium",
            Self::Fixed => "fixed",
        }
    }
}

impl fmt::Display for FontRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A glyph placed by [`Font::layout`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionedGlyph {
    /// Character being drawn
    pub character: char,
    /// Pen position of the glyph's top-left corner, relative to the text origin
    pub position: Vec2,
    /// Horizontal advance in pixels
    pub advance: f32,
}

enum FontFace {
    Outline(fontdue::Font),
    FixedPitch { advance_em: f32, line_height_em: f32 },
}

/// An immutable, fully loaded font.
///
/// Only the resource manager owns fonts; everything else borrows them.
pub struct Font {
    name: String,
    face: FontFace,
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.face {
            FontFace::Outline(_) => "outline",
            FontFace::FixedPitch { .. } => "fixed-pitch",
        };
        f.debug_struct("Font").field("name", &self.name).field("face", &kind).finish()
    }
}

impl Font {
    /// Parse a TrueType/OpenType font
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> HudResult<Self> {
        let name = name.into();
        let face = fontdue::Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| HudError::new(format!("failed to decode font {name}: {e}")))?;

        Ok(Self { name, face: FontFace::Outline(face) })
    }

    /// Read and parse a font file
    pub fn from_file(path: impl AsRef<Path>) -> HudResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| HudError::new(format!("failed to load font {}: {e}", path.display())))?;

        let font = Self::from_bytes(path.display().to_string(), &bytes)?;
        log::info!("Loaded font {}", path.display());
        Ok(font)
    }

    /// Metrics-only font where every glyph has the same advance.
    ///
    /// Sizes are expressed in ems, i.e. multiplied by the character size.
    pub fn fixed_pitch(name: impl Into<String>, advance_em: f32, line_height_em: f32) -> Self {
        Self {
            name: name.into(),
            face: FontFace::FixedPitch { advance_em, line_height_em },
        }
    }

    /// Name used in draw commands and diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Horizontal advance of `ch` at `px` pixels
    pub fn advance(&self, ch: char, px: f32) -> f32 {
        match &self.face {
            FontFace::Outline(face) => face.metrics(ch, px).advance_width,
            FontFace::FixedPitch { advance_em, .. } => advance_em * px,
        }
    }

    /// Distance between consecutive baselines at `px` pixels
    pub fn line_height(&self, px: f32) -> f32 {
        match &self.face {
            FontFace::Outline(face) => face
                .horizontal_line_metrics(px)
                .map_or(px, |metrics| metrics.new_line_size),
            FontFace::FixedPitch { line_height_em, .. } => line_height_em * px,
        }
    }

    /// Place every glyph of `text`, breaking lines on `'\n'`
    pub fn layout(&self, text: &str, px: f32) -> Vec<PositionedGlyph> {
        let line_height = self.line_height(px);
        let mut glyphs = Vec::with_capacity(text.len());
        let mut pen = Vec2::zeros();

        for character in text.chars() {
            if character == '\n' {
                pen.x = 0.0;
                pen.y += line_height;
                continue;
            }

            let advance = self.advance(character, px);
            glyphs.push(PositionedGlyph { character, position: pen, advance });
            pen.x += advance;
        }

        glyphs
    }

    /// Width and height of `text` at `px` pixels
    pub fn measure(&self, text: &str, px: f32) -> Vec2 {
        if text.is_empty() {
            return Vec2::zeros();
        }

        let width = self
            .layout(text, px)
            .iter()
            .map(|glyph| glyph.position.x + glyph.advance)
            .fold(0.0_f32, f32::max);
        let lines = text.split('\n').count();

        #[allow(clippy::cast_precision_loss)]
        Vec2::new(width, lines as f32 * self.line_height(px))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_pitch_metrics() {
        let font = Font::fixed_pitch("mono", 0.5, 1.25);

        assert_relative_eq!(font.advance('W', 20.0), 10.0);
        assert_relative_eq!(font.line_height(20.0), 25.0);
    }

    #[test]
    fn test_layout_breaks_lines() {
        let font = Font::fixed_pitch("mono", 0.5, 1.0);
        let glyphs = font.layout("ab\nc", 10.0);

        assert_eq!(glyphs.len(), 3);
        assert_relative_eq!(glyphs[1].position, Vec2::new(5.0, 0.0));
        assert_relative_eq!(glyphs[2].position, Vec2::new(0.0, 10.0));
    }

    #[test]
    fn test_measure() {
        let font = Font::fixed_pitch("mono", 0.5, 1.0);

        assert_relative_eq!(font.measure("enemies", 20.0), Vec2::new(70.0, 20.0));
        assert_relative_eq!(font.measure("ab\nabcd", 10.0), Vec2::new(20.0, 20.0));
        assert_eq!(font.measure("", 10.0), Vec2::zeros());
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = Font::from_bytes("broken", b"definitely not a font").unwrap_err();
        assert!(err.message().contains("broken"));
    }

    #[test]
    fn test_missing_file_fails() {
        let err = Font::from_file("does/not/exist.ttf").unwrap_err();
        assert!(err.message().contains("does/not/exist.ttf"));
    }

    #[test]
    fn test_role_names() {
        assert_eq!(FontRole::ALL.len(), 3);
        assert_eq!(FontRole::Fixed.to_string(), "fixed");
    }
}
