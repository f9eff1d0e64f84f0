//! Style configuration for renderable objects
//!
//! Each renderable kind carries an explicit configuration struct with every
//! option enumerated and defaulted. Unknown options cannot be expressed: the
//! fields are fixed, and parsing a glyph or anchor name that is not in the
//! documented set is rejected with [`Error::UnrecognizedOption`]. Style
//! affects rendering only, never geometry.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB color
pub type Color = [u8; 3];

pub const BLACK: Color = [0x00, 0x00, 0x00];
pub const WHITE: Color = [0xff, 0xff, 0xff];

/// Surface material options for triangle meshes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceStyle {
    pub color: Color,
    pub ambient: Color,
    pub specular: Color,
    pub emissive: Color,
    pub shininess: f64,
    /// Opacity in `[0, 1]`; anything below 1 marks the surface transparent
    pub opacity: f64,
    /// Per-vertex normals when true, per-face normals when false
    pub smooth: bool,
}

impl SurfaceStyle {
    /// Whether the renderer must enable transparency for this surface
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }
}

impl Default for SurfaceStyle {
    fn default() -> Self {
        Self {
            color: [0xcc, 0xcc, 0xcc],
            ambient: WHITE,
            specular: [0x44, 0x44, 0x44],
            emissive: BLACK,
            shininess: 100.0,
            opacity: 1.0,
            smooth: true,
        }
    }
}

/// Line segment options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: Color,
    pub width: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            width: 2.0,
        }
    }
}

/// The fixed set of point glyph shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointGlyph {
    Circle,
    Disk,
    Square,
    Diamond,
    TriangleUp,
    TriangleDown,
    Star,
    X,
    Plus,
}

impl PointGlyph {
    /// Glyphs drawn as strokes only, with no fillable interior
    pub fn is_stroke_only(&self) -> bool {
        matches!(self, PointGlyph::X | PointGlyph::Plus)
    }
}

impl FromStr for PointGlyph {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "circle" => Ok(PointGlyph::Circle),
            "disk" => Ok(PointGlyph::Disk),
            "square" => Ok(PointGlyph::Square),
            "diamond" => Ok(PointGlyph::Diamond),
            "triangle-up" => Ok(PointGlyph::TriangleUp),
            "triangle-down" => Ok(PointGlyph::TriangleDown),
            "star" => Ok(PointGlyph::Star),
            "x" => Ok(PointGlyph::X),
            "plus" | "+" => Ok(PointGlyph::Plus),
            other => Err(Error::UnrecognizedOption(other.to_string())),
        }
    }
}

impl fmt::Display for PointGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointGlyph::Circle => "circle",
            PointGlyph::Disk => "disk",
            PointGlyph::Square => "square",
            PointGlyph::Diamond => "diamond",
            PointGlyph::TriangleUp => "triangle-up",
            PointGlyph::TriangleDown => "triangle-down",
            PointGlyph::Star => "star",
            PointGlyph::X => "x",
            PointGlyph::Plus => "plus",
        };
        f.write_str(name)
    }
}

/// Point glyph options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub glyph: PointGlyph,
    pub color: Color,
    pub size: f64,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
}

impl PointStyle {
    /// The fill color, `None` for stroke-only glyphs
    pub fn fill_color(&self) -> Option<Color> {
        if self.glyph.is_stroke_only() {
            None
        } else {
            Some(self.color)
        }
    }

    /// The stroke color; stroke-only glyphs fall back to black when no edge
    /// color is configured
    pub fn stroke_color(&self) -> Option<Color> {
        match self.edge_color {
            Some(color) => Some(color),
            None if self.glyph.is_stroke_only() => Some(BLACK),
            None => None,
        }
    }
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            glyph: PointGlyph::Circle,
            color: BLACK,
            size: 1.0,
            edge_color: None,
            edge_width: 1.0,
        }
    }
}

/// The nine standard text anchor positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAnchor {
    Center,
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl FromStr for TextAnchor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "center" => Ok(TextAnchor::Center),
            "top" => Ok(TextAnchor::Top),
            "bottom" => Ok(TextAnchor::Bottom),
            "left" => Ok(TextAnchor::Left),
            "right" => Ok(TextAnchor::Right),
            "top-left" => Ok(TextAnchor::TopLeft),
            "top-right" => Ok(TextAnchor::TopRight),
            "bottom-left" => Ok(TextAnchor::BottomLeft),
            "bottom-right" => Ok(TextAnchor::BottomRight),
            other => Err(Error::UnrecognizedOption(other.to_string())),
        }
    }
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TextAnchor::Center => "center",
            TextAnchor::Top => "top",
            TextAnchor::Bottom => "bottom",
            TextAnchor::Left => "left",
            TextAnchor::Right => "right",
            TextAnchor::TopLeft => "top-left",
            TextAnchor::TopRight => "top-right",
            TextAnchor::BottomLeft => "bottom-left",
            TextAnchor::BottomRight => "bottom-right",
        };
        f.write_str(name)
    }
}

/// Text label options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font: String,
    pub size: f64,
    pub color: Color,
    pub background: Option<Color>,
    pub margin: f64,
    pub edge_color: Option<Color>,
    pub edge_width: f64,
    pub anchor: TextAnchor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            size: 10.0,
            color: BLACK,
            background: None,
            margin: 5.0,
            edge_color: None,
            edge_width: 1.0,
            anchor: TextAnchor::Center,
        }
    }
}

/// The full style configuration a mesh carries to the renderer
///
/// Which parts apply depends on which index collections of the mesh are
/// populated: `surface` styles its faces, `line` its edges, `point` its
/// points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MeshStyle {
    pub surface: SurfaceStyle,
    pub line: LineStyle,
    pub point: PointStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_defaults_match_documented_values() {
        let style = SurfaceStyle::default();
        assert_eq!(style.color, [0xcc, 0xcc, 0xcc]);
        assert_eq!(style.ambient, WHITE);
        assert_eq!(style.specular, [0x44, 0x44, 0x44]);
        assert_eq!(style.emissive, BLACK);
        assert_eq!(style.shininess, 100.0);
        assert_eq!(style.opacity, 1.0);
        assert!(style.smooth);
        assert!(!style.is_transparent());
    }

    #[test]
    fn reduced_opacity_implies_transparency() {
        let style = SurfaceStyle {
            opacity: 0.5,
            ..Default::default()
        };
        assert!(style.is_transparent());
    }

    #[test]
    fn unknown_glyph_and_anchor_names_are_rejected() {
        assert!(matches!(
            "squiggle".parse::<PointGlyph>(),
            Err(Error::UnrecognizedOption(_))
        ));
        assert!(matches!(
            "middle".parse::<TextAnchor>(),
            Err(Error::UnrecognizedOption(_))
        ));
    }

    #[test]
    fn glyph_names_round_trip() {
        for glyph in [
            PointGlyph::Circle,
            PointGlyph::Disk,
            PointGlyph::Square,
            PointGlyph::Diamond,
            PointGlyph::TriangleUp,
            PointGlyph::TriangleDown,
            PointGlyph::Star,
            PointGlyph::X,
            PointGlyph::Plus,
        ] {
            assert_eq!(glyph.to_string().parse::<PointGlyph>().unwrap(), glyph);
        }
    }

    #[test]
    fn stroke_only_glyphs_have_no_fill() {
        let style = PointStyle {
            glyph: PointGlyph::X,
            ..Default::default()
        };
        assert_eq!(style.fill_color(), None);
        assert_eq!(style.stroke_color(), Some(BLACK));

        let filled = PointStyle::default();
        assert_eq!(filled.fill_color(), Some(BLACK));
        assert_eq!(filled.stroke_color(), None);
    }
}
