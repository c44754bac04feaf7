use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A 24-bit RGB color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Formats the color as `#RRGGBB`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Display color assigned to a player, with the darker variant used by history rows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerColor {
    pub primary: Rgb,
    pub dark: Rgb,
}

/// Colors handed out to players in roster order.
pub const DEFAULT_COLORS: [PlayerColor; 6] = [
    PlayerColor {
        primary: Rgb::new(0x0A, 0x0A, 0x0A),
        dark: Rgb::new(0x00, 0x00, 0x00),
    },
    PlayerColor {
        primary: Rgb::new(0xFF, 0x4D, 0x4D),
        dark: Rgb::new(0xCC, 0x3D, 0x3D),
    },
    PlayerColor {
        primary: Rgb::new(0x50, 0xC8, 0x78),
        dark: Rgb::new(0x40, 0xA0, 0x60),
    },
    PlayerColor {
        primary: Rgb::new(0x40, 0x40, 0x40),
        dark: Rgb::new(0x2D, 0x2D, 0x2D),
    },
    PlayerColor {
        primary: Rgb::new(0xD9, 0xD9, 0x36),
        dark: Rgb::new(0xB8, 0xB8, 0x2E),
    },
    PlayerColor {
        primary: Rgb::new(0x6B, 0x6B, 0x6B),
        dark: Rgb::new(0x52, 0x52, 0x52),
    },
];

/// A palette needs at least one color for index wrapping to work.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("palette must contain at least one color")]
pub struct EmptyPalette;

/// Ordered set of player colors. Color indices wrap around the palette size.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<PlayerColor>", into = "Vec<PlayerColor>")]
pub struct Palette {
    colors: Vec<PlayerColor>,
}

impl Palette {
    /// Builds a palette from explicit colors. Returns `None` when `colors` is empty.
    pub fn new(colors: Vec<PlayerColor>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self { colors })
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color for `index`, wrapping when the index exceeds the palette size.
    pub fn color(&self, index: usize) -> PlayerColor {
        self.colors[index % self.colors.len()]
    }
}

impl TryFrom<Vec<PlayerColor>> for Palette {
    type Error = EmptyPalette;

    fn try_from(colors: Vec<PlayerColor>) -> Result<Self, Self::Error> {
        Self::new(colors).ok_or(EmptyPalette)
    }
}

impl From<Palette> for Vec<PlayerColor> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS.to_vec(),
        }
    }
}
