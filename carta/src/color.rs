#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Color in RGBA format, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Fully transparent.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    /// White.
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    /// Black.
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    /// Red.
    pub const RED: Color = Color::rgba(255, 0, 0, 255);
    /// Blue.
    pub const BLUE: Color = Color::rgba(0, 0, 255, 255);

    /// Creates a new color from its channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Returns a copy of the color with the given alpha channel.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha channel.
    pub const fn a(&self) -> u8 {
        self.a
    }

    /// Channels as `[r, g, b, a]`.
    pub const fn to_u8_array(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// CSS representation, e.g. `rgba(255, 255, 255, 0.8)`.
    pub fn to_css(&self) -> String {
        let alpha = (self.a as f32 / 255.0 * 100.0).round() / 100.0;
        format!("rgba({}, {}, {}, {alpha})", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_representation() {
        assert_eq!(Color::WHITE.to_css(), "rgba(255, 255, 255, 1)");
        assert_eq!(
            Color::WHITE.with_alpha(204).to_css(),
            "rgba(255, 255, 255, 0.8)"
        );
        assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0, 0, 0, 0)");
    }
}
