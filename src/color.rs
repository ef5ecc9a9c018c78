use serde::{Deserialize, Serialize};

/// An RGBA color value. Value-equal and immutable; two shapes referencing
/// the "same" color simply hold equal copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorData {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorData {
    pub const BLACK: ColorData = ColorData::rgb(0, 0, 0);
    pub const WHITE: ColorData = ColorData::rgb(255, 255, 255);
    pub const TRANSPARENT: ColorData = ColorData::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }
}

impl Default for ColorData {
    fn default() -> Self {
        Self::BLACK
    }
}
