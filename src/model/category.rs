//! Category data model for annotation categories.

use serde::{Deserialize, Serialize};

/// An annotation category with a name and color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identifier for the category
    pub id: u32,
    /// Display name of the category
    pub name: String,
    /// RGB color for the category
    pub color: [u8; 3],
}

impl Category {
    /// Create a new category with the given ID, name, and color.
    pub fn new(id: u32, name: &str, color: [u8; 3]) -> Self {
        Self {
            id,
            name: name.to_string(),
            color,
        }
    }

    /// Create a category from a packed `0xRRGGBB` color.
    pub fn from_rgb24(id: u32, name: &str, rgb: u32) -> Self {
        Self::new(id, name, unpack_rgb24(rgb))
    }

    /// The color packed as `0xRRGGBB`.
    pub fn rgb24(&self) -> u32 {
        pack_rgb24(self.color)
    }
}

/// Split a packed `0xRRGGBB` value into its channels. Bits above 24 are ignored.
pub fn unpack_rgb24(rgb: u32) -> [u8; 3] {
    [(rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8]
}

pub fn pack_rgb24(color: [u8; 3]) -> u32 {
    (u32::from(color[0]) << 16) | (u32::from(color[1]) << 8) | u32::from(color[2])
}

/// Default categories used when no list is configured.
pub fn default_categories() -> Vec<Category> {
    vec![
        Category::from_rgb24(205340, "undrivable", 0xff0000),
        Category::from_rgb24(205341, "things", 0xffff00),
        Category::from_rgb24(205342, "construction", 0x800080),
        Category::from_rgb24(205343, "uneven", 0xffffff),
    ]
}
