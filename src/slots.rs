//! The fixed iOS app-icon slot table.
//!
//! Each slot is one entry in the `.appiconset`: a point size, a display
//! density, and the device idiom Xcode expects. Pixel sizes and file names
//! are derived, so the table stays in one place.

/// The device idiom an icon slot targets in the asset catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Idiom {
    /// iPhone home screen, settings, spotlight, and notification slots.
    Iphone,
    /// The single 1024-pixel App Store marketing icon.
    Marketing,
}

impl Idiom {
    /// The idiom string used in `Contents.json`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Marketing => "ios-marketing",
        }
    }
}

/// One required icon slot: a point size at a display density.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSlot {
    /// Logical size in points (e.g. 20, 29, 40, 60).
    pub points: u32,
    /// Display density multiplier (1, 2, or 3).
    pub density: u32,
    /// Target device idiom.
    pub idiom: Idiom,
}

impl IconSlot {
    const fn new(points: u32, density: u32, idiom: Idiom) -> Self {
        Self { points, density, idiom }
    }

    /// Rendered pixel dimension (points x density).
    pub fn pixels(&self) -> u32 {
        self.points * self.density
    }

    /// Output file name, e.g. `icon-20@2x.png` or `icon-1024.png` for the
    /// density-1 marketing icon.
    pub fn file_name(&self) -> String {
        if self.density == 1 {
            format!("icon-{}.png", self.points)
        } else {
            format!("icon-{}@{}x.png", self.points, self.density)
        }
    }

    /// The `size` string used in `Contents.json`, e.g. `20x20`.
    pub fn size_label(&self) -> String {
        format!("{0}x{0}", self.points)
    }

    /// The `scale` string used in `Contents.json`, e.g. `2x`.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.density)
    }
}

/// Every slot required for the iPhone app icon set, in output order:
/// notification, settings, spotlight, and app icons at 2x/3x, plus the
/// 1024 marketing icon.
pub const APP_ICON_SLOTS: [IconSlot; 9] = [
    IconSlot::new(20, 2, Idiom::Iphone),
    IconSlot::new(20, 3, Idiom::Iphone),
    IconSlot::new(29, 2, Idiom::Iphone),
    IconSlot::new(29, 3, Idiom::Iphone),
    IconSlot::new(40, 2, Idiom::Iphone),
    IconSlot::new(40, 3, Idiom::Iphone),
    IconSlot::new(60, 2, Idiom::Iphone),
    IconSlot::new(60, 3, Idiom::Iphone),
    IconSlot::new(1024, 1, Idiom::Marketing),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_the_required_outputs() {
        let expected: [(u32, &str); 9] = [
            (40, "icon-20@2x.png"),
            (60, "icon-20@3x.png"),
            (58, "icon-29@2x.png"),
            (87, "icon-29@3x.png"),
            (80, "icon-40@2x.png"),
            (120, "icon-40@3x.png"),
            (120, "icon-60@2x.png"),
            (180, "icon-60@3x.png"),
            (1024, "icon-1024.png"),
        ];

        assert_eq!(APP_ICON_SLOTS.len(), expected.len());
        for (slot, (pixels, name)) in APP_ICON_SLOTS.iter().zip(expected) {
            assert_eq!(slot.pixels(), pixels);
            assert_eq!(slot.file_name(), name);
        }
    }

    #[test]
    fn only_the_marketing_slot_is_density_one() {
        for slot in &APP_ICON_SLOTS {
            match slot.idiom {
                Idiom::Marketing => assert_eq!(slot.density, 1),
                Idiom::Iphone => assert!(slot.density == 2 || slot.density == 3),
            }
        }
    }

    #[test]
    fn manifest_labels() {
        let slot = IconSlot::new(29, 3, Idiom::Iphone);
        assert_eq!(slot.size_label(), "29x29");
        assert_eq!(slot.scale_label(), "3x");
        assert_eq!(slot.idiom.as_str(), "iphone");
        assert_eq!(Idiom::Marketing.as_str(), "ios-marketing");
    }
}
