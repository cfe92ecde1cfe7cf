//=========================================================================
// Dimension Style
//=========================================================================
//
// Visual/physical policy for a layer or entity given its role.
//
// One policy serves both the tile world and dimension-aware entities, so
// a ghost enemy and a ghost platform always look and behave alike.
//
//   Active   → alpha 1.0, no tint, collidable, drawn on top
//   Inactive → ghost alpha, dimension tint, not collidable, drawn below
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::{Dimension, LayerRole};

//=== Tint ================================================================

/// Overlay color in 0xRRGGBB form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tint(u32);

impl Tint {
    /// Builds a tint from a packed 0xRRGGBB value (upper byte ignored).
    #[inline]
    pub const fn from_rgb(rgb: u32) -> Self {
        Self(rgb & 0x00FF_FFFF)
    }

    #[inline]
    pub const fn rgb(self) -> u32 {
        self.0
    }

    /// Channels as `[r, g, b]`.
    pub const fn channels(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

//=== LayerStyle ==========================================================

/// Resolved appearance and collidability for one role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerStyle {
    pub alpha: f32,
    pub tint: Option<Tint>,
    pub collidable: bool,
    pub depth: i32,
}

impl LayerStyle {
    /// Draw depth of the solid layer.
    pub const ACTIVE_DEPTH: i32 = 1;

    /// Draw depth of the ghost layer.
    pub const GHOST_DEPTH: i32 = 0;

    /// Style of anything that is fully real.
    pub const SOLID: Self = Self {
        alpha: 1.0,
        tint: None,
        collidable: true,
        depth: Self::ACTIVE_DEPTH,
    };
}

//=== DimensionPalette ====================================================

/// Ghost alpha and per-dimension ghost tints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionPalette {
    pub ghost_alpha: f32,
    /// Warm tint shown while Lumina is the ghost.
    pub lumina_ghost_tint: Tint,
    /// Cool tint shown while Umbra is the ghost.
    pub umbra_ghost_tint: Tint,
}

impl DimensionPalette {
    /// Tint identifying `dimension` when it is not the solid one.
    pub fn ghost_tint(&self, dimension: Dimension) -> Tint {
        match dimension {
            Dimension::Lumina => self.lumina_ghost_tint,
            Dimension::Umbra => self.umbra_ghost_tint,
        }
    }

    /// Style for something belonging to `dimension` in the given role.
    pub fn style(&self, dimension: Dimension, role: LayerRole) -> LayerStyle {
        match role {
            LayerRole::Active => LayerStyle::SOLID,
            LayerRole::Inactive => LayerStyle {
                alpha: self.ghost_alpha,
                tint: Some(self.ghost_tint(dimension)),
                collidable: false,
                depth: LayerStyle::GHOST_DEPTH,
            },
        }
    }
}

impl Default for DimensionPalette {
    fn default() -> Self {
        Self {
            ghost_alpha: 0.2,
            lumina_ghost_tint: Tint::from_rgb(0xFF_B3_47),
            umbra_ghost_tint: Tint::from_rgb(0x4A_6F_FF),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tint_masks_alpha_byte() {
        assert_eq!(Tint::from_rgb(0xAA11_2233).rgb(), 0x11_2233);
        assert_eq!(Tint::from_rgb(0x11_2233).channels(), [0x11, 0x22, 0x33]);
    }

    #[test]
    fn active_style_is_solid() {
        let palette = DimensionPalette::default();
        for dimension in Dimension::ALL {
            assert_eq!(palette.style(dimension, LayerRole::Active), LayerStyle::SOLID);
        }
    }

    #[test]
    fn ghost_style_is_translucent_tinted_and_passable() {
        let palette = DimensionPalette::default();
        let ghost = palette.style(Dimension::Umbra, LayerRole::Inactive);
        assert_eq!(ghost.alpha, 0.2);
        assert_eq!(ghost.tint, Some(palette.umbra_ghost_tint));
        assert!(!ghost.collidable);
        assert!(ghost.depth < LayerStyle::SOLID.depth);
    }

    #[test]
    fn ghost_tints_differ_per_dimension() {
        let palette = DimensionPalette::default();
        assert_ne!(
            palette.ghost_tint(Dimension::Lumina),
            palette.ghost_tint(Dimension::Umbra)
        );
    }
}
