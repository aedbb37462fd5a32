//! Page placement: where the star sits on paper and how large it is

use crate::error::StarError;

/// Physical page description, in PostScript points
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Page width
    pub width: f64,
    /// Page height
    pub height: f64,
    /// Blank border kept around the star
    pub margin: f64,
}

impl Default for PageConfig {
    /// US Letter with a quarter-inch margin
    fn default() -> Self {
        Self {
            width: 612.0,
            height: 792.0,
            margin: 18.0,
        }
    }
}

impl PageConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }
}

/// Translation and uniform scale mapping unit star space onto the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub translate_x: f64,
    pub translate_y: f64,
    pub scale: f64,
}

impl PageGeometry {
    /// Center the star on the page and scale it to the largest radius that
    /// respects the margin on every side.
    pub fn from_config(page: &PageConfig) -> Result<Self, StarError> {
        let translate_x = page.width / 2.0;
        let translate_y = page.height / 2.0;
        let scale = translate_x.min(translate_y) - page.margin;

        let valid = page.width.is_finite()
            && page.height.is_finite()
            && page.margin >= 0.0
            && scale.is_finite()
            && scale > 0.0;
        if !valid {
            return Err(StarError::invalid_page(page.width, page.height, page.margin));
        }

        Ok(Self {
            translate_x,
            translate_y,
            scale,
        })
    }
}
