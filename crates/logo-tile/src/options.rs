use crate::color::HexColor;
use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output page geometry, in centimeters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageSpec {
    pub width_cm: f32,
    /// `None` computes the height from the tile count
    pub height_cm: Option<f32>,
    pub left_margin_cm: f32,
    pub right_margin_cm: f32,
    pub top_margin_cm: f32,
    /// `None` reuses the top margin
    #[cfg_attr(feature = "serde", serde(default))]
    pub bottom_margin_cm: Option<f32>,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            width_cm: DEFAULT_SHEET_WIDTH_CM,
            height_cm: None,
            left_margin_cm: DEFAULT_SHEET_MARGIN_CM,
            right_margin_cm: DEFAULT_SHEET_MARGIN_CM,
            top_margin_cm: DEFAULT_SHEET_MARGIN_CM,
            bottom_margin_cm: None,
        }
    }
}

impl PageSpec {
    /// Bottom margin actually applied to placement
    pub fn effective_bottom_margin_cm(&self) -> f32 {
        self.bottom_margin_cm.unwrap_or(self.top_margin_cm)
    }

    pub fn is_auto_height(&self) -> bool {
        self.height_cm.is_none()
    }
}

/// Aspect ratio handling for the logo size fields
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AspectRatio {
    /// Width and height change independently
    #[default]
    Free,
    /// Width / height is held at this value
    Locked(f32),
}

/// Requested logo size and orientation
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LogoSpec {
    pub width_cm: f32,
    pub height_cm: f32,
    pub aspect: AspectRatio,
    /// Bounding-box size measured from the logo's vector content
    #[cfg_attr(feature = "serde", serde(default))]
    pub natural_size_cm: Option<(f32, f32)>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rotation: Rotation,
}

impl Default for LogoSpec {
    fn default() -> Self {
        Self {
            width_cm: DEFAULT_TILE_SIZE_CM,
            height_cm: DEFAULT_TILE_SIZE_CM,
            aspect: AspectRatio::Locked(1.0),
            natural_size_cm: None,
            rotation: Rotation::None,
        }
    }
}

impl LogoSpec {
    pub fn is_locked(&self) -> bool {
        matches!(self.aspect, AspectRatio::Locked(_))
    }

    /// Set the width; a locked ratio drives the height
    pub fn set_width(&mut self, width_cm: f32) {
        self.width_cm = width_cm;
        if let AspectRatio::Locked(ratio) = self.aspect {
            self.height_cm = width_cm / ratio;
        }
    }

    /// Set the height; a locked ratio drives the width
    pub fn set_height(&mut self, height_cm: f32) {
        self.height_cm = height_cm;
        if let AspectRatio::Locked(ratio) = self.aspect {
            self.width_cm = height_cm * ratio;
        }
    }

    /// Natural width / height, when known and well formed
    pub fn natural_ratio(&self) -> Option<f32> {
        self.natural_size_cm
            .filter(|(w, h)| *w > 0.0 && *h > 0.0)
            .map(|(w, h)| w / h)
    }

    /// Lock to the current proportions, or unlock.
    pub fn toggle_lock(&mut self) {
        match self.aspect {
            AspectRatio::Locked(_) => self.aspect = AspectRatio::Free,
            AspectRatio::Free => {
                let ratio = if self.width_cm > 0.0 && self.height_cm > 0.0 {
                    self.width_cm / self.height_cm
                } else {
                    self.natural_ratio().unwrap_or(1.0)
                };
                self.aspect = AspectRatio::Locked(ratio);
                self.set_width(self.width_cm);
            }
        }
    }

    /// Take the measured logo size as the requested size and lock to it
    pub fn apply_natural_size(&mut self, width_cm: f32, height_cm: f32) {
        self.natural_size_cm = Some((width_cm, height_cm));
        self.width_cm = width_cm;
        self.height_cm = height_cm;
        self.aspect = match self.natural_ratio() {
            Some(ratio) => AspectRatio::Locked(ratio),
            None => AspectRatio::Free,
        };
    }

    /// Turn a quarter clockwise: width and height trade places
    pub fn rotate_cw(&mut self) {
        self.rotation = self.rotation.next_clockwise();
        std::mem::swap(&mut self.width_cm, &mut self.height_cm);
        self.natural_size_cm = self.natural_size_cm.map(|(w, h)| (h, w));
        if self.is_locked() && self.width_cm > 0.0 && self.height_cm > 0.0 {
            self.aspect = AspectRatio::Locked(self.width_cm / self.height_cm);
        }
    }
}

/// Spacing, count and background of the tile grid
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileLayout {
    pub spacing_x_cm: f32,
    pub spacing_y_cm: f32,
    pub count: usize,
    pub background_color: HexColor,
    pub background_enabled: bool,
}

impl Default for TileLayout {
    fn default() -> Self {
        Self {
            spacing_x_cm: DEFAULT_TILE_SPACING_CM,
            spacing_y_cm: DEFAULT_TILE_SPACING_CM,
            count: DEFAULT_TILE_COUNT,
            background_color: HexColor::WHITE,
            background_enabled: false,
        }
    }
}

/// Comprehensive tiling configuration
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TileOptions {
    pub page: PageSpec,
    pub logo: LogoSpec,
    pub layout: TileLayout,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sizing: TileSizing,
}

impl TileOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| TileError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| TileError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let page = &self.page;

        if !is_positive(page.width_cm) {
            return Err(TileError::Config(
                "Page width must be greater than zero".to_string(),
            ));
        }

        if let Some(height) = page.height_cm {
            if !is_positive(height) {
                return Err(TileError::Config(
                    "Page height must be greater than zero".to_string(),
                ));
            }
        }

        let max_cm = pt_to_cm(MAX_PAGE_DIMENSION_PT);
        for (name, value) in [
            ("Page width", Some(page.width_cm)),
            ("Page height", page.height_cm),
        ] {
            if let Some(value) = value.filter(|v| *v > max_cm) {
                return Err(TileError::Config(format!(
                    "{} of {:.2}cm exceeds the {:.2}cm PDF page limit",
                    name, value, max_cm
                )));
            }
        }

        let margins = [
            ("Left margin", page.left_margin_cm),
            ("Right margin", page.right_margin_cm),
            ("Top margin", page.top_margin_cm),
            ("Bottom margin", page.effective_bottom_margin_cm()),
            ("Horizontal spacing", self.layout.spacing_x_cm),
            ("Vertical spacing", self.layout.spacing_y_cm),
        ];
        for (name, value) in margins {
            if !value.is_finite() || value < 0.0 {
                return Err(TileError::Config(format!("{} must not be negative", name)));
            }
        }

        if !is_positive(self.logo.width_cm) || !is_positive(self.logo.height_cm) {
            return Err(TileError::Config(
                "Logo width and height must be greater than zero".to_string(),
            ));
        }

        if let AspectRatio::Locked(ratio) = self.logo.aspect {
            if !is_positive(ratio) {
                return Err(TileError::Config(format!(
                    "Locked aspect ratio must be positive, got {}",
                    ratio
                )));
            }
        }

        if page.left_margin_cm + page.right_margin_cm >= page.width_cm {
            return Err(TileError::Config(
                "Horizontal margins leave no room on the page".to_string(),
            ));
        }

        Ok(())
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
