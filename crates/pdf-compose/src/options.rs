use crate::constants::DEFAULT_BORDER_WIDTH;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Layout configuration for one composition
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct LayoutOptions {
    pub mode: LayoutMode,

    // Border
    pub border_width: u32,
    pub border_color: BorderColor,

    // Reference page for single-image pages
    pub paper_size: PaperSize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Single,
            border_width: DEFAULT_BORDER_WIDTH,
            border_color: BorderColor::Black,
            paper_size: PaperSize::A4,
        }
    }
}

impl LayoutOptions {
    /// Build options from the raw upload form fields.
    ///
    /// Missing or empty fields take their defaults. Unknown layout and color
    /// names resolve to single and black; a border size that is not a
    /// non-negative integer is rejected.
    pub fn from_form_fields(
        layout: Option<&str>,
        border_size: Option<&str>,
        border_color: Option<&str>,
    ) -> Result<Self> {
        let mut options = Self::default();

        if let Some(layout) = non_empty(layout) {
            options.mode = LayoutMode::from_name(layout);
        }

        if let Some(size) = non_empty(border_size) {
            options.border_width = size.parse::<u32>().map_err(|_| {
                ComposeError::Config(format!(
                    "Border size must be a non-negative integer, got '{}'",
                    size
                ))
            })?;
        }

        if let Some(color) = non_empty(border_color) {
            options.border_color = BorderColor::from_name(color);
        }

        Ok(options)
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| ComposeError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ComposeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let (width_mm, height_mm) = self.paper_size.dimensions_mm();
        if !(width_mm.is_finite() && height_mm.is_finite()) || width_mm <= 0.0 || height_mm <= 0.0
        {
            return Err(ComposeError::Config(format!(
                "Paper size must be positive, got {}x{} mm",
                width_mm, height_mm
            )));
        }
        Ok(())
    }

    /// Border width as a float in page units
    pub fn border_width_pt(&self) -> f32 {
        self.border_width as f32
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
