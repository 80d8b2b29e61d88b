//! Map composition options

use crate::constants::{DEFAULT_TITLE, DEFAULT_ZOOM_START, heatmap};
use serde::{Deserialize, Serialize};

/// Heatmap rendering parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapStyle {
    /// Point radius in pixels
    pub radius: u32,
    /// Blur radius in pixels
    pub blur: u32,
    /// Minimum opacity of the heat gradient
    pub min_opacity: f64,
}

impl Default for HeatmapStyle {
    fn default() -> Self {
        Self {
            radius: heatmap::RADIUS,
            blur: heatmap::BLUR,
            min_opacity: heatmap::MIN_OPACITY,
        }
    }
}

/// Everything that shapes the composed map
///
/// `layers_by_band` takes precedence over `layers_by_mode` when both are set.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOptions {
    /// Title shown at the top of the page
    pub title: String,
    /// Draw a line through QSOs in file order
    pub connect: bool,
    /// One layer per band, markers coloured by mode
    pub layers_by_band: bool,
    /// One layer per mode, markers coloured by mode
    pub layers_by_mode: bool,
    /// Global heatmap overlay
    pub heatmap: bool,
    /// One heatmap per band
    pub heatmap_by_band: bool,
    /// One heatmap per mode
    pub heatmap_by_mode: bool,
    /// Cluster markers within each layer
    pub cluster: bool,
    /// Add a time slider driven by QSO date and time
    pub time_slider: bool,
    /// Heatmap rendering parameters
    pub heatmap_style: HeatmapStyle,
    /// Initial zoom level before bounds fitting
    pub zoom_start: u8,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            connect: false,
            layers_by_band: false,
            layers_by_mode: false,
            heatmap: false,
            heatmap_by_band: false,
            heatmap_by_mode: false,
            cluster: true,
            time_slider: false,
            heatmap_style: HeatmapStyle::default(),
            zoom_start: DEFAULT_ZOOM_START,
        }
    }
}
