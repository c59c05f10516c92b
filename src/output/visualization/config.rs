//! Plot configuration for finite-size plots

use plotters::prelude::*;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `marker_color`, `marker_size`: Hollow square markers of the samples
/// - `overlay_colors`: Colors of reference/fit lines, cycled
/// - `background`: Background color
/// - `line_width`: Overlay line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use fcm_mobility::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::finite_size("Triply periodic, a = 1");
/// config.marker_color = BLUE;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: auto-set by plot type)
    pub xlabel: String,

    /// Y-axis label (default: "6πη · mobility")
    pub ylabel: String,

    /// Sample marker color (default: RED)
    pub marker_color: RGBColor,

    /// Half-width of the square markers in pixels (default: 5)
    pub marker_size: i32,

    /// Colors for overlay lines
    ///
    /// If None, uses default palette: [BLUE, BLACK, GREEN, MAGENTA, ...]
    pub overlay_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: String::new(),  // Set by specific plot type
            ylabel: "6πη · mobility".to_string(),
            marker_color: RED,
            marker_size: 5,
            overlay_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::finite_size(NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for finite-size plots with optional custom title
    ///
    /// Sets xlabel to "1/L" and title to custom value or "Finite-size mobility"
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::finite_size("Hasimoto TP");
    /// let config = PlotConfig::finite_size(format!("a = {}", radius));
    /// let config = PlotConfig::finite_size(NO_TITLE);
    /// ```
    pub fn finite_size(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "1/L".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Finite-size mobility".to_string());
        config
    }

    /// Get color for overlay at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_overlay_color(&self, overlay_index: usize) -> RGBColor {
        if let Some(ref colors) = self.overlay_colors {
            if overlay_index < colors.len() {
                return colors[overlay_index];
            }
        }

        let default_colors = [
            BLUE,
            BLACK,
            GREEN,
            MAGENTA,
            CYAN,
            RGBColor(255, 165, 0),  // Orange
        ];

        default_colors[overlay_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
