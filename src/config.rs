/// Application configuration
///
/// All values are compile-time defaults; nothing is read from disk or the
/// environment. Grouping them here keeps the layout, export and status code
/// free of magic numbers.

use std::time::Duration;

use crate::ui::status::Tone;

pub const WINDOW_TITLE: &str = "Just Download these Images";

/// Tunable values for the gallery window, grid, export and status line
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Initial window size in logical pixels
    pub window_width: f32,
    pub window_height: f32,
    /// Smallest size the window can be resized to
    pub min_width: f32,
    pub min_height: f32,
    /// Bounding box for thumbnails (square)
    pub thumbnail_size: u32,
    /// Width of one grid cell, not counting the margin
    pub cell_size: u32,
    /// Gap added around each cell (half on each side)
    pub cell_margin: u32,
    /// Height of the name row under each thumbnail
    pub label_height: u32,
    /// JPEG quality used by "Download All" (1-100)
    pub jpeg_quality: u8,
    /// How long transient status messages stay before the idle prompt returns
    pub success_delay: Duration,
    pub warning_delay: Duration,
    pub error_delay: Duration,
    /// Horizontal space taken by window padding and the gallery border
    pub chrome_width: f32,
    /// Vertical space taken by the top bar, button bar and padding
    pub chrome_height: f32,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 600.0,
            min_width: 400.0,
            min_height: 300.0,
            thumbnail_size: 120,
            cell_size: 120,
            cell_margin: 20,
            label_height: 18,
            jpeg_quality: 95,
            success_delay: Duration::from_millis(1500),
            warning_delay: Duration::from_millis(2000),
            error_delay: Duration::from_millis(3000),
            chrome_width: 34.0,
            chrome_height: 110.0,
        }
    }
}

impl GalleryConfig {
    /// Distance between the origins of two neighbouring cells
    pub fn pitch(&self) -> u32 {
        self.cell_size + self.cell_margin
    }

    /// How long a status message of the given tone is shown
    pub fn status_delay(&self, tone: Tone) -> Duration {
        match tone {
            Tone::Success => self.success_delay,
            Tone::Warning => self.warning_delay,
            Tone::Error => self.error_delay,
            Tone::Idle | Tone::Hint => Duration::ZERO,
        }
    }

    /// Gallery viewport size for a given window size, never negative
    pub fn viewport_for_window(&self, width: f32, height: f32) -> (u32, u32) {
        let w = (width - self.chrome_width).max(0.0);
        let h = (height - self.chrome_height).max(0.0);
        (w as u32, h as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fit_together() {
        let config = GalleryConfig::default();
        assert!(config.cell_size >= config.thumbnail_size);
        assert_eq!(config.pitch(), 140);
        assert_eq!(config.jpeg_quality, 95);
        assert!(config.min_width <= config.window_width);
    }

    #[test]
    fn test_status_delays_by_tone() {
        let config = GalleryConfig::default();
        assert_eq!(config.status_delay(Tone::Success), Duration::from_millis(1500));
        assert_eq!(config.status_delay(Tone::Warning), Duration::from_secs(2));
        assert_eq!(config.status_delay(Tone::Error), Duration::from_secs(3));
        assert_eq!(config.status_delay(Tone::Idle), Duration::ZERO);
    }

    #[test]
    fn test_viewport_never_negative() {
        let config = GalleryConfig::default();
        assert_eq!(config.viewport_for_window(10.0, 10.0), (0, 0));
        assert_eq!(config.viewport_for_window(800.0, 600.0), (766, 490));
    }

    #[test]
    fn test_window_title() {
        assert_eq!(WINDOW_TITLE, "Just Download these Images");
    }
}
