//! Shared view configuration.
//!
//! Options are plain data with serde support so they can live in a JSON file
//! under the user config dir or in `eframe` persistent storage. Colors are
//! stored as hex strings and converted to [`egui::Color32`] on demand.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Configuration shared by the waveform views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewerOptions {
    /// Overview waveform color (hex)
    #[serde(default = "default_waveform_color")]
    pub waveform_color: String,

    /// Zoomview waveform color (hex)
    #[serde(default = "default_zoomview_color")]
    pub zoomview_color: String,

    /// Overview highlight rectangle color (hex)
    #[serde(default = "default_highlight_color")]
    pub highlight_color: String,

    /// Time span shown by a freshly created zoom view, in seconds
    #[serde(default = "default_zoomview_span_secs")]
    pub zoomview_span_secs: f64,

    /// Minimum scrollbar thumb width in pixels
    #[serde(default = "default_scrollbar_min_width")]
    pub scrollbar_min_width: f32,
}

fn default_waveform_color() -> String {
    "#00e180".to_string()
}

fn default_zoomview_color() -> String {
    "#3c9cd7".to_string()
}

fn default_highlight_color() -> String {
    "#aaaaaa".to_string()
}

fn default_zoomview_span_secs() -> f64 {
    10.0
}

fn default_scrollbar_min_width() -> f32 {
    50.0
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            waveform_color: default_waveform_color(),
            zoomview_color: default_zoomview_color(),
            highlight_color: default_highlight_color(),
            zoomview_span_secs: default_zoomview_span_secs(),
            scrollbar_min_width: default_scrollbar_min_width(),
        }
    }
}

impl ViewerOptions {
    pub fn waveform_color32(&self) -> Color32 {
        hex_to_color32(&self.waveform_color)
    }

    pub fn zoomview_color32(&self) -> Color32 {
        hex_to_color32(&self.zoomview_color)
    }

    pub fn highlight_color32(&self) -> Color32 {
        hex_to_color32(&self.highlight_color)
    }

    /// Default location of the options file under the user config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wavescope").join("options.json"))
    }

    /// Loads options from a JSON file. Unknown fields are ignored, missing
    /// fields take their defaults.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("failed to open options file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid options file: {}", path.display()))
    }

    /// Loads options from the default config path, falling back to defaults
    /// when no file exists. A present-but-malformed file is an error.
    pub fn load_default() -> Result<Self> {
        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

/// Converts a `#rrggbb` or `#rrggbbaa` hex string to a [`Color32`].
///
/// Malformed input falls back to opaque black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    if !hex.is_ascii() {
        return Color32::BLACK;
    }

    let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(0);

    match hex.len() {
        6 => Color32::from_rgb(parse(0..2), parse(2..4), parse(4..6)),
        8 => Color32::from_rgba_unmultiplied(parse(0..2), parse(2..4), parse(4..6), parse(6..8)),
        _ => Color32::BLACK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color32_rgb() {
        assert_eq!(hex_to_color32("#ff8000"), Color32::from_rgb(255, 128, 0));
        assert_eq!(hex_to_color32("00e180"), Color32::from_rgb(0, 225, 128));
    }

    #[test]
    fn test_hex_to_color32_rgba() {
        assert_eq!(
            hex_to_color32("#ff800080"),
            Color32::from_rgba_unmultiplied(255, 128, 0, 128)
        );
    }

    #[test]
    fn test_hex_to_color32_malformed() {
        assert_eq!(hex_to_color32("#ff"), Color32::BLACK);
        assert_eq!(hex_to_color32(""), Color32::BLACK);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options: ViewerOptions =
            serde_json::from_str(r##"{ "highlight_color": "#123456" }"##).unwrap();

        assert_eq!(options.highlight_color, "#123456");
        assert_eq!(options.zoomview_span_secs, 10.0);
        assert_eq!(options.waveform_color, ViewerOptions::default().waveform_color);
    }

    #[test]
    fn test_serde_round_trip() {
        let options = ViewerOptions {
            zoomview_span_secs: 2.5,
            ..Default::default()
        };

        let json = serde_json::to_string(&options).unwrap();
        let restored: ViewerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, options);
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("wavescope_options_test.json");
        std::fs::write(&path, r#"{ "zoomview_span_secs": 4.0 }"#).unwrap();

        let options = ViewerOptions::load_from_file(&path).unwrap();
        assert_eq!(options.zoomview_span_secs, 4.0);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_from_missing_file_is_error() {
        assert!(ViewerOptions::load_from_file("/nonexistent/wavescope.json").is_err());
    }
}
