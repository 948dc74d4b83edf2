//! Configuration types for archmap diagram rendering.
//!
//! This module provides configuration structures controlling how diagrams
//! are styled. All types implement [`serde::Deserialize`] so they can be
//! loaded from a TOML file by the CLI.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration.
//! - [`StyleConfig`] - Visual styling forwarded to the renderer: background
//!   color, font sizes for graph/node/edge text, and outer padding.
//!
//! The defaults reproduce the canonical BlogSite diagram styling.
//!
//! # Example
//!
//! ```
//! # use archmap::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! assert_eq!(config.style().node_font_size(), 12);
//! ```

use serde::Deserialize;

use archmap_core::color::Color;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified style configuration.
    pub fn new(style: StyleConfig) -> Self {
        Self { style }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

fn default_background_color() -> Option<String> {
    Some(String::from("white"))
}

fn default_graph_font_size() -> u16 {
    16
}

fn default_node_font_size() -> u16 {
    12
}

fn default_edge_font_size() -> u16 {
    10
}

fn default_pad() -> f32 {
    0.5
}

/// Visual styling configuration for rendered diagrams.
///
/// These values are not interpreted locally; they are forwarded to the
/// renderer as graph, node, and edge attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for the diagram, as a color string.
    /// `None` falls back to the renderer default.
    #[serde(default = "default_background_color")]
    background_color: Option<String>,

    /// Font size for the diagram title.
    #[serde(default = "default_graph_font_size")]
    graph_font_size: u16,

    /// Default font size for node labels.
    #[serde(default = "default_node_font_size")]
    node_font_size: u16,

    /// Default font size for edge labels.
    #[serde(default = "default_edge_font_size")]
    edge_font_size: u16,

    /// Padding, in inches, between the drawing and the image border.
    #[serde(default = "default_pad")]
    pad: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
            graph_font_size: default_graph_font_size(),
            node_font_size: default_node_font_size(),
            edge_font_size: default_edge_font_size(),
            pad: default_pad(),
        }
    }
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is
    /// configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }

    /// Returns the font size for the diagram title.
    pub fn graph_font_size(&self) -> u16 {
        self.graph_font_size
    }

    /// Returns the default font size for node labels.
    pub fn node_font_size(&self) -> u16 {
        self.node_font_size
    }

    /// Returns the default font size for edge labels.
    pub fn edge_font_size(&self) -> u16 {
        self.edge_font_size
    }

    /// Returns the outer padding in inches.
    pub fn pad(&self) -> f32 {
        self.pad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_styling() {
        let style = StyleConfig::default();
        assert_eq!(style.graph_font_size(), 16);
        assert_eq!(style.node_font_size(), 12);
        assert_eq!(style.edge_font_size(), 10);
        assert_eq!(style.pad(), 0.5);

        let background = style.background_color().unwrap();
        assert_eq!(background.map(|c| c.to_string()), Some("white".to_string()));
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let style = StyleConfig {
            background_color: Some("not-a-color".to_string()),
            ..StyleConfig::default()
        };
        assert!(style.background_color().is_err());
    }
}
