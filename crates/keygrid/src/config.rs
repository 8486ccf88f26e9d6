//! Configuration types for Keygrid rendering.
//!
//! This module provides the configuration structures that control how parsed
//! keymaps are scaled and labelled. All types implement
//! [`serde::Deserialize`] for loading from TOML files.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration root.
//! - [`SourceConfig`] - The source file and how many of its cells make up one key.
//! - [`RenderConfig`] - Pixel sizes of keys, borders and labels.
//! - [`LabelConfig`] - One layer of labels drawn onto the key outlines.
//!
//! # Example
//!
//! ```
//! # use keygrid::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.source().h_scale(), 7);
//! assert!(config.validate().is_ok());
//! ```

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Source grid scale section.
    #[serde(default)]
    source: SourceConfig,

    /// Pixel geometry section.
    #[serde(default)]
    render: RenderConfig,

    /// Label layers, drawn in order. Written as `[[label]]` tables.
    #[serde(default, rename = "label")]
    labels: Vec<LabelConfig>,

    /// Label substitutions applied before drawing.
    #[serde(default)]
    remap: HashMap<String, String>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the given scale and geometry sections
    /// and no label layers.
    pub fn new(source: SourceConfig, render: RenderConfig) -> Self {
        Self {
            source,
            render,
            ..Self::default()
        }
    }

    /// Sets the label layers.
    pub fn with_labels(mut self, labels: Vec<LabelConfig>) -> Self {
        self.labels = labels;
        self
    }

    /// Adds a label substitution.
    pub fn with_remap(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.remap.insert(from.into(), to.into());
        self
    }

    /// Returns the source grid scale configuration.
    pub fn source(&self) -> &SourceConfig {
        &self.source
    }

    /// Returns the pixel geometry configuration.
    pub fn render(&self) -> &RenderConfig {
        &self.render
    }

    /// Returns the configured label layers in drawing order.
    pub fn labels(&self) -> &[LabelConfig] {
        &self.labels
    }

    /// Returns the substitution for `label`, or `label` itself.
    pub fn remap<'a>(&'a self, label: &'a str) -> &'a str {
        self.remap.get(label).map_or(label, String::as_str)
    }

    /// Resolves relative `source.path` and `render.image` against `base`,
    /// normally the directory holding the configuration file.
    pub fn relative_to(mut self, base: &Path) -> Self {
        if let Some(path) = self.source.path.take() {
            self.source.path = Some(base.join(path));
        }
        if let Some(image) = self.render.image.take() {
            self.render.image = Some(base.join(image));
        }
        self
    }

    /// Checks the values used as divisors and multipliers of the pixel mapping.
    ///
    /// # Errors
    ///
    /// Returns a message naming the first offending field.
    pub fn validate(&self) -> Result<(), String> {
        let checks = [
            ("source.h_scale", self.source.h_scale),
            ("source.v_scale", self.source.v_scale),
            ("render.key_width", self.render.key_width),
            ("render.key_height", self.render.key_height),
        ];
        for (name, value) in checks {
            if value == 0 {
                return Err(format!("`{name}` must be greater than zero"));
            }
        }

        for label in &self.labels {
            if !label.scale.is_finite() || label.scale < 0.0 {
                return Err(format!(
                    "label layer `{}` has invalid scale {}",
                    label.layer, label.scale
                ));
            }
        }

        Ok(())
    }
}

/// The annotated source and the size of a standard 1u key in it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Source file to read when none is given on the command line.
    path: Option<PathBuf>,
    h_scale: u32,
    v_scale: u32,
}

impl SourceConfig {
    pub fn new(h_scale: u32, v_scale: u32) -> Self {
        Self {
            path: None,
            h_scale,
            v_scale,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Source columns per 1u key.
    pub fn h_scale(&self) -> u32 {
        self.h_scale
    }

    /// Source rows per 1u key.
    pub fn v_scale(&self) -> u32 {
        self.v_scale
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: None,
            h_scale: 7,
            v_scale: 2,
        }
    }
}

/// Pixel geometry of the rendered layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// SVG file to write when none is given on the command line.
    image: Option<PathBuf>,
    key_width: u32,
    key_height: u32,
    key_border: u32,
    image_border: u32,
    font_height: u32,
}

impl RenderConfig {
    pub fn new(key_width: u32, key_height: u32) -> Self {
        Self {
            key_width,
            key_height,
            ..Self::default()
        }
    }

    pub fn with_key_border(mut self, key_border: u32) -> Self {
        self.key_border = key_border;
        self
    }

    pub fn with_image_border(mut self, image_border: u32) -> Self {
        self.image_border = image_border;
        self
    }

    pub fn with_font_height(mut self, font_height: u32) -> Self {
        self.font_height = font_height;
        self
    }

    pub fn image(&self) -> Option<&Path> {
        self.image.as_deref()
    }

    /// Pixels per 1u key horizontally.
    pub fn key_width(&self) -> u32 {
        self.key_width
    }

    /// Pixels per 1u key vertically.
    pub fn key_height(&self) -> u32 {
        self.key_height
    }

    /// Inset of each key outline from its cell.
    pub fn key_border(&self) -> u32 {
        self.key_border
    }

    /// Margin around the whole layout.
    pub fn image_border(&self) -> u32 {
        self.image_border
    }

    /// Base label font size.
    pub fn font_height(&self) -> u32 {
        self.font_height
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            image: None,
            key_width: 64,
            key_height: 64,
            key_border: 2,
            image_border: 32,
            font_height: 12,
        }
    }
}

/// One layer of labels drawn onto the key outlines.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    /// Title of the keymap the labels come from.
    layer: String,
    position: LabelPosition,
    /// Font scale relative to [`RenderConfig::font_height`].
    scale: f64,
    /// Whether this layer's keymap provides the key outlines.
    main: bool,
    /// Labels that are not drawn for this layer.
    ignore: Vec<String>,
}

impl LabelConfig {
    /// Creates a centered, unscaled label layer for the keymap titled `layer`.
    pub fn new(layer: impl Into<String>) -> Self {
        Self {
            layer: layer.into(),
            ..Self::default()
        }
    }

    pub fn with_position(mut self, position: LabelPosition) -> Self {
        self.position = position;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_main(mut self, main: bool) -> Self {
        self.main = main;
        self
    }

    pub fn with_ignore(mut self, ignore: Vec<String>) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn layer(&self) -> &str {
        &self.layer
    }

    pub fn position(&self) -> LabelPosition {
        self.position
    }

    /// Font scale of this layer. Zero stands for an unscaled layer.
    pub fn scale(&self) -> f64 {
        if self.scale == 0.0 { 1.0 } else { self.scale }
    }

    pub fn is_main(&self) -> bool {
        self.main
    }

    /// Returns `true` if `label` is listed in this layer's ignore list.
    pub fn ignores(&self, label: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == label)
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            layer: String::new(),
            position: LabelPosition::default(),
            scale: 1.0,
            main: false,
            ignore: Vec::new(),
        }
    }
}

/// Vertical placement of a label inside its key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Horizontal placement of a label inside its key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Placement of a label inside its key.
///
/// Parsed leniently from strings such as `"center"`, `"top"`,
/// `"bottom-right"` or `"topleft"`: a `top` or `bottom` prefix selects the
/// vertical placement and a `left` or `right` suffix the horizontal one.
/// Anything else is centered.
///
/// ```
/// # use keygrid::config::{HorizontalAlign, LabelPosition, VerticalAlign};
/// let position = LabelPosition::from("bottom-right");
/// assert_eq!(position.vertical(), VerticalAlign::Bottom);
/// assert_eq!(position.horizontal(), HorizontalAlign::Right);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub struct LabelPosition {
    vertical: VerticalAlign,
    horizontal: HorizontalAlign,
}

impl LabelPosition {
    pub fn new(vertical: VerticalAlign, horizontal: HorizontalAlign) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    pub fn vertical(&self) -> VerticalAlign {
        self.vertical
    }

    pub fn horizontal(&self) -> HorizontalAlign {
        self.horizontal
    }
}

impl From<&str> for LabelPosition {
    fn from(value: &str) -> Self {
        let vertical = if value.starts_with("top") {
            VerticalAlign::Top
        } else if value.starts_with("bottom") {
            VerticalAlign::Bottom
        } else {
            VerticalAlign::Center
        };

        let horizontal = if value.ends_with("left") {
            HorizontalAlign::Left
        } else if value.ends_with("right") {
            HorizontalAlign::Right
        } else {
            HorizontalAlign::Center
        };

        Self::new(vertical, horizontal)
    }
}

impl From<String> for LabelPosition {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}
