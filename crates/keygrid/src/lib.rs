//! Keygrid - keyboard layouts from box-drawing diagrams.
//!
//! Parses the keyboard diagrams that QMK-style `keymap.c` files carry in
//! their comments and renders them as SVG previews.

pub mod config;

mod canvas;
mod error;
mod export;

pub use keygrid_core::{geometry, keymap};
pub use keygrid_parser::ParseError;

pub use error::KeygridError;

use std::io::BufRead;

use log::{debug, info, trace};

use config::AppConfig;
use keymap::Keymap;

/// Builder for parsing and rendering keyboard diagrams.
///
/// # Examples
///
/// ```rust
/// use keygrid::{LayoutBuilder, config::AppConfig};
///
/// let source = "/* Base\n┌──────┬──────┐\n│ Esc  │  Q   │\n└──────┴──────┘\n*/\n";
///
/// let builder = LayoutBuilder::new(AppConfig::default());
///
/// // Parse source to keymaps
/// let keymaps = builder.parse(source)
///     .expect("Failed to parse");
/// assert_eq!(keymaps[0].keys()[0].label(), "Esc");
///
/// // Render keymaps to SVG
/// let svg = builder.render_svg(&keymaps)
///     .expect("Failed to render");
/// assert!(svg.contains("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct LayoutBuilder {
    config: AppConfig,
}

impl LayoutBuilder {
    /// Create a new layout builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse an in-memory source into keymaps.
    ///
    /// # Errors
    ///
    /// Returns [`KeygridError::Parse`] if the source contains no keymap.
    pub fn parse(&self, source: &str) -> Result<Vec<Keymap>, KeygridError> {
        self.parse_reader(source.as_bytes())
    }

    /// Parse keymaps from a line source such as an open file.
    ///
    /// # Errors
    ///
    /// Returns [`KeygridError::Parse`] if reading fails or the source
    /// contains no keymap.
    pub fn parse_reader<R: BufRead>(&self, reader: R) -> Result<Vec<Keymap>, KeygridError> {
        info!("Parsing keymaps");

        let keymaps = keygrid_parser::parse_keymaps(reader)?;

        debug!(keymaps = keymaps.len(); "Keymaps parsed successfully");
        trace!(keymaps:?; "Parsed keymaps");

        Ok(keymaps)
    }

    /// Render keymaps to an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`KeygridError::Config`] if the configuration cannot be used
    /// for the pixel mapping, or [`KeygridError::Export`] if there is nothing
    /// to render.
    pub fn render_svg(&self, keymaps: &[Keymap]) -> Result<String, KeygridError> {
        self.config.validate().map_err(KeygridError::Config)?;

        info!(keymaps = keymaps.len(); "Rendering SVG");
        let svg = export::svg::Svg::new(&self.config, keymaps)?;
        let document = svg.render_document();

        info!("SVG rendered successfully");
        Ok(document.to_string())
    }
}
