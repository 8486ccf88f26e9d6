//! Mapping from source grid coordinates to output pixels.
//!
//! One 1u key covers `h_scale` × `v_scale` source cells and
//! `key_width` × `key_height` pixels. The top-left corner of the combined
//! key bounds lands at `(image_border, image_border)`.

use keygrid_core::{
    geometry::{Bounds, Point},
    keymap::{Key, Keymap},
};

use crate::config::{RenderConfig, SourceConfig};

/// Pixel space of a rendered layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    /// Grid bounds of every key being rendered.
    grid: Bounds,
    border: i64,
    key_width: i64,
    key_height: i64,
    h_scale: i64,
    v_scale: i64,
}

impl Canvas {
    /// Creates a canvas covering `grid`.
    ///
    /// Both scales must be non-zero; callers validate the configuration first.
    pub fn new(grid: Bounds, source: &SourceConfig, render: &RenderConfig) -> Self {
        Self {
            grid,
            border: i64::from(render.image_border()),
            key_width: i64::from(render.key_width()),
            key_height: i64::from(render.key_height()),
            h_scale: i64::from(source.h_scale()),
            v_scale: i64::from(source.v_scale()),
        }
    }

    /// Creates a canvas covering every key of every keymap, or `None` if
    /// there are no keys at all.
    pub fn from_keymaps(
        keymaps: &[Keymap],
        source: &SourceConfig,
        render: &RenderConfig,
    ) -> Option<Self> {
        keymaps
            .iter()
            .filter_map(Keymap::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
            .map(|grid| Self::new(grid, source, render))
    }

    /// Maps a grid coordinate to its pixel position.
    pub fn point(&self, gx: i64, gy: i64) -> Point {
        Point::new(
            self.border + (gx - self.grid.min_x()) * self.key_width / self.h_scale,
            self.border + (gy - self.grid.min_y()) * self.key_height / self.v_scale,
        )
    }

    /// Returns the pixel rectangle of the cell a key occupies, border to border.
    pub fn key_bounds(&self, key: &Key) -> Bounds {
        let grid = key.bounds();
        Bounds::new(
            self.point(grid.min_x(), grid.min_y()),
            self.point(grid.max_x(), grid.max_y()),
        )
    }

    /// Total width in pixels, margins included.
    pub fn width(&self) -> i64 {
        2 * self.border + self.grid.width() * self.key_width / self.h_scale
    }

    /// Total height in pixels, margins included.
    pub fn height(&self) -> i64 {
        2 * self.border + self.grid.height() * self.key_height / self.v_scale
    }
}
