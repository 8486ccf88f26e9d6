//! SVG preview of parsed keymaps.
//!
//! The main keymap provides one outline per key. Each configured label layer
//! then writes its labels into the outlines of its own keymap. Labels are
//! placed by anchor and baseline only; no text measurement is done.

use log::{debug, info, warn};
use svg::{
    Document,
    node::element::{Group, Rectangle, Text},
};

use keygrid_core::{
    geometry::{Bounds, Point},
    keymap::Keymap,
};

use crate::{
    canvas::Canvas,
    config::{AppConfig, HorizontalAlign, LabelConfig, LabelPosition, VerticalAlign},
    export,
};

const BACKGROUND_COLOR: &str = "white";
const OUTLINE_COLOR: &str = "#dddddd";
const LABEL_COLOR: &str = "black";
const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Renders keymaps to an SVG [`Document`].
pub struct Svg<'a> {
    config: &'a AppConfig,
    keymaps: &'a [Keymap],
    canvas: Canvas,
}

impl<'a> Svg<'a> {
    /// Prepares a renderer for `keymaps`.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if no keymap has a key.
    pub fn new(config: &'a AppConfig, keymaps: &'a [Keymap]) -> Result<Self, export::Error> {
        let canvas = Canvas::from_keymaps(keymaps, config.source(), config.render())
            .ok_or_else(|| export::Error::Render("no keys to render".to_string()))?;
        debug!(width = canvas.width(), height = canvas.height(); "Canvas computed");

        Ok(Self {
            config,
            keymaps,
            canvas,
        })
    }

    /// Builds the complete document.
    pub fn render_document(&self) -> Document {
        let width = self.canvas.width();
        let height = self.canvas.height();

        let background = Rectangle::new()
            .set("x", 0)
            .set("y", 0)
            .set("width", width)
            .set("height", height)
            .set("fill", BACKGROUND_COLOR);

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {width} {height}"))
            .set("width", width)
            .set("height", height)
            .add(background);

        let Some(main) = self.main_keymap() else {
            return doc;
        };
        info!(title = main.title(), keys = main.len(); "Rendering key outlines");
        doc = doc.add(self.render_outlines(main));

        if self.config.labels().is_empty() {
            doc = doc.add(self.render_labels(&LabelConfig::new(main.title()), main));
            return doc;
        }

        for label in self.config.labels() {
            match self.find_keymap(label.layer()) {
                Some(keymap) => doc = doc.add(self.render_labels(label, keymap)),
                None => warn!(layer = label.layer(); "Missing label layer"),
            }
        }

        doc
    }

    fn find_keymap(&self, title: &str) -> Option<&'a Keymap> {
        self.keymaps.iter().find(|keymap| keymap.title() == title)
    }

    /// The keymap whose keys provide the outlines.
    ///
    /// That is the layer of the first label marked `main`, else the first
    /// configured layer that exists, else the first keymap.
    fn main_keymap(&self) -> Option<&'a Keymap> {
        let labels = self.config.labels();
        labels
            .iter()
            .find(|label| label.is_main())
            .and_then(|label| self.find_keymap(label.layer()))
            .or_else(|| {
                labels
                    .iter()
                    .find_map(|label| self.find_keymap(label.layer()))
            })
            .or_else(|| self.keymaps.first())
    }

    fn render_outlines(&self, keymap: &Keymap) -> Group {
        let inset = i64::from(self.config.render().key_border());

        let mut group = Group::new()
            .set("fill", "none")
            .set("stroke", OUTLINE_COLOR)
            .set("stroke-width", 1);

        for key in keymap.keys() {
            let bounds = self.canvas.key_bounds(key).inset(inset);
            let rect = Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width().max(0))
                .set("height", bounds.height().max(0));
            group = group.add(rect);
        }

        group
    }

    fn render_labels(&self, label: &LabelConfig, keymap: &Keymap) -> Group {
        let render = self.config.render();
        let inset = i64::from(render.key_border()) * 3 / 2;
        let font_size = f64::from(render.font_height()) * label.scale();

        let mut group = Group::new()
            .set("fill", LABEL_COLOR)
            .set("font-family", DEFAULT_FONT_FAMILY)
            .set("font-size", font_size);

        let mut drawn = 0usize;
        for key in keymap.keys() {
            let text = self.config.remap(key.label());
            if text.is_empty() || label.ignores(text) {
                continue;
            }

            let bounds = self.canvas.key_bounds(key).inset(inset);
            let (anchor, text_anchor, baseline) = place_label(bounds, label.position());

            let element = Text::new(text)
                .set("x", anchor.x())
                .set("y", anchor.y())
                .set("text-anchor", text_anchor)
                .set("dominant-baseline", baseline);
            group = group.add(element);
            drawn += 1;
        }

        debug!(layer = keymap.title(), labels = drawn; "Labels rendered");
        group
    }
}

/// Returns the anchor point, `text-anchor` and `dominant-baseline` for a
/// label inside `bounds`.
fn place_label(bounds: Bounds, position: LabelPosition) -> (Point, &'static str, &'static str) {
    let center = bounds.center();

    let (x, text_anchor) = match position.horizontal() {
        HorizontalAlign::Left => (bounds.min_x(), "start"),
        HorizontalAlign::Center => (center.x(), "middle"),
        HorizontalAlign::Right => (bounds.max_x(), "end"),
    };

    let (y, baseline) = match position.vertical() {
        VerticalAlign::Top => (bounds.min_y(), "text-before-edge"),
        VerticalAlign::Center => (center.y(), "middle"),
        VerticalAlign::Bottom => (bounds.max_y(), "text-after-edge"),
    };

    (Point::new(x, y), text_anchor, baseline)
}
