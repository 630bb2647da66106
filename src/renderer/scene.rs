//! Scene builder — accumulates drawable primitives and produces the final
//! ordered scene.
//!
//! Primitives carry absolute canvas coordinates; the app shell applies any
//! uniform scale itself when blitting to a physical surface.

use serde::{Deserialize, Serialize};

use super::metrics::{Metrics, NOTE_COLOR};

/// One drawable primitive in canvas coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Prim {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
        width: f64,
    },
    Ellipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        /// Rotation about (cx, cy) in degrees.
        rotation: f64,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Path {
        /// SVG-syntax path data with absolute coordinates.
        d: String,
        fill: String,
        stroke: String,
        stroke_width: f64,
    },
    Rect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        fill: String,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        fill: String,
    },
    Text {
        x: f64,
        y: f64,
        content: String,
        size: f64,
        weight: String,
        style: String,
        color: String,
        anchor: String,
    },
}

/// The ordered set of primitives for one render call, back-to-front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub prims: Vec<Prim>,
}

impl Scene {
    pub fn is_empty(&self) -> bool {
        self.prims.is_empty()
    }

    /// Serialize to the JSON form consumed by the app shell.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Render to a self-contained SVG string.
    pub fn to_svg(&self) -> String {
        super::svg::scene_to_svg(self)
    }
}

pub(super) struct SceneBuilder {
    prims: Vec<Prim>,
    width: f64,
    height: f64,
}

impl SceneBuilder {
    pub(super) fn new(width: f64, height: f64) -> Self {
        Self { prims: Vec::new(), width, height }
    }

    pub(super) fn build(self) -> Scene {
        Scene { width: self.width, height: self.height, prims: self.prims }
    }

    pub(super) fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str, width: f64) {
        self.prims.push(Prim::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_string(),
            width,
        });
    }

    pub(super) fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, fill: &str) {
        self.prims.push(Prim::Rect { x, y, w, h, fill: fill.to_string() });
    }

    pub(super) fn circle(&mut self, cx: f64, cy: f64, r: f64, fill: &str) {
        self.prims.push(Prim::Circle { cx, cy, r, fill: fill.to_string() });
    }

    pub(super) fn path(&mut self, d: &str, fill: &str, stroke: &str, stroke_width: f64) {
        self.prims.push(Prim::Path {
            d: d.to_string(),
            fill: fill.to_string(),
            stroke: stroke.to_string(),
            stroke_width,
        });
    }

    pub(super) fn text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        weight: &str,
        color: &str,
        anchor: &str,
    ) {
        self.styled_text(x, y, content, size, weight, "normal", color, anchor);
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn styled_text(
        &mut self,
        x: f64,
        y: f64,
        content: &str,
        size: f64,
        weight: &str,
        style: &str,
        color: &str,
        anchor: &str,
    ) {
        self.prims.push(Prim::Text {
            x,
            y,
            content: content.to_string(),
            size,
            weight: weight.to_string(),
            style: style.to_string(),
            color: color.to_string(),
            anchor: anchor.to_string(),
        });
    }

    /// Notehead ellipse at the standard -15° engraving slant.
    /// Hollow heads shrink the radii by half the stroke so the outer
    /// silhouette matches filled heads.
    pub(super) fn notehead(&mut self, cx: f64, cy: f64, filled: bool, m: &Metrics) {
        if filled {
            self.prims.push(Prim::Ellipse {
                cx,
                cy,
                rx: m.notehead_rx,
                ry: m.notehead_ry,
                rotation: -15.0,
                fill: NOTE_COLOR.to_string(),
                stroke: "none".to_string(),
                stroke_width: 0.0,
            });
        } else {
            let sw = 3.0;
            self.prims.push(Prim::Ellipse {
                cx,
                cy,
                rx: m.notehead_rx - sw / 2.0,
                ry: m.notehead_ry - sw / 2.0,
                rotation: -15.0,
                fill: "none".to_string(),
                stroke: NOTE_COLOR.to_string(),
                stroke_width: sw,
            });
        }
    }
}
