//! Staff renderer — converts a render request into a drawable scene.
//!
//! The renderer computes all geometry itself from the musical content
//! (pitch, duration, clef, symbol) and produces an ordered primitive list
//! in a fixed logical canvas, back to front: staff lines, then the clef
//! glyph, then the note or symbol content.

mod geometry;
mod metrics;
mod notes;
mod scene;
mod staff;
mod svg;
mod symbols;

use crate::model::{Clef, Pitch, RenderRequest};

pub use geometry::StaffPosition;
pub use metrics::Metrics;
pub use scene::{Prim, Scene};

/// Render a request into a scene using explicit metrics.
///
/// This never fails: a malformed pitch degrades to an empty scene and an
/// unknown symbol degrades to a placeholder glyph, so a quiz screen always
/// has something to draw.
pub fn render(request: &RenderRequest, m: &Metrics) -> Scene {
    let mut sb = scene::SceneBuilder::new(m.canvas_width, m.canvas_height);

    if let Some(ref note) = request.note {
        match Pitch::parse(&note.pitch) {
            Ok(pitch) => {
                let clef = request.clef.unwrap_or_default();
                staff::render_staff_lines(&mut sb, m);
                staff::render_clef(&mut sb, clef, m);
                notes::render_note(&mut sb, &pitch, note.duration, clef, m);
            }
            Err(err) => {
                // Nothing to draw; callers wanting a visible error validate
                // upstream.
                log::warn!("skipping note render: {err}");
            }
        }
    } else if let Some(ref symbol) = request.symbol {
        if symbols::is_staff_anchored(symbol) {
            staff::render_staff_lines(&mut sb, m);
        }
        symbols::render_symbol(&mut sb, symbol, m);
    }

    sb.build()
}

/// Render with default metrics and an optional canvas-width override.
///
/// `canvas_width` is in logical units; pass `None` (or 0 from FFI) for the
/// default 300. Height is fixed by the app shell.
pub fn render_request(request: &RenderRequest, canvas_width: Option<f64>) -> Scene {
    render(request, &Metrics::with_width(canvas_width))
}

/// Resolve a pitch's staff geometry without composing a scene.
///
/// Exposed for the quiz flow's answer-marking overlay, which highlights
/// the expected notehead position.
pub fn resolve_position(pitch: &Pitch, clef: Clef, m: &Metrics) -> StaffPosition {
    geometry::resolve(pitch.steps_from_middle_c(), clef, m)
}
