//! Symbol glyph catalog — maps the closed set of shape symbols (and free
//! dynamics text) to primitive bundles at canonical canvas coordinates.
//!
//! Lookup is total: values outside the catalog render a placeholder glyph
//! instead of failing, so a reference screen can always draw something.

use crate::model::{SymbolKind, SymbolSpec, SymbolType};
use super::metrics::{Metrics, BARLINE_COLOR, NOTE_COLOR, REST_COLOR};
use super::scene::SceneBuilder;
use super::staff::{BASS_CLEF_GLYPH, TREBLE_CLEF_GLYPH};

const SHARP_GLYPH: &str = "\u{266F}";
const FLAT_GLYPH: &str = "\u{266D}";
const NATURAL_GLYPH: &str = "\u{266E}";

/// Whether this symbol wants staff lines drawn underneath it.
pub(super) fn is_staff_anchored(spec: &SymbolSpec) -> bool {
    spec.symbol_type == SymbolType::Shape
        && SymbolKind::from_value(&spec.value).is_some_and(SymbolKind::is_staff_anchored)
}

/// Draw one symbol at its canonical canvas position.
pub(super) fn render_symbol(sb: &mut SceneBuilder, spec: &SymbolSpec, m: &Metrics) {
    match spec.symbol_type {
        SymbolType::Text => render_dynamics_text(sb, &spec.value, m),
        SymbolType::Shape => match SymbolKind::from_value(&spec.value) {
            Some(kind) => render_shape(sb, kind, m),
            None => {
                log::warn!("unknown symbol value '{}', drawing placeholder", spec.value);
                render_placeholder(sb, m);
            }
        },
    }
}

fn render_shape(sb: &mut SceneBuilder, kind: SymbolKind, m: &Metrics) {
    match kind {
        SymbolKind::Sharp => render_accidental(sb, SHARP_GLYPH, m),
        SymbolKind::Flat => render_accidental(sb, FLAT_GLYPH, m),
        SymbolKind::Natural => render_accidental(sb, NATURAL_GLYPH, m),
        SymbolKind::Fermata => render_fermata(sb, m),
        SymbolKind::TrebleClef => render_clef_symbol(sb, TREBLE_CLEF_GLYPH, m),
        SymbolKind::BassClef => render_clef_symbol(sb, BASS_CLEF_GLYPH, m),
        SymbolKind::RepeatStart => render_repeat_start(sb, m),
        SymbolKind::Tie => render_tie(sb, m),
        SymbolKind::WholeRest => render_whole_rest(sb, m),
        SymbolKind::HalfRest => render_half_rest(sb, m),
        SymbolKind::QuarterRest => render_quarter_rest(sb, m),
        SymbolKind::EighthRest => render_eighth_rest(sb, m),
    }
}

/// Dynamics markings ("pp", "mf", …) render as literal italic text.
fn render_dynamics_text(sb: &mut SceneBuilder, value: &str, m: &Metrics) {
    let u = m.line_spacing;
    sb.styled_text(
        m.center_x(),
        m.canvas_height / 2.0 + 0.7 * u,
        value,
        2.2 * u,
        "bold",
        "italic",
        NOTE_COLOR,
        "middle",
    );
}

fn render_accidental(sb: &mut SceneBuilder, glyph: &str, m: &Metrics) {
    let u = m.line_spacing;
    sb.text(
        m.center_x(),
        m.canvas_height / 2.0 + 0.8 * u,
        glyph,
        2.4 * u,
        "normal",
        NOTE_COLOR,
        "middle",
    );
}

fn render_clef_symbol(sb: &mut SceneBuilder, glyph: &str, m: &Metrics) {
    let u = m.line_spacing;
    sb.text(
        m.center_x(),
        m.canvas_height / 2.0 + u,
        glyph,
        4.5 * u,
        "normal",
        NOTE_COLOR,
        "middle",
    );
}

/// Arc over a dot.
fn render_fermata(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    let cx = m.center_x();
    let cy = m.canvas_height / 2.0;
    let d = format!(
        "M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
        cx - 1.3 * u,
        cy + 0.4 * u,
        cx - 0.9 * u,
        cy - 0.8 * u,
        cx + 0.9 * u,
        cy - 0.8 * u,
        cx + 1.3 * u,
        cy + 0.4 * u,
    );
    sb.path(&d, "none", NOTE_COLOR, 0.16 * u);
    sb.circle(cx, cy + 0.05 * u, 0.17 * u, NOTE_COLOR);
}

/// Heavy line, light line, two dots in the middle spaces.
fn render_repeat_start(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    let x0 = m.center_x() - 0.6 * u;
    let top = m.staff_top;
    let bottom = m.staff_bottom();
    sb.line(x0, top, x0, bottom, BARLINE_COLOR, 5.0);
    sb.line(x0 + 0.5 * u, top, x0 + 0.5 * u, bottom, BARLINE_COLOR, 1.6);
    sb.circle(x0 + u, top + 1.5 * u, 0.2 * u, BARLINE_COLOR);
    sb.circle(x0 + u, top + 2.5 * u, 0.2 * u, BARLINE_COLOR);
}

/// A shallow downward-bowed arc between two notehead positions.
fn render_tie(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    let cx = m.center_x();
    let cy = m.canvas_height / 2.0;
    let d = format!(
        "M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
        cx - 1.6 * u,
        cy - 0.2 * u,
        cx - 0.8 * u,
        cy + 0.6 * u,
        cx + 0.8 * u,
        cy + 0.6 * u,
        cx + 1.6 * u,
        cy - 0.2 * u,
    );
    sb.path(&d, "none", NOTE_COLOR, 0.14 * u);
}

/// Whole rest: a block hanging below the second line from the top.
fn render_whole_rest(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    let cx = m.center_x();
    sb.rect(cx - 0.7 * u, m.staff_top + u, 1.4 * u, 0.5 * u, REST_COLOR);
}

/// Half rest: the same block sitting on the middle line.
fn render_half_rest(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    let cx = m.center_x();
    sb.rect(cx - 0.7 * u, m.staff_top + 1.5 * u, 1.4 * u, 0.5 * u, REST_COLOR);
}

/// Quarter rest: a thick zigzag stroke through the middle of the staff.
fn render_quarter_rest(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    let cx = m.center_x();
    let top = m.staff_top;
    let d = format!(
        "M{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} L{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1}",
        cx - 0.1 * u,
        top + 0.6 * u,
        cx + 0.35 * u,
        top + 1.4 * u,
        cx - 0.15 * u,
        top + 2.1 * u,
        cx + 0.3 * u,
        top + 2.9 * u,
        cx - 0.15 * u,
        top + 2.55 * u,
        cx - 0.5 * u,
        top + 3.0 * u,
        cx - 0.1 * u,
        top + 3.4 * u,
    );
    sb.path(&d, "none", REST_COLOR, 0.18 * u);
}

/// Eighth rest: a dot with a curl into a down-left slash.
fn render_eighth_rest(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    let cx = m.center_x();
    let top = m.staff_top;
    sb.circle(cx - 0.3 * u, top + 1.6 * u, 0.16 * u, REST_COLOR);
    let d = format!(
        "M{:.1},{:.1} Q{:.1},{:.1} {:.1},{:.1} L{:.1},{:.1}",
        cx - 0.3 * u,
        top + 1.6 * u,
        cx + 0.05 * u,
        top + 1.9 * u,
        cx + 0.35 * u,
        top + 1.5 * u,
        cx - 0.05 * u,
        top + 3.0 * u,
    );
    sb.path(&d, "none", REST_COLOR, 0.12 * u);
}

fn render_placeholder(sb: &mut SceneBuilder, m: &Metrics) {
    let u = m.line_spacing;
    sb.text(
        m.center_x(),
        m.canvas_height / 2.0 + 0.8 * u,
        "?",
        2.5 * u,
        "bold",
        NOTE_COLOR,
        "middle",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::scene::{Prim, Scene};

    fn symbol_scene(spec: &SymbolSpec) -> Scene {
        let m = Metrics::default();
        let mut sb = SceneBuilder::new(m.canvas_width, m.canvas_height);
        render_symbol(&mut sb, spec, &m);
        sb.build()
    }

    #[test]
    fn every_catalog_value_renders_a_nonempty_bundle() {
        for &kind in SymbolKind::all() {
            let scene = symbol_scene(&SymbolSpec::shape(kind.value()));
            assert!(!scene.is_empty(), "{} rendered nothing", kind.value());
        }
    }

    #[test]
    fn unknown_value_renders_placeholder_not_error() {
        let scene = symbol_scene(&SymbolSpec::shape("coda"));
        assert_eq!(scene.prims.len(), 1);
        match &scene.prims[0] {
            Prim::Text { content, .. } => assert_eq!(content, "?"),
            other => panic!("expected placeholder text, got {other:?}"),
        }
    }

    #[test]
    fn text_symbols_render_the_literal_value() {
        let scene = symbol_scene(&SymbolSpec::text("mf"));
        match &scene.prims[0] {
            Prim::Text { content, style, .. } => {
                assert_eq!(content, "mf");
                assert_eq!(style, "italic");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn only_the_four_rests_are_staff_anchored() {
        let anchored: Vec<&str> = SymbolKind::all()
            .iter()
            .filter(|k| k.is_staff_anchored())
            .map(|k| k.value())
            .collect();
        assert_eq!(
            anchored,
            vec!["whole_rest", "half_rest", "quarter_rest", "eighth_rest"]
        );
        assert!(is_staff_anchored(&SymbolSpec::shape("whole_rest")));
        assert!(!is_staff_anchored(&SymbolSpec::shape("sharp")));
        // Text symbols never anchor, even with a rest-like value.
        assert!(!is_staff_anchored(&SymbolSpec::text("whole_rest")));
    }

    #[test]
    fn whole_rest_block_sits_inside_the_staff_block() {
        let m = Metrics::default();
        let scene = symbol_scene(&SymbolSpec::shape("whole_rest"));
        match &scene.prims[0] {
            Prim::Rect { y, h, .. } => {
                assert!(*y >= m.staff_top && *y + *h <= m.staff_bottom());
                assert_eq!(*y, m.staff_top + m.line_spacing);
            }
            other => panic!("expected rect, got {other:?}"),
        }
    }

    #[test]
    fn half_rest_sits_on_the_middle_line() {
        let m = Metrics::default();
        let scene = symbol_scene(&SymbolSpec::shape("half_rest"));
        match &scene.prims[0] {
            Prim::Rect { y, h, .. } => assert_eq!(*y + *h, m.staff_middle()),
            other => panic!("expected rect, got {other:?}"),
        }
    }
}
