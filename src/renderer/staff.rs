//! Staff line and clef glyph rendering.

use crate::model::Clef;
use super::metrics::{Metrics, NOTE_COLOR, STAFF_COLOR};
use super::scene::SceneBuilder;

/// Musical symbol codepoints drawn as text glyphs. The app shell ships a
/// music-capable font, so clefs stay text primitives instead of baked
/// outline paths.
pub(super) const TREBLE_CLEF_GLYPH: &str = "\u{1D11E}";
pub(super) const BASS_CLEF_GLYPH: &str = "\u{1D122}";

pub(super) fn render_staff_lines(sb: &mut SceneBuilder, m: &Metrics) {
    let x1 = m.staff_inset;
    let x2 = m.canvas_width - m.staff_inset;
    for i in 0..5 {
        let y = m.staff_top + i as f64 * m.line_spacing;
        sb.line(x1, y, x2, y, STAFF_COLOR, m.staff_line_width);
    }
}

/// Draw the clef glyph at the left edge of the staff.
///
/// Each clef anchors on its reference line: treble on the G line (second
/// from the bottom), bass on the F line (second from the top).
pub(super) fn render_clef(sb: &mut SceneBuilder, clef: Clef, m: &Metrics) {
    let size = m.line_spacing * 3.6;
    match clef {
        Clef::Treble => {
            let g_line_y = m.staff_bottom() - m.line_spacing;
            sb.text(m.clef_x, g_line_y, TREBLE_CLEF_GLYPH, size, "normal", NOTE_COLOR, "middle");
        }
        Clef::Bass => {
            let f_line_y = m.staff_top + m.line_spacing;
            sb.text(m.clef_x, f_line_y, BASS_CLEF_GLYPH, size, "normal", NOTE_COLOR, "middle");
        }
    }
}
