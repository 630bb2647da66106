//! Note glyph composition — notehead, stem, flags, and ledger lines.

use crate::model::{Clef, Duration, Pitch};
use super::geometry;
use super::metrics::{Metrics, NOTE_COLOR, STAFF_COLOR};
use super::scene::SceneBuilder;

/// Draw one note at the canonical note x position.
pub(super) fn render_note(
    sb: &mut SceneBuilder,
    pitch: &Pitch,
    duration: Duration,
    clef: Clef,
    m: &Metrics,
) {
    let step = pitch.steps_from_middle_c();
    let pos = geometry::resolve(step, clef, m);
    let nx = m.note_x();

    for &ly in &pos.ledger_ys {
        sb.line(
            nx - m.notehead_rx - m.ledger_extend,
            ly,
            nx + m.notehead_rx + m.ledger_extend,
            ly,
            STAFF_COLOR,
            m.ledger_line_width,
        );
    }

    sb.notehead(nx, pos.note_y, !duration.is_hollow(), m);

    if !duration.has_stem() {
        return;
    }

    // Ties at the pivot stem down.
    let stem_down = step >= pos.stem_pivot;

    let flag_count = duration.flag_count();
    // Extra stem length keeps stacked flags clear of the notehead.
    let stem_extra = flag_count.saturating_sub(1) as f64 * m.flag_spacing;
    let stem_len = m.stem_length + stem_extra;

    let (sx, stem_end) = if stem_down {
        (nx - m.notehead_rx + 1.5, pos.note_y + stem_len)
    } else {
        (nx + m.notehead_rx - 1.5, pos.note_y - stem_len)
    };
    sb.line(sx, pos.note_y, sx, stem_end, NOTE_COLOR, m.stem_width);

    if flag_count > 0 {
        render_flags(sb, sx, stem_end, flag_count, stem_down, m);
    }
}

/// Stack 1–3 flag curves along the stem, from its free end back toward
/// the notehead. Flags sit on the stem-offset side and mirror vertically
/// with stem direction.
fn render_flags(
    sb: &mut SceneBuilder,
    stem_x: f64,
    stem_end_y: f64,
    count: usize,
    stem_down: bool,
    m: &Metrics,
) {
    let (dir_x, dir_y) = if stem_down { (-1.0, -1.0) } else { (1.0, 1.0) };
    for i in 0..count {
        let fy = stem_end_y + dir_y * i as f64 * m.flag_spacing;
        let d = flag_path(stem_x, fy, dir_x, dir_y, m.line_spacing);
        sb.path(&d, NOTE_COLOR, NOTE_COLOR, 0.3);
    }
}

/// Closed teardrop curve for a single flag, in units of the line spacing.
fn flag_path(sx: f64, fy: f64, dir_x: f64, dir_y: f64, u: f64) -> String {
    let px = |dx: f64| sx + dir_x * dx * u;
    let py = |dy: f64| fy + dir_y * dy * u;
    format!(
        "M{:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1} C{:.1},{:.1} {:.1},{:.1} {:.1},{:.1} Z",
        sx,
        fy,
        px(0.1),
        py(0.5),
        px(0.6),
        py(0.6),
        px(0.75),
        py(1.15),
        px(0.55),
        py(0.85),
        px(0.2),
        py(0.75),
        sx,
        py(0.55),
    )
}
