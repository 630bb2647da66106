//! Staff geometry — diatonic step to vertical coordinate, ledger lines,
//! and the stem-direction pivot.
//!
//! Both clefs share the same spacing and sign convention (higher pitch,
//! smaller y); they differ only in which step sits on the bottom line.

use crate::model::Clef;
use super::metrics::Metrics;

/// Resolved vertical geometry for one notehead.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffPosition {
    /// y of the notehead center.
    pub note_y: f64,
    /// y of each required ledger line, nearest-to-staff first.
    pub ledger_ys: Vec<f64>,
    /// Step on the middle staff line; at or above it, stems point down.
    pub stem_pivot: i32,
}

/// Diatonic step (from middle C) sitting on the bottom staff line.
/// Treble: E4. Bass: G2.
fn bottom_line_step(clef: Clef) -> i32 {
    match clef {
        Clef::Treble => 2,
        Clef::Bass => -10,
    }
}

/// Step on the top staff line, eight steps above the bottom line.
fn top_line_step(clef: Clef) -> i32 {
    bottom_line_step(clef) + 8
}

/// Step on the middle staff line (treble B4, bass D3).
pub(super) fn stem_pivot_step(clef: Clef) -> i32 {
    bottom_line_step(clef) + 4
}

/// Vertical coordinate for a diatonic step under a clef.
/// Each step moves half a line spacing; up in pitch is up on screen.
pub(super) fn step_y(step: i32, clef: Clef, m: &Metrics) -> f64 {
    m.staff_bottom() - (step - bottom_line_step(clef)) as f64 * m.half_space()
}

/// Resolve a step to its notehead y, ledger lines, and stem pivot.
///
/// Ledger lines start one spacing unit beyond the nearest staff boundary
/// and march outward to and including the notehead's coordinate; a note
/// within or exactly on the staff needs none.
pub(super) fn resolve(step: i32, clef: Clef, m: &Metrics) -> StaffPosition {
    let note_y = step_y(step, clef, m);
    let mut ledger_ys = Vec::new();

    if step < bottom_line_step(clef) {
        let mut y = m.staff_bottom() + m.line_spacing;
        while y <= note_y + 0.1 {
            ledger_ys.push(y);
            y += m.line_spacing;
        }
    } else if step > top_line_step(clef) {
        let mut y = m.staff_top - m.line_spacing;
        while y >= note_y - 0.1 {
            ledger_ys.push(y);
            y -= m.line_spacing;
        }
    }

    StaffPosition { note_y, ledger_ys, stem_pivot: stem_pivot_step(clef) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn note_y_strictly_decreases_as_step_increases() {
        let m = Metrics::default();
        for clef in [Clef::Treble, Clef::Bass] {
            for step in -20..20 {
                let lower = step_y(step, clef, &m);
                let higher = step_y(step + 1, clef, &m);
                assert!(
                    higher < lower,
                    "{clef:?}: step {} at y {} should sit above step {} at y {}",
                    step + 1,
                    higher,
                    step,
                    lower
                );
            }
        }
    }

    #[test]
    fn bottom_line_steps_land_on_bottom_line() {
        let m = Metrics::default();
        // Treble E4, bass G2.
        assert_eq!(step_y(2, Clef::Treble, &m), m.staff_bottom());
        assert_eq!(step_y(-10, Clef::Bass, &m), m.staff_bottom());
        // Top lines: treble F5, bass A3.
        assert_eq!(step_y(10, Clef::Treble, &m), m.staff_top);
        assert_eq!(step_y(-2, Clef::Bass, &m), m.staff_top);
    }

    #[test]
    fn clefs_differ_only_by_offset() {
        let m = Metrics::default();
        // The same step is 12 steps (6 spacings) apart between clefs.
        for step in -12..12 {
            let dy = step_y(step, Clef::Bass, &m) - step_y(step, Clef::Treble, &m);
            assert_eq!(dy, -12.0 * m.half_space());
        }
    }

    #[test]
    fn notes_on_staff_boundary_lines_need_no_ledgers() {
        let m = Metrics::default();
        for clef in [Clef::Treble, Clef::Bass] {
            for step in super::bottom_line_step(clef)..=super::top_line_step(clef) {
                let pos = resolve(step, clef, &m);
                assert!(
                    pos.ledger_ys.is_empty(),
                    "{clef:?} step {step} is on the staff, got {:?}",
                    pos.ledger_ys
                );
            }
        }
    }

    #[test]
    fn one_spacing_beyond_staff_yields_one_boundary_adjacent_ledger() {
        let m = Metrics::default();
        for clef in [Clef::Treble, Clef::Bass] {
            // Two steps below the bottom line = one spacing unit below.
            let below = resolve(super::bottom_line_step(clef) - 2, clef, &m);
            assert_eq!(below.ledger_ys, vec![m.staff_bottom() + m.line_spacing]);
            assert_eq!(below.note_y, m.staff_bottom() + m.line_spacing);

            let above = resolve(super::top_line_step(clef) + 2, clef, &m);
            assert_eq!(above.ledger_ys, vec![m.staff_top - m.line_spacing]);
        }
    }

    #[test]
    fn ledger_count_grows_one_per_spacing_unit() {
        let m = Metrics::default();
        let bottom = super::bottom_line_step(Clef::Treble);
        // One step below the staff is a space: still no ledger.
        assert_eq!(resolve(bottom - 1, Clef::Treble, &m).ledger_ys.len(), 0);
        assert_eq!(resolve(bottom - 2, Clef::Treble, &m).ledger_ys.len(), 1);
        assert_eq!(resolve(bottom - 3, Clef::Treble, &m).ledger_ys.len(), 1);
        assert_eq!(resolve(bottom - 4, Clef::Treble, &m).ledger_ys.len(), 2);
        assert_eq!(resolve(bottom - 6, Clef::Treble, &m).ledger_ys.len(), 3);
    }

    #[test]
    fn stem_pivot_is_the_middle_line() {
        let m = Metrics::default();
        // Treble B4 (step 6), bass D3 (step -6).
        assert_eq!(stem_pivot_step(Clef::Treble), 6);
        assert_eq!(stem_pivot_step(Clef::Bass), -6);
        assert_eq!(step_y(6, Clef::Treble, &m), m.staff_middle());
        assert_eq!(step_y(-6, Clef::Bass, &m), m.staff_middle());
    }

    #[test]
    fn resolve_is_deterministic() {
        let m = Metrics::default();
        let a = resolve(13, Clef::Treble, &m);
        let b = resolve(13, Clef::Treble, &m);
        assert_eq!(a, b);
    }
}
