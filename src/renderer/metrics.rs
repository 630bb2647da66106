//! Layout metrics for the staff canvas (all in logical canvas units).
//!
//! Everything the geometry depends on lives in one immutable [`Metrics`]
//! value passed explicitly into the render entry point, so a test or an
//! alternate screen size can swap the whole set at once.

/// Layout constants for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    /// Canvas width. Callers may widen the canvas; 300 by default.
    pub canvas_width: f64,
    /// Canvas height. Fixed at 280 by the app shell.
    pub canvas_height: f64,
    /// y of the top staff line.
    pub staff_top: f64,
    /// Distance between adjacent staff lines.
    pub line_spacing: f64,
    /// Horizontal inset of the staff lines from the canvas edges.
    pub staff_inset: f64,
    /// x of the clef glyph drawn alongside a note.
    pub clef_x: f64,
    /// Notehead ellipse x-radius.
    pub notehead_rx: f64,
    /// Notehead ellipse y-radius.
    pub notehead_ry: f64,
    pub stem_length: f64,
    pub stem_width: f64,
    pub staff_line_width: f64,
    pub ledger_line_width: f64,
    /// How far a ledger line extends past the notehead on each side.
    pub ledger_extend: f64,
    /// Vertical spacing between stacked flags on one stem.
    pub flag_spacing: f64,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            canvas_width: 300.0,
            canvas_height: 280.0,
            staff_top: 100.0,
            line_spacing: 20.0,
            staff_inset: 12.0,
            clef_x: 38.0,
            notehead_rx: 11.0,
            notehead_ry: 8.0,
            stem_length: 60.0,
            stem_width: 2.0,
            staff_line_width: 1.2,
            ledger_line_width: 1.6,
            ledger_extend: 9.0,
            flag_spacing: 12.0,
        }
    }
}

impl Metrics {
    /// Default metrics with an optional canvas-width override.
    /// Width values <= 0 fall back to the default, matching the FFI
    /// convention of passing 0 for "unset".
    pub fn with_width(canvas_width: Option<f64>) -> Self {
        let mut m = Metrics::default();
        if let Some(w) = canvas_width {
            if w > 0.0 {
                m.canvas_width = w;
            }
        }
        m
    }

    /// y of the bottom staff line.
    pub fn staff_bottom(&self) -> f64 {
        self.staff_top + 4.0 * self.line_spacing
    }

    /// y of the middle staff line.
    pub fn staff_middle(&self) -> f64 {
        self.staff_top + 2.0 * self.line_spacing
    }

    /// Horizontal center of the canvas; symbols anchor here.
    pub fn center_x(&self) -> f64 {
        self.canvas_width / 2.0
    }

    /// x of a rendered notehead. Offset right of center so the clef
    /// glyph at the left edge reads as context, not content.
    pub fn note_x(&self) -> f64 {
        self.canvas_width / 2.0 + 10.0
    }

    /// Half a line spacing: the vertical size of one diatonic step.
    pub fn half_space(&self) -> f64 {
        self.line_spacing / 2.0
    }
}

// ── Colors ──────────────────────────────────────────────────────────
pub(super) const NOTE_COLOR: &str = "#1a1a1a";
pub(super) const STAFF_COLOR: &str = "#555555";
pub(super) const REST_COLOR: &str = "#1a1a1a";
pub(super) const BARLINE_COLOR: &str = "#333333";
