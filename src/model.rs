//! Data model for staff render requests.
//!
//! These structures describe the single note or symbol a quiz screen asks
//! the engine to draw. They arrive from the question generator as a small
//! JSON record and are validated here before any geometry runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Note letter in natural (diatonic) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// Diatonic index within the octave: C=0 … B=6.
    pub fn index(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    fn from_char(c: char) -> Option<Letter> {
        match c.to_ascii_uppercase() {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }
}

/// Pitch of a note: letter plus octave number (middle C = C4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pitch {
    pub letter: Letter,
    pub octave: i32,
}

impl Pitch {
    pub fn new(letter: Letter, octave: i32) -> Self {
        Self { letter, octave }
    }

    /// Parse a pitch string like `"E4"` or `"c5"`.
    ///
    /// The letter must be A–G (case-insensitive) and the remainder must be
    /// an octave number. Anything else is rejected here so the geometry
    /// layer never sees it.
    pub fn parse(s: &str) -> Result<Pitch, RequestError> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .and_then(Letter::from_char)
            .ok_or_else(|| RequestError::MalformedPitch(s.to_string()))?;
        let octave: i32 = chars
            .as_str()
            .parse()
            .map_err(|_| RequestError::MalformedPitch(s.to_string()))?;
        Ok(Pitch { letter, octave })
    }

    /// Diatonic steps from middle C (C4 = 0).
    ///
    /// Each octave spans exactly seven steps, anchored at C, so D4 = 1,
    /// B3 = -1, C5 = 7.
    pub fn steps_from_middle_c(&self) -> i32 {
        self.letter.index() + (self.octave - 4) * 7
    }
}

impl std::fmt::Display for Pitch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}{}", self.letter, self.octave)
    }
}

/// Clef governing the step-to-line mapping for a note request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Clef {
    #[default]
    Treble,
    Bass,
}

/// Note duration. Governs notehead fill, stem presence, and flag count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    Whole,
    Half,
    Quarter,
    Eighth,
    #[serde(alias = "16th")]
    Sixteenth,
    #[serde(alias = "32nd")]
    ThirtySecond,
}

impl Duration {
    /// Number of flags hung on the stem.
    pub fn flag_count(self) -> usize {
        match self {
            Duration::Whole | Duration::Half | Duration::Quarter => 0,
            Duration::Eighth => 1,
            Duration::Sixteenth => 2,
            Duration::ThirtySecond => 3,
        }
    }

    /// Hollow (outline-only) noteheads for whole and half notes.
    pub fn is_hollow(self) -> bool {
        matches!(self, Duration::Whole | Duration::Half)
    }

    /// Every duration except whole gets a stem.
    pub fn has_stem(self) -> bool {
        !matches!(self, Duration::Whole)
    }
}

/// How a symbol request is rendered: literal text, or a catalog shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolType {
    Text,
    Shape,
}

/// A non-note symbol to draw: accidental, rest, clef glyph, dynamics text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymbolSpec {
    #[serde(rename = "type")]
    pub symbol_type: SymbolType,
    pub value: String,
}

impl SymbolSpec {
    pub fn text(value: impl Into<String>) -> Self {
        Self { symbol_type: SymbolType::Text, value: value.into() }
    }

    pub fn shape(value: impl Into<String>) -> Self {
        Self { symbol_type: SymbolType::Shape, value: value.into() }
    }
}

/// The closed catalog of shape symbols.
///
/// Every wire value maps to exactly one variant; values outside the catalog
/// fall back to a placeholder glyph at render time rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Sharp,
    Flat,
    Natural,
    Fermata,
    TrebleClef,
    BassClef,
    RepeatStart,
    Tie,
    WholeRest,
    HalfRest,
    QuarterRest,
    EighthRest,
}

impl SymbolKind {
    pub fn from_value(value: &str) -> Option<SymbolKind> {
        match value {
            "sharp" => Some(SymbolKind::Sharp),
            "flat" => Some(SymbolKind::Flat),
            "natural" => Some(SymbolKind::Natural),
            "fermata" => Some(SymbolKind::Fermata),
            "treble_clef" => Some(SymbolKind::TrebleClef),
            "bass_clef" => Some(SymbolKind::BassClef),
            "repeat_start" => Some(SymbolKind::RepeatStart),
            "tie" => Some(SymbolKind::Tie),
            "whole_rest" => Some(SymbolKind::WholeRest),
            "half_rest" => Some(SymbolKind::HalfRest),
            "quarter_rest" => Some(SymbolKind::QuarterRest),
            "eighth_rest" => Some(SymbolKind::EighthRest),
            _ => None,
        }
    }

    /// Wire value for this symbol.
    pub fn value(self) -> &'static str {
        match self {
            SymbolKind::Sharp => "sharp",
            SymbolKind::Flat => "flat",
            SymbolKind::Natural => "natural",
            SymbolKind::Fermata => "fermata",
            SymbolKind::TrebleClef => "treble_clef",
            SymbolKind::BassClef => "bass_clef",
            SymbolKind::RepeatStart => "repeat_start",
            SymbolKind::Tie => "tie",
            SymbolKind::WholeRest => "whole_rest",
            SymbolKind::HalfRest => "half_rest",
            SymbolKind::QuarterRest => "quarter_rest",
            SymbolKind::EighthRest => "eighth_rest",
        }
    }

    /// All catalog members, for exhaustive tests and reference screens.
    pub fn all() -> &'static [SymbolKind] {
        &[
            SymbolKind::Sharp,
            SymbolKind::Flat,
            SymbolKind::Natural,
            SymbolKind::Fermata,
            SymbolKind::TrebleClef,
            SymbolKind::BassClef,
            SymbolKind::RepeatStart,
            SymbolKind::Tie,
            SymbolKind::WholeRest,
            SymbolKind::HalfRest,
            SymbolKind::QuarterRest,
            SymbolKind::EighthRest,
        ]
    }

    /// Rests sit inside the staff block, so staff lines are drawn under
    /// them even though they carry no pitch.
    pub fn is_staff_anchored(self) -> bool {
        matches!(
            self,
            SymbolKind::WholeRest
                | SymbolKind::HalfRest
                | SymbolKind::QuarterRest
                | SymbolKind::EighthRest
        )
    }
}

/// The note half of a render request. The pitch stays a string until the
/// boundary parse so malformed input degrades to an empty scene instead of
/// poisoning the geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteSpec {
    /// Pitch string, e.g. "E4"
    pub pitch: String,
    pub duration: Duration,
}

impl NoteSpec {
    pub fn new(pitch: impl Into<String>, duration: Duration) -> Self {
        Self { pitch: pitch.into(), duration }
    }
}

/// One render request from the question generator.
///
/// Exactly one of `note`/`symbol` is populated. `clef` defaults to treble
/// when absent and only affects note requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clef: Option<Clef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<NoteSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<SymbolSpec>,
}

impl RenderRequest {
    /// A note request under an optional clef.
    pub fn note(pitch: impl Into<String>, duration: Duration, clef: Option<Clef>) -> Self {
        Self { clef, note: Some(NoteSpec::new(pitch, duration)), symbol: None }
    }

    /// A symbol request.
    pub fn symbol(spec: SymbolSpec) -> Self {
        Self { clef: None, note: None, symbol: Some(spec) }
    }

    /// Check the exactly-one-of-note-or-symbol contract and the pitch
    /// format. Rendering itself never fails; callers that want a visible
    /// error message validate here first.
    pub fn validate(&self) -> Result<(), RequestError> {
        match (&self.note, &self.symbol) {
            (Some(_), Some(_)) => return Err(RequestError::AmbiguousRequest),
            (None, None) => return Err(RequestError::EmptyRequest),
            _ => {}
        }
        if let Some(ref note) = self.note {
            Pitch::parse(&note.pitch)?;
        }
        Ok(())
    }
}

/// Errors raised at the request boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("malformed pitch '{0}': expected a letter A-G followed by an octave number")]
    MalformedPitch(String),
    #[error("render request populates both note and symbol")]
    AmbiguousRequest,
    #[error("render request populates neither note nor symbol")]
    EmptyRequest,
}

/// Errors surfaced by the JSON render entry points.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error("invalid request JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pitch_parse_accepts_valid_strings() {
        assert_eq!(Pitch::parse("C4").unwrap(), Pitch::new(Letter::C, 4));
        assert_eq!(Pitch::parse("b3").unwrap(), Pitch::new(Letter::B, 3));
        assert_eq!(Pitch::parse("G10").unwrap(), Pitch::new(Letter::G, 10));
    }

    #[test]
    fn pitch_parse_rejects_garbage() {
        for s in ["", "H4", "4C", "C", "C4x", "Cfour"] {
            assert_eq!(
                Pitch::parse(s),
                Err(RequestError::MalformedPitch(s.to_string())),
                "{s:?} should not parse"
            );
        }
    }

    #[test]
    fn middle_c_is_step_zero() {
        assert_eq!(Pitch::new(Letter::C, 4).steps_from_middle_c(), 0);
    }

    #[test]
    fn steps_increase_with_octave_then_letter() {
        // Strictly increasing over the (octave, letter) ordering.
        let mut prev = None;
        for octave in 0..=8 {
            for letter in [
                Letter::C,
                Letter::D,
                Letter::E,
                Letter::F,
                Letter::G,
                Letter::A,
                Letter::B,
            ] {
                let step = Pitch::new(letter, octave).steps_from_middle_c();
                if let Some(p) = prev {
                    assert!(step == p + 1, "expected {} after {}", p + 1, p);
                }
                prev = Some(step);
            }
        }
        assert_eq!(Pitch::new(Letter::B, 3).steps_from_middle_c(), -1);
        assert_eq!(Pitch::new(Letter::C, 5).steps_from_middle_c(), 7);
    }

    #[test]
    fn duration_flag_and_stem_table() {
        let cases = [
            (Duration::Whole, 0, false, true),
            (Duration::Half, 0, true, true),
            (Duration::Quarter, 0, true, false),
            (Duration::Eighth, 1, true, false),
            (Duration::Sixteenth, 2, true, false),
            (Duration::ThirtySecond, 3, true, false),
        ];
        for (dur, flags, stem, hollow) in cases {
            assert_eq!(dur.flag_count(), flags, "{dur:?} flags");
            assert_eq!(dur.has_stem(), stem, "{dur:?} stem");
            assert_eq!(dur.is_hollow(), hollow, "{dur:?} fill");
        }
    }

    #[test]
    fn duration_wire_aliases() {
        let d: Duration = serde_json::from_str("\"16th\"").unwrap();
        assert_eq!(d, Duration::Sixteenth);
        let d: Duration = serde_json::from_str("\"32nd\"").unwrap();
        assert_eq!(d, Duration::ThirtySecond);
        let d: Duration = serde_json::from_str("\"thirty_second\"").unwrap();
        assert_eq!(d, Duration::ThirtySecond);
    }

    #[test]
    fn symbol_kind_round_trips_catalog_values() {
        for &kind in SymbolKind::all() {
            assert_eq!(SymbolKind::from_value(kind.value()), Some(kind));
        }
        assert_eq!(SymbolKind::from_value("coda"), None);
    }

    #[test]
    fn validate_enforces_exactly_one_payload() {
        let ok = RenderRequest::note("E4", Duration::Quarter, Some(Clef::Treble));
        assert!(ok.validate().is_ok());

        let empty = RenderRequest::default();
        assert_eq!(empty.validate(), Err(RequestError::EmptyRequest));

        let mut both = RenderRequest::note("E4", Duration::Quarter, None);
        both.symbol = Some(SymbolSpec::shape("sharp"));
        assert_eq!(both.validate(), Err(RequestError::AmbiguousRequest));

        let bad = RenderRequest::note("X9", Duration::Half, None);
        assert_eq!(
            bad.validate(),
            Err(RequestError::MalformedPitch("X9".to_string()))
        );
    }

    #[test]
    fn request_wire_format() {
        let req: RenderRequest = serde_json::from_str(
            r#"{"clef":"bass","note":{"pitch":"D3","duration":"eighth"}}"#,
        )
        .unwrap();
        assert_eq!(req.clef, Some(Clef::Bass));
        assert_eq!(req.note, Some(NoteSpec::new("D3", Duration::Eighth)));
        assert_eq!(req.symbol, None);

        let req: RenderRequest =
            serde_json::from_str(r#"{"symbol":{"type":"shape","value":"whole_rest"}}"#).unwrap();
        assert_eq!(req.symbol, Some(SymbolSpec::shape("whole_rest")));
    }
}
