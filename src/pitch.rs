//! Conversions between note names, octaves and pitch codes.
//!
//! A pitch code is `note_index + 12 * octave` where the note index runs from
//! `0` (C) to `11` (B).

/// Absolute pitch encoded as `note_index + 12 * octave`
pub type PitchCode = i32;

pub const NOTES_PER_OCTAVE: i32 = 12;

pub const SHARP_NOTES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Note name of a pitch code.
///
/// Negative codes wrap around the chromatic scale (`-1` is `B`).
pub const fn note_name_of(pitch: PitchCode) -> &'static str {
    SHARP_NOTES[pitch.rem_euclid(NOTES_PER_OCTAVE) as usize]
}

/// Octave of a pitch code, floored so that it stays consistent with [`note_name_of`].
///
/// Same as `pitch / 12` for non negative codes, negative codes round down
/// (`-1` is octave `-1`, where truncating division would give `0`).
pub const fn octave_of(pitch: PitchCode) -> i32 {
    pitch.div_euclid(NOTES_PER_OCTAVE)
}

/// Pitch code of a note name at the given octave.
///
/// An unknown name falls back to `C`, it is never an error.
pub fn pitch_of(name: &str, octave: i32) -> PitchCode {
    let index = SHARP_NOTES
        .iter()
        .position(|&note| note == name)
        .unwrap_or_else(|| {
            log::debug!("Unknown note name {name:?}, falling back to C");
            0
        });
    index as i32 + NOTES_PER_OCTAVE * octave
}

/// Display form of a pitch code, e.g. `G#3`
pub fn format_pitch(pitch: PitchCode) -> String {
    format!("{}{}", note_name_of(pitch), octave_of(pitch))
}
