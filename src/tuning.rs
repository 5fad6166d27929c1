use crate::pitch::{pitch_of, PitchCode};

pub const STRING_COUNT: usize = 6;

/// Open strings of the standard tuning, from the high E string down
pub const STANDARD_TUNING: [(&str, i32); STRING_COUNT] =
    [("E", 4), ("B", 3), ("G", 3), ("D", 3), ("A", 2), ("E", 2)];

/// Base pitch of every open string, indexed by tab line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    strings: [PitchCode; STRING_COUNT],
}

impl Tuning {
    pub fn standard() -> Self {
        let strings = STANDARD_TUNING.map(|(name, octave)| pitch_of(name, octave));
        log::debug!("Standard tuning: {strings:?}");
        Self { strings }
    }

    /// Open string pitch for the string at `index`, `None` past the last string
    pub fn offset(&self, index: usize) -> Option<PitchCode> {
        self.strings.get(index).copied()
    }

    pub const fn string_count(&self) -> usize {
        STRING_COUNT
    }

    pub const fn pitches(&self) -> &[PitchCode; STRING_COUNT] {
        &self.strings
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}
