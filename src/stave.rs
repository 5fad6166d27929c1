use crate::pitch::PitchCode;
use std::fmt;
use std::str::FromStr;

/// Number of columns available before the first growth
pub const DEFAULT_STAVE_LEN: usize = 2048;

/// Factor applied to the capacity when a column reaches it
pub const STAVE_GROWTH_RATE: usize = 2;

/// How notes from different strings share the stave columns
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum StaveLayout {
    /// One positional row, a later string overwrites an earlier one at the same column
    #[default]
    Shared,
    /// One row per string, rendered column by column
    PerString,
}

impl FromStr for StaveLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shared" => Ok(Self::Shared),
            "per-string" => Ok(Self::PerString),
            other => Err(format!(
                "unknown stave layout {other:?} (expected shared or per-string)"
            )),
        }
    }
}

impl fmt::Display for StaveLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shared => write!(f, "shared"),
            Self::PerString => write!(f, "per-string"),
        }
    }
}

/// Pitch codes laid out by tab column.
///
/// Every row holds `capacity` slots, `None` marks an empty slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stave {
    layout: StaveLayout,
    rows: Vec<Vec<Option<PitchCode>>>,
    capacity: usize,
}

impl Stave {
    pub fn new(layout: StaveLayout) -> Self {
        Self::with_capacity(layout, DEFAULT_STAVE_LEN)
    }

    /// `capacity` must be strictly positive
    pub fn with_capacity(layout: StaveLayout, capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        let rows = match layout {
            StaveLayout::Shared => vec![vec![None; capacity]],
            StaveLayout::PerString => Vec::new(),
        };
        Self {
            layout,
            rows,
            capacity,
        }
    }

    pub const fn layout(&self) -> StaveLayout {
        self.layout
    }

    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Grow geometrically until `column` is a valid slot index
    pub fn ensure_column(&mut self, column: usize) {
        while column >= self.capacity {
            let new_capacity = self.capacity * STAVE_GROWTH_RATE;
            log::debug!("Growing stave from {} to {new_capacity}", self.capacity);
            for row in &mut self.rows {
                row.resize(new_capacity, None);
            }
            self.capacity = new_capacity;
        }
    }

    /// Store `pitch` at `column` for the note played on `string`
    pub fn set(&mut self, string: usize, column: usize, pitch: PitchCode) {
        self.ensure_column(column);
        let row = match self.layout {
            StaveLayout::Shared => 0,
            StaveLayout::PerString => string,
        };
        while self.rows.len() <= row {
            self.rows.push(vec![None; self.capacity]);
        }
        self.rows[row][column] = Some(pitch);
    }

    /// Stored pitch, `None` for an empty or out of range slot
    pub fn get(&self, string: usize, column: usize) -> Option<PitchCode> {
        let row = match self.layout {
            StaveLayout::Shared => 0,
            StaveLayout::PerString => string,
        };
        self.rows.get(row)?.get(column).copied().flatten()
    }

    /// Stored pitches in column order, rows in string order within a column
    pub fn pitches(&self) -> impl Iterator<Item = PitchCode> + '_ {
        (0..self.capacity).flat_map(move |column| self.rows.iter().filter_map(move |row| row[column]))
    }

    pub fn is_empty(&self) -> bool {
        self.pitches().next().is_none()
    }
}

impl Default for Stave {
    fn default() -> Self {
        Self::new(StaveLayout::default())
    }
}
