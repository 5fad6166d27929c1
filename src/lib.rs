//! Tabnotes - plain text guitar tablature to note names
//!
//! This library provides:
//! - Conversion between note names, octaves and pitch codes
//! - The standard guitar tuning table
//! - Parsing of text tablature into a stave of pitches
//! - Rendering of a stave as a line of note names
//!
//! # Example
//!
//! ```
//! use tabnotes::{parse_tab_data, render_stave};
//!
//! let stave = parse_tab_data(b"0-2-3-\n").unwrap();
//! assert_eq!(render_stave(&stave), "E4 F#4 G4 \n");
//! ```

pub mod error;
pub mod parser;
pub mod pitch;
pub mod render;
pub mod stave;
pub mod tuning;

// Re-export main types for convenience
pub use error::TabError;
pub use parser::tab_parser::{
    parse_tab_data, read_tab_file, ParseOptions, TabParser, MAX_FRET_DIGITS,
};
pub use pitch::{format_pitch, note_name_of, octave_of, pitch_of, PitchCode, SHARP_NOTES};
pub use render::{render_stave, write_stave};
pub use stave::{Stave, StaveLayout, DEFAULT_STAVE_LEN, STAVE_GROWTH_RATE};
pub use tuning::{Tuning, STANDARD_TUNING, STRING_COUNT};
