use crate::parser::token_parser::{parse_fret, tokens, TabToken};
use crate::pitch::PitchCode;
use crate::stave::{Stave, StaveLayout, DEFAULT_STAVE_LEN};
use crate::tuning::Tuning;
use crate::TabError;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Digits kept from a fret number, extra digits are dropped
pub const MAX_FRET_DIGITS: usize = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub layout: StaveLayout,
    pub initial_capacity: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            layout: StaveLayout::default(),
            initial_capacity: DEFAULT_STAVE_LEN,
        }
    }
}

/// Fret number waiting for a terminating byte
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct PendingFret {
    column: usize,
    fret: u32,
}

#[derive(Debug, Default)]
struct ParserState {
    string: usize,
    column: usize,
    pending: Option<PendingFret>,
}

pub struct TabParser {
    tuning: Tuning,
    options: ParseOptions,
}

impl TabParser {
    pub const fn new(tuning: Tuning, options: ParseOptions) -> Self {
        Self { tuning, options }
    }

    pub const fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Map every fret number of the tab to its pitch on the stave.
    ///
    /// Each non newline byte advances the column, a fret is stored at the
    /// column of its first digit once a non digit byte terminates it.
    pub fn parse(&self, data: &[u8]) -> Result<Stave, TabError> {
        let mut stave = Stave::with_capacity(self.options.layout, self.options.initial_capacity);
        let mut state = ParserState::default();

        for token in tokens(data) {
            match token {
                TabToken::Newline => {
                    self.flush(&mut state, &mut stave)?;
                    state.string += 1;
                    state.column = 0;
                    log::debug!("Moving to string {}", state.string);
                }
                TabToken::Digits(digits) => {
                    if digits.len() > MAX_FRET_DIGITS {
                        log::warn!(
                            "Fret number {} on line {} truncated to {MAX_FRET_DIGITS} digits",
                            String::from_utf8_lossy(digits),
                            state.string + 1
                        );
                    }
                    state.pending = Some(PendingFret {
                        column: state.column,
                        fret: parse_fret(digits, MAX_FRET_DIGITS),
                    });
                    state.column += token.width();
                    stave.ensure_column(state.column);
                }
                TabToken::Filler(_) => {
                    self.flush(&mut state, &mut stave)?;
                    state.column += token.width();
                    stave.ensure_column(state.column);
                }
            }
        }

        if let Some(pending) = state.pending {
            log::debug!(
                "Dropping unterminated fret {} at end of input (line {}, column {})",
                pending.fret,
                state.string + 1,
                pending.column
            );
        }

        Ok(stave)
    }

    fn flush(&self, state: &mut ParserState, stave: &mut Stave) -> Result<(), TabError> {
        let Some(pending) = state.pending.take() else {
            return Ok(());
        };
        let offset = self
            .tuning
            .offset(state.string)
            .ok_or(TabError::TooManyStringsError {
                line: state.string + 1,
                strings: self.tuning.string_count(),
            })?;
        let pitch = pending.fret as PitchCode + offset;
        log::debug!(
            "String {} column {} fret {} -> {pitch}",
            state.string,
            pending.column,
            pending.fret
        );
        stave.set(state.string, pending.column, pitch);
        Ok(())
    }
}

impl Default for TabParser {
    fn default() -> Self {
        Self::new(Tuning::standard(), ParseOptions::default())
    }
}

/// Parse tab data with the standard tuning and default options
pub fn parse_tab_data(data: &[u8]) -> Result<Stave, TabError> {
    TabParser::default().parse(data)
}

/// Read and parse a tab file, the file is closed before parsing starts
pub fn read_tab_file(path: &Path, options: ParseOptions) -> Result<Stave, TabError> {
    let data = {
        let mut file = File::open(path).map_err(|err| TabError::FileOpenError {
            path: path.display().to_string(),
            reason: err.to_string(),
        })?;
        let mut data: Vec<u8> = vec![];
        file.read_to_end(&mut data)?;
        data
    };
    log::debug!("Read {} bytes from {}", data.len(), path.display());
    TabParser::new(Tuning::standard(), options).parse(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_stave;

    fn init_logger() {
        env_logger::builder()
            .is_test(true)
            .try_init()
            .unwrap_or_default();
    }

    fn per_string() -> TabParser {
        TabParser::new(
            Tuning::standard(),
            ParseOptions {
                layout: StaveLayout::PerString,
                ..ParseOptions::default()
            },
        )
    }

    #[test]
    fn test_open_strings_per_string() {
        init_logger();
        let stave = per_string().parse(b"0\n0\n0\n0\n0\n0\n").unwrap();
        assert_eq!(render_stave(&stave), "E4 B3 G3 D3 A2 E2 \n");
    }

    #[test]
    fn test_open_strings_shared_keeps_last_string() {
        init_logger();
        let stave = parse_tab_data(b"0\n0\n0\n0\n0\n0\n").unwrap();
        assert_eq!(render_stave(&stave), "E2 \n");
    }

    #[test]
    fn test_filler_advances_column() {
        init_logger();
        let stave = parse_tab_data(b"0-2-3-").unwrap();
        assert_eq!(stave.get(0, 0), Some(52));
        assert_eq!(stave.get(0, 1), None);
        assert_eq!(stave.get(0, 2), Some(54));
        assert_eq!(stave.get(0, 3), None);
        assert_eq!(stave.get(0, 4), Some(55));
        assert_eq!(stave.get(0, 5), None);
        assert_eq!(render_stave(&stave), "E4 F#4 G4 \n");
    }

    #[test]
    fn test_multi_digit_fret_takes_its_width() {
        let stave = parse_tab_data(b"12-0-").unwrap();
        assert_eq!(stave.get(0, 0), Some(64));
        assert_eq!(stave.get(0, 1), None);
        assert_eq!(stave.get(0, 3), Some(52));
    }

    #[test]
    fn test_long_fret_is_truncated() {
        init_logger();
        let stave = parse_tab_data(b"123-5-").unwrap();
        assert_eq!(stave.get(0, 0), Some(52 + 12));
        assert_eq!(stave.get(0, 4), Some(57));
    }

    #[test]
    fn test_trailing_fret_without_terminator_is_dropped() {
        init_logger();
        let stave = parse_tab_data(b"0-2-3").unwrap();
        assert_eq!(stave.get(0, 4), None);
        assert_eq!(render_stave(&stave), "E4 F#4 \n");

        let stave = parse_tab_data(b"7").unwrap();
        assert!(stave.is_empty());
    }

    #[test]
    fn test_newline_terminates_fret() {
        let stave = parse_tab_data(b"--3\n").unwrap();
        assert_eq!(stave.get(0, 2), Some(55));
    }

    #[test]
    fn test_later_string_overwrites_shared_column() {
        let stave = parse_tab_data(b"-3-\n-5-\n").unwrap();
        assert_eq!(stave.get(0, 1), Some(47 + 5));
        assert_eq!(render_stave(&stave), "E4 \n");
    }

    #[test]
    fn test_chord_per_string() {
        let tab = b"--0--\n--1--\n--0--\n--2--\n--3--\n-----\n";
        let stave = per_string().parse(tab).unwrap();
        assert_eq!(render_stave(&stave), "E4 C4 G3 E3 C3 \n");
    }

    #[test]
    fn test_growth_keeps_earlier_notes() {
        init_logger();
        let parser = TabParser::new(
            Tuning::standard(),
            ParseOptions {
                layout: StaveLayout::Shared,
                initial_capacity: 4,
            },
        );
        let stave = parser.parse(b"1-2-------------5-").unwrap();
        assert_eq!(stave.capacity(), 32);
        assert_eq!(stave.get(0, 0), Some(53));
        assert_eq!(stave.get(0, 2), Some(54));
        assert_eq!(stave.get(0, 16), Some(57));
        for column in (3..16).chain(17..32) {
            assert_eq!(stave.get(0, column), None);
        }
    }

    #[test]
    fn test_default_capacity_growth() {
        let mut tab = b"3".to_vec();
        tab.extend(std::iter::repeat(b'-').take(DEFAULT_STAVE_LEN + 10));
        tab.extend_from_slice(b"5-\n");
        let stave = parse_tab_data(&tab).unwrap();
        assert_eq!(stave.capacity(), DEFAULT_STAVE_LEN * 2);
        assert_eq!(stave.get(0, 0), Some(55));
        assert_eq!(stave.get(0, DEFAULT_STAVE_LEN + 11), Some(57));
        assert_eq!(render_stave(&stave), "G4 A4 \n");
    }

    #[test]
    fn test_too_many_strings() {
        let tab = b"0-\n0-\n0-\n0-\n0-\n0-\n0-\n";
        let err = parse_tab_data(tab).unwrap_err();
        assert!(matches!(
            err,
            TabError::TooManyStringsError {
                line: 7,
                strings: 6
            }
        ));
    }

    #[test]
    fn test_extra_lines_without_frets_are_accepted() {
        let tab = b"0-\n-\n-\n-\n-\n-\n|---|\n\n";
        let stave = parse_tab_data(tab).unwrap();
        assert_eq!(render_stave(&stave), "E4 \n");
    }

    #[test]
    fn test_empty_input() {
        let stave = parse_tab_data(b"").unwrap();
        assert!(stave.is_empty());
        assert_eq!(render_stave(&stave), "\n");
    }

    #[test]
    fn test_missing_file() {
        let err = read_tab_file(Path::new("test-files/missing.tab"), ParseOptions::default())
            .unwrap_err();
        match err {
            TabError::FileOpenError { path, .. } => assert_eq!(path, "test-files/missing.tab"),
            other => panic!("unexpected error {other:?}"),
        }
    }
}
