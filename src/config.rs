use std::path::PathBuf;

use tabnotes::{ParseOptions, StaveLayout, TabError, DEFAULT_STAVE_LEN};

/// Upper bound for the initial stave capacity
pub const MAX_STAVE_CAPACITY: usize = 1 << 24;

/// Validated settings for a single conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    tab_file_path: PathBuf,
    layout: StaveLayout,
    stave_capacity: usize,
}

impl Config {
    pub fn new(
        tab_file_path: PathBuf,
        layout: StaveLayout,
        stave_capacity: Option<usize>,
    ) -> Result<Self, TabError> {
        let stave_capacity = stave_capacity.unwrap_or(DEFAULT_STAVE_LEN);
        if stave_capacity == 0 {
            return Err(TabError::ConfigError(
                "stave capacity must be greater than zero".to_string(),
            ));
        }
        if stave_capacity > MAX_STAVE_CAPACITY {
            return Err(TabError::ConfigError(format!(
                "stave capacity {stave_capacity} exceeds the maximum of {MAX_STAVE_CAPACITY}"
            )));
        }
        Ok(Self {
            tab_file_path,
            layout,
            stave_capacity,
        })
    }

    pub fn get_tab_file_path(&self) -> &PathBuf {
        &self.tab_file_path
    }

    pub const fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            layout: self.layout,
            initial_capacity: self.stave_capacity,
        }
    }
}
