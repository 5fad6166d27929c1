use crate::AppError::UsageError;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use config::Config;
use std::io;
use std::path::PathBuf;
use tabnotes::{read_tab_file, write_stave, StaveLayout, TabError};

mod config;

fn main() {
    let result = main_result();
    std::process::exit(match result {
        Ok(()) => 0,
        Err(UsageError) => 1,
        Err(err @ AppError::FileOpenError(_)) => {
            // printed regardless of the log filter
            println!("{err}");
            1
        }
        Err(err) => {
            // use Display instead of Debug for user friendly error messages
            log::error!("{err}");
            1
        }
    });
}

pub fn main_result() -> Result<(), AppError> {
    // setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("tabnotes=info"))
        .init();

    // args
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            // usage goes to stdout
            println!("{}", CliArgs::command().render_usage());
            return Err(UsageError);
        }
        Err(err) => err.exit(),
    };

    let config = Config::new(
        PathBuf::from(args.tab_file_path),
        args.layout,
        args.stave_capacity,
    )?;
    log::info!(
        "Reading tab file {:?} with {} layout",
        config.get_tab_file_path(),
        config.parse_options().layout
    );

    // the whole tab is parsed before anything is printed
    let stave = read_tab_file(config.get_tab_file_path(), config.parse_options())?;

    let stdout = io::stdout();
    write_stave(&stave, &mut stdout.lock())?;
    Ok(())
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
    /// Path to the text tablature file.
    #[arg(value_name = "FILE")]
    tab_file_path: String,
    /// Stave layout: `shared` overwrites notes sharing a column, `per-string` keeps them all.
    #[arg(long, default_value_t = StaveLayout::Shared)]
    layout: StaveLayout,
    /// Initial number of stave columns.
    #[arg(long)]
    stave_capacity: Option<usize>,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("usage error")]
    UsageError,
    #[error("{0}")]
    FileOpenError(String),
    #[error("configuration error: {0}")]
    ConfigError(String),
    #[error("parsing error: {0}")]
    ParsingError(String),
    #[error("other error: {0}")]
    OtherError(String),
}

impl From<TabError> for AppError {
    fn from(error: TabError) -> Self {
        match error {
            err @ TabError::FileOpenError { .. } => Self::FileOpenError(err.to_string()),
            err @ TabError::TooManyStringsError { .. } => Self::ParsingError(err.to_string()),
            TabError::ConfigError(s) => Self::ConfigError(s),
            TabError::IoError(s) => Self::OtherError(s),
        }
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        Self::OtherError(error.to_string())
    }
}
