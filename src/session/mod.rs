//! Interactive session flows driven by the two binaries
//!
//! Every function here is fail-fast: the first error aborts the flow and is
//! handed back to the binary, which reports it and exits non-zero.

pub mod pairing;
pub mod rating;
pub mod reset;

use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Settings;
use crate::services::{load_names, NamesError, StoreError, UserDb};
use crate::terminal::{non_empty, Terminal};

pub use pairing::identify;
pub use rating::{rate_names, SessionSummary};
pub use reset::reset_pair;

pub const WELCOME_MESSAGE: &str = "Welcome to Baby Names! At any time, press Ctrl+C to exit.";

const USER_DB_PATH_PROMPT: &str = "What is the path to the database file? (can be new file):\n";
const NAMES_FILE_PATH_PROMPT: &str = "What is the path to the names file? (newline delimited):\n";

/// Errors that abort a session
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Names(#[from] NamesError),

    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("{0}")]
    Consistency(String),
}

/// Use the configured path, or ask for one after showing the working directory
pub fn resolve_path<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    configured: Option<&Path>,
    message: &str,
) -> Result<PathBuf, SessionError> {
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }

    let dir = std::env::current_dir()?;
    terminal.say(format!("Current directory: {}", dir.display()))?;
    Ok(PathBuf::from(terminal.prompt(non_empty, message)?))
}

/// Open the user database named by settings or by the user
pub fn open_user_db<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    settings: &Settings,
) -> Result<UserDb, SessionError> {
    let path = resolve_path(terminal, settings.database.path.as_deref(), USER_DB_PATH_PROMPT)?;
    Ok(UserDb::open(&path)?)
}

/// Load and shuffle the names file named by settings or by the user
pub fn open_names<R: BufRead, W: Write, G: Rng + ?Sized>(
    terminal: &mut Terminal<R, W>,
    settings: &Settings,
    rng: &mut G,
) -> Result<Vec<String>, SessionError> {
    let path = resolve_path(terminal, settings.names.path.as_deref(), NAMES_FILE_PATH_PROMPT)?;
    Ok(load_names(&path, rng)?)
}
