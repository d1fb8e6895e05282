//! Baby Names - two-person name matching for the terminal
//!
//! Each partner rates candidate names as liked or disliked; the names both
//! liked are reported as matches. User records live in a single redb file.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
pub mod session;
pub mod terminal;

// Re-export commonly used types
pub use crate::core::{matched, partner_suggestions};
pub use crate::models::{DeletedPair, User, Verdict};
pub use crate::services::{load_names, NamesError, StoreError, UserDb};
pub use crate::session::SessionError;
