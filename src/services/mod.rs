// Service exports
pub mod names;
pub mod user_db;

pub use names::{load_names, read_names, shuffle_names, NamesError};
pub use user_db::{StoreError, UserDb};
