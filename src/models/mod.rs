// Model exports
pub mod domain;

pub use domain::{DeletedPair, User, Verdict};
