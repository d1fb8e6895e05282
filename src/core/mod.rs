// Core algorithm exports
pub mod matcher;

pub use matcher::{matched, needs_rating, partner_suggestions};
