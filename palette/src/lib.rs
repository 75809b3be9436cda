pub mod error;
mod merge;
mod types;

pub use types::*;
