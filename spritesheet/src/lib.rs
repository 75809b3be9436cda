pub mod error;
mod encoder;
mod types;
mod writer;

pub use types::*;
