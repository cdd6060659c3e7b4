mod operations;
mod traversal;
mod types;

pub use types::*;
