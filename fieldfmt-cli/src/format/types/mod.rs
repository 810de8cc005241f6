//! Core types for value formatting

mod value;
mod column;
mod options;

pub use value::*;
pub use column::*;
pub use options::*;
