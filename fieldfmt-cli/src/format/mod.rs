//! Field value formatting
//!
//! [`FormatService`] turns raw field values into display strings using column
//! metadata and a [`Localizer`](crate::intl::Localizer), and parses entered
//! text back for typed columns.

pub mod case;
pub mod dates;
pub mod size;
mod service;
mod types;

pub use case::CaseTransform;
pub use service::{FormatService, NULL_PLACEHOLDER};
pub use size::{MemoryUnit, memory_size_unit, parse_memory_size};
pub use types::*;
