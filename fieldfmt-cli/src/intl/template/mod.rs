//! Message templates - ICU-style argument substitution
//!
//! Supports:
//! - Plain arguments: `{value}`
//! - Numbers: `{value, number}`, `{value, number, ::.##}`, `{value, number, percent}`
//! - Dates and times: `{date, date}`, `{date, time}`
//! - Select: `{value, select, true {Yes} other {No}}`
//! - Quoting: `'{'` for a literal brace, `''` for an apostrophe

mod ast;
mod eval;
mod parser;

pub use ast::{Argument, ArgumentStyle, MessagePart, MessageTemplate, OTHER_BRANCH, SelectBranch};
pub use eval::{EvalError, evaluate};
pub use parser::{ParseError, parse_message};
