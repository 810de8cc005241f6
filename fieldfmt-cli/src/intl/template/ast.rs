//! AST types for message templates

use crate::intl::number::NumberFormat;

/// A parsed message template: literal text and arguments
#[derive(Debug, Clone, PartialEq)]
pub struct MessageTemplate {
    pub parts: Vec<MessagePart>,
}

impl MessageTemplate {
    pub fn new(parts: Vec<MessagePart>) -> Self {
        Self { parts }
    }
}

/// A part of a message template
#[derive(Debug, Clone, PartialEq)]
pub enum MessagePart {
    /// Literal text
    Literal(String),
    /// An argument to substitute: `{...}`
    Argument(Argument),
}

/// An argument reference: `{name}` or `{name, type, style}`
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
    pub name: String,
    pub style: ArgumentStyle,
}

/// How an argument is rendered
#[derive(Debug, Clone, PartialEq)]
pub enum ArgumentStyle {
    /// Raw text of the value: `{value}`
    Plain,
    /// Locale number: `{value, number}`, `{value, number, ::.##}`
    Number(NumberFormat),
    /// Locale date: `{value, date}`
    Date,
    /// Locale time of day: `{value, time}`
    Time,
    /// Branch on the value text: `{value, select, a {..} other {..}}`
    Select(Vec<SelectBranch>),
}

/// One branch of a select argument
#[derive(Debug, Clone, PartialEq)]
pub struct SelectBranch {
    pub key: String,
    pub body: Vec<MessagePart>,
}

/// Key of the mandatory fallback branch of a select
pub const OTHER_BRANCH: &str = "other";
