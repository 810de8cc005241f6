//! Evaluator for message templates

use chrono::NaiveDateTime;

use super::ast::*;
use crate::format::{FieldValue, dates};
use crate::intl::{Locale, MessageArgs};

/// Error from evaluating a template against its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    MissingArgument(String),
    NotANumber(String),
    NotADate(String),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::MissingArgument(name) => write!(f, "missing argument '{}'", name),
            EvalError::NotANumber(name) => write!(f, "argument '{}' is not a number", name),
            EvalError::NotADate(name) => write!(f, "argument '{}' is not a date", name),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluate a message template with the given arguments
pub fn evaluate(
    template: &MessageTemplate,
    args: &MessageArgs,
    locale: &Locale,
) -> Result<String, EvalError> {
    let mut result = String::new();
    eval_parts(&template.parts, args, locale, &mut result)?;
    Ok(result)
}

fn eval_parts(
    parts: &[MessagePart],
    args: &MessageArgs,
    locale: &Locale,
    out: &mut String,
) -> Result<(), EvalError> {
    for part in parts {
        match part {
            MessagePart::Literal(s) => out.push_str(s),
            MessagePart::Argument(argument) => eval_argument(argument, args, locale, out)?,
        }
    }
    Ok(())
}

fn eval_argument(
    argument: &Argument,
    args: &MessageArgs,
    locale: &Locale,
    out: &mut String,
) -> Result<(), EvalError> {
    let value = args
        .get(&argument.name)
        .ok_or_else(|| EvalError::MissingArgument(argument.name.clone()))?;

    match &argument.style {
        ArgumentStyle::Plain => out.push_str(&value.to_raw_string()),

        ArgumentStyle::Number(format) => {
            let n = to_number(value).ok_or_else(|| EvalError::NotANumber(argument.name.clone()))?;
            out.push_str(&locale.format_number(n, format));
        }

        ArgumentStyle::Date => {
            let date = to_date(value).ok_or_else(|| EvalError::NotADate(argument.name.clone()))?;
            out.push_str(&locale.format_date(&date));
        }

        ArgumentStyle::Time => {
            let date = to_date(value).ok_or_else(|| EvalError::NotADate(argument.name.clone()))?;
            out.push_str(&locale.format_time(&date));
        }

        ArgumentStyle::Select(branches) => {
            let key = value.to_raw_string();
            let branch = branches
                .iter()
                .find(|b| b.key == key)
                .or_else(|| branches.iter().find(|b| b.key == OTHER_BRANCH));
            if let Some(branch) = branch {
                eval_parts(&branch.body, args, locale, out)?;
            }
        }
    }

    Ok(())
}

/// Numbers, and text that parses as one
fn to_number(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(n) => Some(*n),
        FieldValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Dates, and text that looks like one
fn to_date(value: &FieldValue) -> Option<NaiveDateTime> {
    match value {
        FieldValue::Date(d) => Some(*d),
        FieldValue::String(s) => dates::parse_date_str(s),
        _ => None,
    }
}
