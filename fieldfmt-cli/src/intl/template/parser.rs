//! Recursive descent parser for message templates

use super::ast::*;
use crate::intl::number::NumberFormat;

/// Deepest allowed nesting of select arguments
const MAX_DEPTH: usize = 32;

/// Parse error with position information
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    pub position: usize,
    pub context: String,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at position {}: {}", self.position, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parse a message template string into a MessageTemplate AST
pub fn parse_message(input: &str) -> Result<MessageTemplate, ParseError> {
    let mut parser = Parser::new(input);
    let parts = parser.parse_parts(false)?;
    Ok(MessageTemplate::new(parts))
}

struct Parser<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            depth: 0,
        }
    }

    fn current_pos(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(i, _)| *i)
            .unwrap_or(self.input.len())
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn error(&self, message: impl Into<String>, position: usize) -> ParseError {
        ParseError {
            message: message.into(),
            position,
            context: self.input[position..].chars().take(20).collect(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() {
                self.bump();
            } else {
                break;
            }
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        let pos = self.current_pos();
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(self.error(format!("expected '{}', found '{}'", expected, c), pos)),
            None => Err(self.error(format!("expected '{}', found end of input", expected), pos)),
        }
    }

    /// Parse literal text and arguments up to the end of input, or up to the
    /// closing brace of a select branch when `nested` (the brace is not consumed)
    fn parse_parts(&mut self, nested: bool) -> Result<Vec<MessagePart>, ParseError> {
        let mut parts = Vec::new();
        let mut literal = String::new();

        loop {
            match self.peek() {
                None => {
                    if nested {
                        return Err(self.error(
                            "unclosed select branch, expected '}'",
                            self.input.len(),
                        ));
                    }
                    break;
                }
                Some('{') => {
                    let start = self.current_pos();
                    self.bump();
                    if !literal.is_empty() {
                        parts.push(MessagePart::Literal(std::mem::take(&mut literal)));
                    }
                    parts.push(MessagePart::Argument(self.parse_argument(start)?));
                }
                Some('}') => {
                    if nested {
                        break;
                    }
                    let pos = self.current_pos();
                    return Err(self.error("unmatched '}'", pos));
                }
                Some('\'') => {
                    self.bump();
                    self.parse_quoted(&mut literal);
                }
                Some(ch) => {
                    self.bump();
                    literal.push(ch);
                }
            }
        }

        if !literal.is_empty() {
            parts.push(MessagePart::Literal(literal));
        }

        Ok(parts)
    }

    /// Handle text after an apostrophe
    ///
    /// `''` is a literal apostrophe. An apostrophe followed by a brace quotes
    /// everything up to the next lone apostrophe. Any other apostrophe is literal.
    fn parse_quoted(&mut self, literal: &mut String) {
        match self.peek() {
            Some('\'') => {
                self.bump();
                literal.push('\'');
            }
            Some('{') | Some('}') => loop {
                match self.bump() {
                    Some('\'') if self.peek() == Some('\'') => {
                        self.bump();
                        literal.push('\'');
                    }
                    Some('\'') | None => break,
                    Some(ch) => literal.push(ch),
                }
            },
            _ => literal.push('\''),
        }
    }

    fn parse_identifier(&mut self) -> String {
        let mut ident = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_alphanumeric() || ch == '_' || ch == '.' {
                ident.push(ch);
                self.bump();
            } else {
                break;
            }
        }
        ident
    }

    /// Parse an argument after its opening brace, consuming the closing brace
    fn parse_argument(&mut self, start: usize) -> Result<Argument, ParseError> {
        self.skip_whitespace();
        let name_pos = self.current_pos();
        let name = self.parse_identifier();
        if name.is_empty() {
            return Err(self.error("expected argument name", name_pos));
        }

        self.skip_whitespace();
        let pos = self.current_pos();
        match self.bump() {
            Some('}') => {
                return Ok(Argument {
                    name,
                    style: ArgumentStyle::Plain,
                });
            }
            Some(',') => {}
            Some(ch) => {
                return Err(self.error(format!("unexpected '{}' in argument", ch), pos));
            }
            None => return Err(self.error("unclosed argument, expected '}'", start)),
        }

        self.skip_whitespace();
        let type_pos = self.current_pos();
        let kind = self.parse_identifier();
        self.skip_whitespace();

        let style = match kind.as_str() {
            "number" => ArgumentStyle::Number(self.parse_number_style(start)?),
            "date" => {
                self.skip_style(start)?;
                ArgumentStyle::Date
            }
            "time" => {
                self.skip_style(start)?;
                ArgumentStyle::Time
            }
            "select" => {
                self.expect(',')?;
                ArgumentStyle::Select(self.parse_select_branches(start)?)
            }
            "" => return Err(self.error("expected argument type", type_pos)),
            other => {
                return Err(self.error(format!("unsupported argument type '{}'", other), type_pos));
            }
        };

        Ok(Argument { name, style })
    }

    /// Read a style up to and including the closing brace of the argument
    fn read_style(&mut self, start: usize) -> Result<String, ParseError> {
        let mut style = String::new();
        loop {
            match self.bump() {
                Some('}') => return Ok(style.trim().to_string()),
                Some(ch) => style.push(ch),
                None => return Err(self.error("unclosed argument, expected '}'", start)),
            }
        }
    }

    fn parse_number_style(&mut self, start: usize) -> Result<NumberFormat, ParseError> {
        let pos = self.current_pos();
        match self.bump() {
            Some('}') => return Ok(NumberFormat::default()),
            Some(',') => {}
            Some(ch) => return Err(self.error(format!("unexpected '{}' in argument", ch), pos)),
            None => return Err(self.error("unclosed argument, expected '}'", start)),
        }

        let style_pos = self.current_pos();
        let style = self.read_style(start)?;
        match style.as_str() {
            "integer" => Ok(NumberFormat::integer()),
            "percent" => Ok(NumberFormat::percent()),
            s if s.starts_with("::") => NumberFormat::from_skeleton(s)
                .ok_or_else(|| self.error(format!("invalid number skeleton '{}'", s), style_pos)),
            s => Err(self.error(format!("unsupported number style '{}'", s), style_pos)),
        }
    }

    /// Date and time styles (`short`, `long`, ...) are accepted; the locale pattern is used
    fn skip_style(&mut self, start: usize) -> Result<(), ParseError> {
        let pos = self.current_pos();
        match self.bump() {
            Some('}') => Ok(()),
            Some(',') => self.read_style(start).map(|_| ()),
            Some(ch) => Err(self.error(format!("unexpected '{}' in argument", ch), pos)),
            None => Err(self.error("unclosed argument, expected '}'", start)),
        }
    }

    fn parse_select_branches(&mut self, start: usize) -> Result<Vec<SelectBranch>, ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(
                format!("select nested deeper than {} levels", MAX_DEPTH),
                start,
            ));
        }
        self.depth += 1;
        let branches = self.parse_branch_list(start);
        self.depth -= 1;
        branches
    }

    fn parse_branch_list(&mut self, start: usize) -> Result<Vec<SelectBranch>, ParseError> {
        let mut branches = Vec::new();

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    break;
                }
                None => return Err(self.error("unclosed select, expected '}'", start)),
                _ => {}
            }

            let key_pos = self.current_pos();
            let mut key = String::new();
            while let Some(ch) = self.peek() {
                if ch.is_whitespace() || ch == '{' || ch == '}' {
                    break;
                }
                key.push(ch);
                self.bump();
            }
            if key.is_empty() {
                return Err(self.error("expected select key", key_pos));
            }

            self.skip_whitespace();
            self.expect('{')?;
            let body = self.parse_parts(true)?;
            self.expect('}')?;

            branches.push(SelectBranch { key, body });
        }

        if !branches.iter().any(|b| b.key == OTHER_BRANCH) {
            return Err(self.error("select requires an 'other' branch", start));
        }

        Ok(branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intl::number::NumberStyle;

    fn argument(template: &MessageTemplate, index: usize) -> &Argument {
        match &template.parts[index] {
            MessagePart::Argument(argument) => argument,
            other => panic!("expected argument, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_literal() {
        let template = parse_message("Hello, World!").unwrap();
        assert_eq!(
            template.parts,
            vec![MessagePart::Literal("Hello, World!".to_string())]
        );
    }

    #[test]
    fn test_parse_plain_argument() {
        let template = parse_message("Size: { value }").unwrap();
        assert_eq!(template.parts.len(), 2);
        assert_eq!(argument(&template, 1).name, "value");
        assert_eq!(argument(&template, 1).style, ArgumentStyle::Plain);
    }

    #[test]
    fn test_parse_number_styles() {
        let template = parse_message("{value, number} {value, number, ::.##} {value, number, percent}").unwrap();
        assert_eq!(argument(&template, 0).style, ArgumentStyle::Number(NumberFormat::default()));
        match &argument(&template, 2).style {
            ArgumentStyle::Number(format) => assert_eq!(format.max_fraction, 2),
            other => panic!("expected number style, got {:?}", other),
        }
        match &argument(&template, 4).style {
            ArgumentStyle::Number(format) => assert_eq!(format.style, NumberStyle::Percent),
            other => panic!("expected number style, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_date_time() {
        let template = parse_message("{date, date, short} at {date, time}").unwrap();
        assert_eq!(argument(&template, 0).style, ArgumentStyle::Date);
        assert_eq!(argument(&template, 2).style, ArgumentStyle::Time);
    }

    #[test]
    fn test_parse_select() {
        let template =
            parse_message("{time, select, 0 {} other {, {date, time}}}").unwrap();
        let ArgumentStyle::Select(branches) = &argument(&template, 0).style else {
            panic!("expected select");
        };
        assert_eq!(branches.len(), 2);
        assert_eq!(branches[0].key, "0");
        assert!(branches[0].body.is_empty());
        assert_eq!(branches[1].key, "other");
        assert_eq!(branches[1].body.len(), 2);
        assert!(matches!(
            &branches[1].body[1],
            MessagePart::Argument(Argument { name, style: ArgumentStyle::Time }) if name == "date"
        ));
    }

    #[test]
    fn test_parse_apostrophes() {
        let template = parse_message("'{'value'}' don't it''s").unwrap();
        assert_eq!(
            template.parts,
            vec![MessagePart::Literal("{value} don't it's".to_string())]
        );
    }

    fn nested_select(levels: usize) -> String {
        format!("{}{}", "{a, select, other {".repeat(levels), "}}".repeat(levels))
    }

    #[test]
    fn test_parse_select_depth_limit() {
        assert!(parse_message(&nested_select(MAX_DEPTH)).is_ok());

        let err = parse_message(&nested_select(MAX_DEPTH + 1)).unwrap_err();
        assert!(err.message.contains("nested deeper"));

        // Deep input fails cleanly instead of exhausting the stack
        assert!(parse_message(&nested_select(20_000)).is_err());
    }

    #[test]
    fn test_parse_errors() {
        let err = parse_message("Size: {value").unwrap_err();
        assert!(err.message.contains("unclosed"));
        assert_eq!(err.position, 6);

        let err = parse_message("a } b").unwrap_err();
        assert_eq!(err.position, 2);
        assert!(err.to_string().starts_with("at position 2"));

        assert!(parse_message("{}").is_err());
        assert!(parse_message("{value, plural, one {#} other {#}}").is_err());
        assert!(parse_message("{value, number, currency}").is_err());
        assert!(parse_message("{value, select, true {Yes}}").is_err());
        assert!(parse_message("{value, select, true {Yes} other {No}").is_err());
    }
}
