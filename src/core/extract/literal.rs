//! Strict parser for JavaScript data literals.
//!
//! Accepts the subset of JS that can only describe data: objects, arrays,
//! single/double quoted strings, numbers, `true`, `false` and `null`. Object
//! keys may be bare identifiers, strings or numbers, and trailing commas are
//! allowed. Everything else is rejected, nothing is ever evaluated.

use serde_json::{Map, Number, Value};

use crate::error::{CatalogError, Result};

/// Deepest object/array nesting accepted, matching serde_json's recursion limit.
pub const MAX_NESTING: usize = 128;

/// Parse `input` as a single data literal, surrounded only by whitespace.
pub fn parse_literal(input: &str) -> Result<Value> {
    let mut parser = Parser::new(input);
    parser.skip_whitespace();
    let value = parser.parse_value(0)?;
    parser.skip_whitespace();
    if let Some(c) = parser.peek() {
        return Err(parser.error_here(format!("unexpected `{}` after literal", c)));
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<()> {
        if self.eat(expected) {
            return Ok(());
        }
        Err(match self.peek() {
            Some(c) => self.error_here(format!("expected `{}`, found `{}`", expected, c)),
            None => self.error_here(format!("expected `{}`, found end of input", expected)),
        })
    }

    fn error_here(&self, reason: impl Into<String>) -> CatalogError {
        CatalogError::malformed(self.pos, reason)
    }

    fn error_at(&self, offset: usize, reason: impl Into<String>) -> CatalogError {
        CatalogError::malformed(offset, reason)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() || c == '\u{feff}' {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    /// `depth` counts the objects and arrays enclosing the value.
    fn parse_value(&mut self, depth: usize) -> Result<Value> {
        match self.peek() {
            Some('{' | '[') if depth >= MAX_NESTING => Err(self.error_here("nesting too deep")),
            Some('{') => self.parse_object(depth + 1),
            Some('[') => self.parse_array(depth + 1),
            Some(quote @ ('"' | '\'')) => self.parse_string(quote).map(Value::String),
            Some('`') => Err(self.error_here("template literals are not supported")),
            Some(c) if c == '-' || c == '+' || c == '.' || c.is_ascii_digit() => {
                self.parse_number().map(Value::Number)
            }
            Some(c) if is_identifier_start(c) => {
                let start = self.pos;
                let word = self.parse_identifier();
                match word {
                    "true" => Ok(Value::Bool(true)),
                    "false" => Ok(Value::Bool(false)),
                    "null" => Ok(Value::Null),
                    other => Err(self.error_at(
                        start,
                        format!("identifier `{}` is not allowed in a data literal", other),
                    )),
                }
            }
            Some('/') => Err(self.error_here("comments and regular expressions are not supported")),
            Some(c) => Err(self.error_here(format!("unexpected `{}`", c))),
            None => Err(self.error_here("unexpected end of input")),
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value> {
        self.expect('{')?;
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            if self.eat('}') {
                return Ok(Value::Object(map));
            }

            let key = self.parse_key()?;
            self.skip_whitespace();
            if !self.eat(':') {
                // `{ foo }` and `{ foo() {} }` both reference code.
                return Err(self.error_here(format!(
                    "expected `:` after key `{}` (shorthand properties and methods are not supported)",
                    key
                )));
            }
            self.skip_whitespace();
            let value = self.parse_value(depth)?;
            map.insert(key, value);

            self.skip_whitespace();
            if self.eat(',') {
                continue;
            }
            self.expect('}')?;
            return Ok(Value::Object(map));
        }
    }

    fn parse_key(&mut self) -> Result<String> {
        match self.peek() {
            Some(quote @ ('"' | '\'')) => self.parse_string(quote),
            Some(c) if c.is_ascii_digit() => self.parse_number().map(|n| number_key(&n)),
            Some(c) if is_identifier_start(c) => Ok(self.parse_identifier().to_string()),
            Some('[') => Err(self.error_here("computed keys are not supported")),
            Some('.') => Err(self.error_here("spread syntax is not supported")),
            Some(c) => Err(self.error_here(format!("unexpected `{}` where a key was expected", c))),
            None => Err(self.error_here("unexpected end of input inside object")),
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value> {
        self.expect('[')?;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.eat(']') {
                return Ok(Value::Array(items));
            }
            if self.peek() == Some(',') {
                return Err(self.error_here("array holes are not supported"));
            }

            items.push(self.parse_value(depth)?);

            self.skip_whitespace();
            if self.eat(',') {
                continue;
            }
            self.expect(']')?;
            return Ok(Value::Array(items));
        }
    }

    fn parse_identifier(&mut self) -> &'a str {
        let input = self.input;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_identifier_part(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
        &input[start..self.pos]
    }

    fn parse_string(&mut self, quote: char) -> Result<String> {
        let start = self.pos;
        self.expect(quote)?;
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error_at(start, "unterminated string"));
            };
            match c {
                c if c == quote => return Ok(out),
                '\\' => self.parse_escape(&mut out)?,
                '\n' | '\r' => {
                    return Err(self.error_at(start, "line break inside string literal"));
                }
                c => out.push(c),
            }
        }
    }

    fn parse_escape(&mut self, out: &mut String) -> Result<()> {
        let escape_start = self.pos - 1;
        let Some(c) = self.bump() else {
            return Err(self.error_at(escape_start, "unterminated escape sequence"));
        };
        match c {
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            't' => out.push('\t'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !self.peek().is_some_and(|n| n.is_ascii_digit()) => out.push('\0'),
            'x' => {
                let code = self.parse_hex_digits(2, escape_start)?;
                out.push(self.char_from_code(code, escape_start)?);
            }
            'u' => {
                let code = if self.eat('{') {
                    let input = self.input;
                    let digits_start = self.pos;
                    while self.peek().is_some_and(|d| d.is_ascii_hexdigit()) {
                        self.pos += 1;
                    }
                    let digits = &input[digits_start..self.pos];
                    self.expect('}')?;
                    u32::from_str_radix(digits, 16)
                        .map_err(|_| self.error_at(escape_start, "invalid unicode escape"))?
                } else {
                    self.parse_utf16_escape(escape_start)?
                };
                out.push(self.char_from_code(code, escape_start)?);
            }
            // Line continuation.
            '\r' => {
                self.eat('\n');
            }
            '\n' | '\u{2028}' | '\u{2029}' => {}
            c if c.is_ascii_digit() => {
                return Err(self.error_at(escape_start, "octal escapes are not supported"));
            }
            other => out.push(other),
        }
        Ok(())
    }

    /// Parse `XXXX` after `\u`, combining a following `\uXXXX` low surrogate.
    fn parse_utf16_escape(&mut self, escape_start: usize) -> Result<u32> {
        let high = self.parse_hex_digits(4, escape_start)?;
        if !(0xD800..0xDC00).contains(&high) {
            return Ok(high);
        }
        let rest = &self.input[self.pos..];
        if rest.starts_with("\\u") {
            let saved = self.pos;
            self.pos += 2;
            let low = self.parse_hex_digits(4, escape_start)?;
            if (0xDC00..0xE000).contains(&low) {
                return Ok(0x10000 + ((high - 0xD800) << 10) + (low - 0xDC00));
            }
            self.pos = saved;
        }
        Err(self.error_at(escape_start, "unpaired surrogate in unicode escape"))
    }

    fn parse_hex_digits(&mut self, count: usize, escape_start: usize) -> Result<u32> {
        let end = self.pos + count;
        let digits = self
            .input
            .get(self.pos..end)
            .filter(|d| d.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| self.error_at(escape_start, "invalid hexadecimal escape"))?;
        let code = u32::from_str_radix(digits, 16)
            .map_err(|_| self.error_at(escape_start, "invalid hexadecimal escape"))?;
        self.pos = end;
        Ok(code)
    }

    fn char_from_code(&self, code: u32, escape_start: usize) -> Result<char> {
        char::from_u32(code)
            .ok_or_else(|| self.error_at(escape_start, format!("invalid code point {:#x}", code)))
    }

    fn parse_number(&mut self) -> Result<Number> {
        let start = self.pos;
        let negative = if self.eat('-') {
            true
        } else {
            self.eat('+');
            false
        };

        let rest = &self.input[self.pos..];
        let radix = match rest.get(..2) {
            Some("0x" | "0X") => Some(16),
            Some("0o" | "0O") => Some(8),
            Some("0b" | "0B") => Some(2),
            _ => None,
        };
        if let Some(radix) = radix {
            self.pos += 2;
            let digits_start = self.pos;
            while self.peek().is_some_and(|c| c.is_digit(radix) || c == '_') {
                self.pos += 1;
            }
            let digits: String = self.input[digits_start..self.pos]
                .chars()
                .filter(|&c| c != '_')
                .collect();
            let value = i64::from_str_radix(&digits, radix)
                .map_err(|_| self.error_at(start, "invalid integer literal"))?;
            return Ok(Number::from(if negative { -value } else { value }));
        }

        let digits_start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '_'))
        {
            let c = self.bump();
            if matches!(c, Some('e' | 'E')) && matches!(self.peek(), Some('+' | '-')) {
                self.bump();
            }
        }
        let text: String = self.input[digits_start..self.pos]
            .chars()
            .filter(|&c| c != '_')
            .collect();
        if text.is_empty() {
            return Err(self.error_at(start, "expected digits"));
        }
        if self.peek().is_some_and(is_identifier_start) {
            return Err(self.error_at(start, "invalid number literal"));
        }

        let is_integer = text.chars().all(|c| c.is_ascii_digit());
        if is_integer && let Ok(value) = text.parse::<i64>() {
            return Ok(Number::from(if negative { -value } else { value }));
        }
        let value: f64 = text
            .parse()
            .map_err(|_| self.error_at(start, format!("invalid number literal `{}`", text)))?;
        let value = if negative { -value } else { value };
        Number::from_f64(value).ok_or_else(|| self.error_at(start, "number is not finite"))
    }
}

/// Property name of a numeric key, as JS spells it: `0x10` is `"16"`, `1.50` is `"1.5"`.
fn number_key(number: &Number) -> String {
    match (number.as_i64(), number.as_f64()) {
        (Some(int), _) => int.to_string(),
        // Float `Display` drops a zero fraction: `1e3` becomes `1000`.
        (None, Some(float)) => float.to_string(),
        (None, None) => number.to_string(),
    }
}

fn is_identifier_start(c: char) -> bool {
    c == '$' || c == '_' || c.is_alphabetic()
}

fn is_identifier_part(c: char) -> bool {
    is_identifier_start(c) || c.is_alphanumeric()
}
