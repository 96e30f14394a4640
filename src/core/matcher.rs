//! Literal matching for translation calls.
//!
//! Finds string literals passed as the first argument of a translation
//! function (e.g. `_('Save')`) without tokenizing the surrounding source.
//! Matching is purely textual and stateless: every call scans the given line
//! from the start, so a single matcher can be shared by concurrent file runs.

use enum_dispatch::enum_dispatch;
use regex::Regex;

use crate::error::{ExtractError, Result};

/// Default translation function name.
pub const DEFAULT_FUNCTION_NAME: &str = "_";

/// Default capture group holding the literal for custom patterns.
pub const DEFAULT_CAPTURE_INDEX: usize = 1;

/// A string literal found in a source line, including its delimiters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    raw: String,
}

impl Literal {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The literal exactly as written in the source.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Canonical double-quoted form used for `msgid`/`msgstr`.
    ///
    /// Single-quoted literals are rewritten: `\'` is unescaped, raw `"` is
    /// escaped and the body is wrapped in `"`. Anything else (double-quoted
    /// literals, unquoted custom captures) is returned unchanged.
    pub fn normalized(&self) -> String {
        let raw = self.raw();
        if raw.len() < 2 || !raw.starts_with('\'') || !raw.ends_with('\'') {
            return raw.to_string();
        }

        let body = &raw[1..raw.len() - 1];
        let mut out = String::with_capacity(raw.len() + 2);
        out.push('"');

        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            match c {
                '\\' => match chars.next() {
                    Some('\'') => out.push('\''),
                    Some(escaped) => {
                        out.push('\\');
                        out.push(escaped);
                    }
                    None => out.push('\\'),
                },
                '"' => out.push_str("\\\""),
                c => out.push(c),
            }
        }

        out.push('"');
        out
    }
}

/// Something that can pull translatable literals out of a single line.
#[enum_dispatch]
pub trait FindLiterals {
    /// Return literals in left-to-right order. Must not keep state between calls.
    fn find_literals(&self, line: &str) -> Vec<Literal>;
}

/// Matcher used for a run: the built-in call matcher or a user pattern.
#[enum_dispatch(FindLiterals)]
#[derive(Debug, Clone)]
pub enum LiteralMatcher {
    Call(CallMatcher),
    Pattern(PatternMatcher),
}

impl LiteralMatcher {
    /// Build the matcher for a run.
    ///
    /// A custom `pattern` takes precedence over the function name.
    pub fn new(function_name: &str, pattern: Option<&str>, capture_index: usize) -> Result<Self> {
        match pattern {
            Some(pattern) => Ok(PatternMatcher::new(pattern, capture_index)?.into()),
            None => Ok(CallMatcher::new(function_name).into()),
        }
    }
}

impl Default for LiteralMatcher {
    fn default() -> Self {
        CallMatcher::new(DEFAULT_FUNCTION_NAME).into()
    }
}

/// Matches the first literal argument of `name(...)` calls.
#[derive(Debug, Clone)]
pub struct CallMatcher {
    /// Function name followed by the opening parenthesis.
    call_prefix: String,
}

impl CallMatcher {
    pub fn new(function_name: &str) -> Self {
        Self {
            call_prefix: format!("{}(", function_name),
        }
    }
}

impl FindLiterals for CallMatcher {
    fn find_literals(&self, line: &str) -> Vec<Literal> {
        let bytes = line.as_bytes();
        let mut literals = Vec::new();
        let mut pos = 0;

        while let Some(offset) = line[pos..].find(&self.call_prefix) {
            let after_paren = pos + offset + self.call_prefix.len();
            let start = skip_whitespace(bytes, after_paren);

            match scan_literal(bytes, start) {
                Some(end) if closes_call(bytes, end) => {
                    literals.push(Literal::new(&line[start..end]));
                    // Trailing arguments were only looked at, resume right after the literal.
                    pos = end;
                }
                _ => pos = after_paren,
            }
        }

        literals
    }
}

/// Matches a user supplied regular expression.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    regex: Regex,
    capture_index: usize,
}

impl PatternMatcher {
    pub fn new(pattern: &str, capture_index: usize) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            ExtractError::Config(format!("invalid pattern \"{}\": {}", pattern, e))
        })?;

        if capture_index >= regex.captures_len() {
            return Err(ExtractError::Config(format!(
                "capture index {} out of range, pattern \"{}\" has {} group(s)",
                capture_index,
                pattern,
                regex.captures_len() - 1
            )));
        }

        Ok(Self {
            regex,
            capture_index,
        })
    }
}

impl FindLiterals for PatternMatcher {
    fn find_literals(&self, line: &str) -> Vec<Literal> {
        self.regex
            .captures_iter(line)
            .filter_map(|caps| caps.get(self.capture_index))
            .map(|m| Literal::new(m.as_str()))
            .collect()
    }
}

fn skip_whitespace(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Scan a quoted literal starting at `start`.
///
/// Returns the index just past the closing quote. A backslash always consumes
/// the following byte, so an escaped delimiter never closes the literal.
fn scan_literal(bytes: &[u8], start: usize) -> Option<usize> {
    let quote = *bytes.get(start)?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }

    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b if b == quote => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}

/// Check that the rest of the call after a literal is a comma separated list
/// of literal or bare arguments followed by `)`. Nothing is consumed.
///
/// Bare arguments cannot contain quotes or a closing parenthesis, so a
/// trailing nested call holding a literal makes the whole call ineligible.
fn closes_call(bytes: &[u8], end: usize) -> bool {
    let mut i = end;

    loop {
        i = skip_whitespace(bytes, i);
        match bytes.get(i) {
            Some(b')') => return true,
            Some(b',') => {
                i += 1;
                let arg = skip_whitespace(bytes, i);
                if matches!(bytes.get(arg), Some(b'"' | b'\'')) {
                    match scan_literal(bytes, arg) {
                        Some(next) => i = next,
                        None => return false,
                    }
                    continue;
                }

                let Some(stop) = bytes[i..]
                    .iter()
                    .position(|b| matches!(b, b'"' | b'\'' | b')'))
                    .map(|p| i + p)
                else {
                    return false;
                };
                if stop == i {
                    return false;
                }
                if bytes[stop] == b')' {
                    return true;
                }

                // A quote ends the bare run: the run must end with `, ` so the
                // quote opens the next argument.
                let Some(comma) = bytes[i..stop].iter().rposition(|b| *b == b',') else {
                    return false;
                };
                let comma = i + comma;
                if comma == i || !bytes[comma + 1..stop].iter().all(u8::is_ascii_whitespace) {
                    return false;
                }
                i = comma;
            }
            _ => return false,
        }
    }
}
