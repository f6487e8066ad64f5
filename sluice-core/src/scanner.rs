use crate::{Error, Region, Result, SqlError};
use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// What to do when the text ends inside a quoted region or a block comment.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanPolicy {
    /// Fail with [`SqlError::MalformedSql`].
    #[default]
    Strict,
    /// Treat the open region as running to the end of the text and keep the
    /// placeholders found before it.
    Lenient,
}

impl Display for ScanPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScanPolicy::Strict => "strict",
            ScanPolicy::Lenient => "lenient",
        })
    }
}

impl FromStr for ScanPolicy {
    type Err = Error;
    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ScanPolicy::Strict),
            "lenient" => Ok(ScanPolicy::Lenient),
            _ => Err(Error::msg(format!(
                "Unknown scan policy `{value}`, expected `strict` or `lenient`"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    SingleQuote,
    DoubleQuote,
    LineComment,
    BlockComment,
}

/// Single pass lexical scanner locating the `?` placeholders of a SQL text.
///
/// Only quote and comment delimiters are recognized, everything else is
/// treated as opaque code, so any dialect sharing those conventions works:
/// - `'...'` string literals and `"..."` quoted identifiers, where a doubled
///   quote (`''`, `""`) is an escaped quote and does not close the region.
/// - `-- ...` comments up to the end of the line.
/// - `/* ... */` comments, not nested.
///
/// ```rust
/// use sluice_core::Scanner;
/// let offsets = Scanner::new("SELECT ?, '?' /* ? */, ?").scan().unwrap();
/// assert_eq!(offsets, [7, 23]);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'s> {
    sql: &'s str,
    policy: ScanPolicy,
}

impl<'s> Scanner<'s> {
    pub fn new(sql: &'s str) -> Self {
        Self {
            sql,
            policy: ScanPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ScanPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Byte offsets of every placeholder, in order of appearance.
    pub fn scan(&self) -> Result<Vec<usize>> {
        let bytes = self.sql.as_bytes();
        let len = bytes.len();
        let mut offsets = Vec::new();
        let mut mode = Mode::Code;
        // Where the currently open region started
        let mut opened_at = 0;
        let mut i = 0;
        while i < len {
            let c = bytes[i];
            let next = bytes.get(i + 1).copied();
            match mode {
                Mode::Code => match (c, next) {
                    (b'\'', _) => {
                        mode = Mode::SingleQuote;
                        opened_at = i;
                    }
                    (b'"', _) => {
                        mode = Mode::DoubleQuote;
                        opened_at = i;
                    }
                    (b'-', Some(b'-')) => {
                        mode = Mode::LineComment;
                        opened_at = i;
                        i += 1;
                    }
                    (b'/', Some(b'*')) => {
                        mode = Mode::BlockComment;
                        opened_at = i;
                        i += 1;
                    }
                    (b'?', _) => offsets.push(i),
                    _ => {}
                },
                Mode::SingleQuote | Mode::DoubleQuote => {
                    let quote = if mode == Mode::SingleQuote { b'\'' } else { b'"' };
                    if c == quote {
                        if next == Some(quote) {
                            i += 1;
                        } else {
                            mode = Mode::Code;
                        }
                    }
                }
                Mode::LineComment => {
                    if c == b'\n' {
                        mode = Mode::Code;
                    }
                }
                Mode::BlockComment => {
                    if c == b'*' && next == Some(b'/') {
                        mode = Mode::Code;
                        i += 1;
                    }
                }
            }
            i += 1;
        }
        let region = match mode {
            Mode::Code | Mode::LineComment => return Ok(offsets),
            Mode::SingleQuote => Region::String,
            Mode::DoubleQuote => Region::QuotedIdentifier,
            Mode::BlockComment => Region::BlockComment,
        };
        match self.policy {
            ScanPolicy::Strict => {
                let error = Error::new(SqlError::MalformedSql {
                    region,
                    offset: opened_at,
                });
                log::error!("{:#}", error);
                Err(error)
            }
            ScanPolicy::Lenient => {
                log::warn!(
                    "Unclosed {} starting at byte {}, ignoring the rest of the query",
                    region,
                    opened_at
                );
                Ok(offsets)
            }
        }
    }
}

/// Number of placeholders in `sql`, failing on unterminated strings or block comments.
pub fn count_placeholders(sql: &str) -> Result<usize> {
    Scanner::new(sql).scan().map(|v| v.len())
}

/// Byte offsets of the placeholders in `sql` according to `policy`.
pub fn placeholder_offsets(sql: &str, policy: ScanPolicy) -> Result<Vec<usize>> {
    Scanner::new(sql).with_policy(policy).scan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escaped_quote_at_region_end() {
        // The closing quote right after an escape must still close the region
        assert_eq!(Scanner::new("'a''' ?").scan().unwrap(), [6]);
        assert_eq!(Scanner::new("\"a\"\"\" ?").scan().unwrap(), [6]);
    }

    #[test]
    fn comment_openers_are_not_shared() {
        // `/*/` does not close itself, `-` alone is an operator
        assert!(Scanner::new("/*/ ?").scan().is_err());
        assert_eq!(Scanner::new("1 - ? -- ?").scan().unwrap(), [4]);
    }

    #[test]
    fn open_region_offset() {
        let error = Scanner::new("SELECT ? /* open").scan().unwrap_err();
        assert_eq!(
            error.downcast_ref::<SqlError>(),
            Some(&SqlError::MalformedSql {
                region: Region::BlockComment,
                offset: 9,
            })
        );
    }
}
