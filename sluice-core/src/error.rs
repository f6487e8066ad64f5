use std::fmt::{self, Display};

/// Lexical region left open at the end of the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// `'...'`
    String,
    /// `"..."`
    QuotedIdentifier,
    /// `/* ... */`
    BlockComment,
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Region::String => "string literal",
            Region::QuotedIdentifier => "quoted identifier",
            Region::BlockComment => "block comment",
        })
    }
}

/// Typed failures raised by this crate.
///
/// They travel inside [`crate::Error`], callers that need to tell them apart use
/// `error.downcast_ref::<SqlError>()`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SqlError {
    #[error("Cannot parse the sql: unclosed {region} starting at byte {offset}")]
    MalformedSql { region: Region, offset: usize },
    #[error("Invalid parameter index [{0}]")]
    InvalidParameterIndex(i64),
    #[error("Unknown data type `{0}`")]
    UnknownDataType(String),
}
