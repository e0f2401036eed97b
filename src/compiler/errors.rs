//! Error types for the compiler.
//!
//! Every failure is a single positioned diagnostic. The compiler stops at the
//! first one and never resynchronizes.

use thiserror::Error;

use super::lexer::Token;
use super::syntax::TokenKind;

/// The kind of compile error that occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileErrorKind {
    /// The lexer produced one of the `Invalid*` token kinds.
    InvalidToken,
    /// A token of a different kind was required at this position.
    UnexpectedToken,
    /// A token that no rule accepts in the current scope.
    UnknownToken,
    /// A scope ran into the end of input before its closing brace.
    UnterminatedScope,
    /// A set-once field was declared a second time.
    AlreadySet,
    /// Binding declarations did not line up as `type name : slot ;`.
    InvalidSyntax,
}

impl CompileErrorKind {
    /// Returns a human-readable description of this error kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::InvalidToken => "invalid token",
            Self::UnexpectedToken => "unexpected token",
            Self::UnknownToken => "unknown token",
            Self::UnterminatedScope => "unterminated scope",
            Self::AlreadySet => "declared more than once",
            Self::InvalidSyntax => "invalid syntax",
        }
    }

    /// Returns a suggested fix for this error kind.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::UnterminatedScope => Some("add a closing brace }"),
            Self::AlreadySet => Some("remove the duplicate declaration"),
            Self::InvalidSyntax => Some("declare each entry as `type name : slot;`"),
            Self::InvalidToken => Some("the source may only contain printable ASCII"),
            _ => None,
        }
    }
}

/// A compile error with the byte offset it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CompileError {
    /// The kind of error.
    pub kind: CompileErrorKind,
    /// The diagnostic message.
    pub message: String,
    /// Byte offset in the source where the error occurred.
    pub index: usize,
}

impl CompileError {
    /// Creates a new compile error.
    pub fn new(kind: CompileErrorKind, message: impl Into<String>, index: usize) -> Self {
        Self {
            kind,
            message: message.into(),
            index,
        }
    }

    /// Creates an "Invalid token" error.
    pub fn invalid_token(token: &Token<'_>) -> Self {
        Self::new(CompileErrorKind::InvalidToken, "Invalid token", token.index)
    }

    /// Creates an "Expected token X got: Y" error.
    pub fn expected(expected: TokenKind, found: &Token<'_>) -> Self {
        Self::new(
            CompileErrorKind::UnexpectedToken,
            format!("Expected token {} got: {}", expected, found.kind),
            found.index,
        )
    }

    /// Creates an "Unknown token" error at the top level.
    pub fn unknown_token(token: &Token<'_>) -> Self {
        Self::new(CompileErrorKind::UnknownToken, "Unknown token", token.index)
    }

    /// Creates an "Unknown token inside scope" error.
    pub fn unknown_in_scope(scope: &str, token: &Token<'_>) -> Self {
        Self::new(
            CompileErrorKind::UnknownToken,
            format!("Unknown token inside scope '{}'", scope),
            token.index,
        )
    }

    /// Creates an "Expected '}'" error for a scope that reached end of input.
    pub fn unterminated_scope(eof: &Token<'_>) -> Self {
        Self::new(CompileErrorKind::UnterminatedScope, "Expected '}'", eof.index)
    }

    /// Creates an "already set" error for a set-once field.
    pub fn already_set(what: &str, token: &Token<'_>) -> Self {
        Self::new(
            CompileErrorKind::AlreadySet,
            format!("{} already set", what),
            token.index,
        )
    }

    /// Creates an "Invalid syntax" error for a misaligned binding list.
    pub fn invalid_syntax(section: &str, token: &Token<'_>) -> Self {
        Self::new(
            CompileErrorKind::InvalidSyntax,
            format!("Invalid syntax for '{}'", section),
            token.index,
        )
    }
}

/// Result type for compilation.
pub type CompileResult<T> = Result<T, CompileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_message_uses_kind_names() {
        let found = Token::new("5", 12, TokenKind::NumberLiteral);
        let err = CompileError::expected(TokenKind::StringLiteral, &found);
        assert_eq!(err.message, "Expected token StringLiteral got: NumberLiteral");
        assert_eq!(err.index, 12);
        assert_eq!(err.kind, CompileErrorKind::UnexpectedToken);
    }

    #[test]
    fn test_display_is_message() {
        let token = Token::new("Name", 20, TokenKind::NameKeyword);
        let err = CompileError::already_set("Name", &token);
        assert_eq!(err.to_string(), "Name already set");
    }

    #[test]
    fn test_scope_message() {
        let token = Token::new("Input", 3, TokenKind::InputKeyword);
        let err = CompileError::unknown_in_scope("Shader", &token);
        assert_eq!(err.message, "Unknown token inside scope 'Shader'");
    }

    #[test]
    fn test_all_error_kinds_have_descriptions() {
        let kinds = [
            CompileErrorKind::InvalidToken,
            CompileErrorKind::UnexpectedToken,
            CompileErrorKind::UnknownToken,
            CompileErrorKind::UnterminatedScope,
            CompileErrorKind::AlreadySet,
            CompileErrorKind::InvalidSyntax,
        ];
        for kind in kinds {
            assert!(!kind.description().is_empty());
        }
    }
}
