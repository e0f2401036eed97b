//! Lexer for the shader-definition language.
//!
//! The lexer is pull-based: each call to [`Lexer::next_token`] produces exactly
//! one [`Token`] borrowing its text from the source buffer. Nothing is copied
//! while lexing.

mod comments;
mod consume;
mod keyword;
mod literals;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use super::syntax::TokenKind;

/// A token produced by the lexer.
///
/// Two tokens compare equal when they have the same kind at the same byte
/// offset; the text is not part of the comparison.
#[derive(Debug, Clone, Copy)]
pub struct Token<'src> {
    /// The text of the token, borrowed from the source.
    ///
    /// For a well-formed string literal this is the contents between the
    /// quotes.
    pub text: &'src str,
    /// The byte offset of the token's first character.
    pub index: usize,
    /// The kind of token.
    pub kind: TokenKind,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    pub fn new(text: &'src str, index: usize, kind: TokenKind) -> Self {
        Self { text, index, kind }
    }

    /// Returns true if this token marks the end of input.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.index == other.index
    }
}

impl Eq for Token<'_> {}

impl Hash for Token<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.index.hash(state);
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at index {}: '{}'", self.kind, self.index, self.text)
    }
}

/// Error state of the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexerState {
    /// Normal operation.
    #[default]
    NoError,
    /// The character under the cursor is neither printable nor whitespace.
    /// The next token is an [`TokenKind::Invalid`] spanning it.
    InvalidAscii,
    /// The cursor reached the end of the buffer.
    EndOfFile,
}

/// The lexer for shader-definition source text.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// The source text.
    source: &'src str,
    /// Current byte position in the source.
    pos: usize,
    /// Error state, updated whenever the cursor inspects a character.
    state: LexerState,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer over the given source.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            state: LexerState::NoError,
        }
    }

    /// Returns the source text this lexer reads from.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Returns the current error state.
    pub fn state(&self) -> LexerState {
        self.state
    }

    /// Returns the current byte position.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Turns the lexer into an iterator over every token before `EndOfFile`.
    pub fn tokens(self) -> Tokens<'src> {
        Tokens {
            lexer: self,
            done: false,
        }
    }

    /// Returns the next token.
    ///
    /// Once the end of input has been reached every further call returns an
    /// `EndOfFile` token at the same offset.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.source.is_empty() {
            self.state = LexerState::EndOfFile;
            return self.end_of_file();
        }

        match self.state {
            LexerState::EndOfFile => return self.end_of_file(),
            LexerState::InvalidAscii => return self.lex_invalid(),
            LexerState::NoError => {}
        }

        self.skip_whitespace();

        let Some(byte) = self.current() else {
            return self.lex_stopped();
        };

        let start = self.pos;
        let kind = match byte {
            b'"' => return self.lex_string_literal(),
            b'/' if self.peek() == Some(b'/') => return self.lex_comment(),
            b'/' if self.peek() == Some(b'*') => return self.lex_block_comment(),
            b'0'..=b'9' => return self.lex_number_literal(),
            b if b.is_ascii_alphabetic() => return self.lex_symbol(),
            b'\'' => self.lex_apostrophe(),
            b'!' => {
                self.advance(1);
                self.select(b'=', TokenKind::ExclamationMarkEqual, TokenKind::ExclamationMark)
            }
            b'=' => {
                self.advance(1);
                self.select(b'=', TokenKind::EqualEqual, TokenKind::Equal)
            }
            b':' => {
                self.advance(1);
                self.select(b':', TokenKind::ColonColon, TokenKind::Colon)
            }
            b'<' => {
                self.advance(1);
                if self.eat(b'=') {
                    TokenKind::LessThanEqual
                } else if self.eat(b'<') {
                    self.select(
                        b'=',
                        TokenKind::LessThanLessThanEqual,
                        TokenKind::LessThanLessThan,
                    )
                } else {
                    TokenKind::LessThan
                }
            }
            b'>' => {
                self.advance(1);
                if self.eat(b'=') {
                    TokenKind::GreaterThanEqual
                } else if self.eat(b'>') {
                    self.select(
                        b'=',
                        TokenKind::GreaterThanGreaterThanEqual,
                        TokenKind::GreaterThanGreaterThan,
                    )
                } else {
                    TokenKind::GreaterThan
                }
            }
            other => {
                self.advance(1);
                // Printable, not whitespace, not alphanumeric: always punctuation.
                TokenKind::from_punctuation(other).unwrap_or(TokenKind::Invalid)
            }
        };

        Token::new(&self.source[start..self.pos], start, kind)
    }

    /// Returns the token for a cursor that could not read a character, which
    /// is either the end of input or an invalid byte.
    fn lex_stopped(&mut self) -> Token<'src> {
        if self.state == LexerState::InvalidAscii {
            return self.lex_invalid();
        }
        self.state = LexerState::EndOfFile;
        self.end_of_file()
    }

    /// Consumes the character under the cursor as an `Invalid` token.
    fn lex_invalid(&mut self) -> Token<'src> {
        let start = self.pos;
        // Non-ASCII characters are taken whole so the text stays a valid slice.
        let width = self.source[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.advance(width);
        self.state = LexerState::NoError;
        Token::new(&self.source[start..self.pos], start, TokenKind::Invalid)
    }

    fn end_of_file(&self) -> Token<'src> {
        let end = self.source.len();
        Token::new(&self.source[end..], end, TokenKind::EndOfFile)
    }
}

/// Iterator over the tokens of a source, stopping before `EndOfFile`.
#[derive(Debug, Clone)]
pub struct Tokens<'src> {
    lexer: Lexer<'src>,
    done: bool,
}

impl<'src> Iterator for Tokens<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let token = self.lexer.next_token();
        if token.is_eof() {
            self.done = true;
            return None;
        }
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}
