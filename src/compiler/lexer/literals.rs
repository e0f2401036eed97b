use super::consume::is_space;
use super::*;

impl<'src> Lexer<'src> {
    /// Lexes a double-quoted string literal.
    ///
    /// The token text is the contents between the quotes. A newline or the
    /// end of input before the closing quote yields `InvalidStringLiteral`
    /// spanning from the opening quote to just before the terminator.
    pub(super) fn lex_string_literal(&mut self) -> Token<'src> {
        let start = self.pos;
        self.advance(1); // opening quote
        let content_start = self.pos;

        loop {
            match self.current() {
                Some(b'"') => break,
                Some(b'\n' | b'\r') | None => {
                    return Token::new(
                        &self.source[start..self.pos],
                        start,
                        TokenKind::InvalidStringLiteral,
                    );
                }
                Some(_) => self.advance(1),
            }
        }

        let content = &self.source[content_start..self.pos];
        self.advance(1); // closing quote
        Token::new(content, start, TokenKind::StringLiteral)
    }

    /// Lexes `'`: a character literal when a non-whitespace character follows.
    ///
    /// The literal is the quote plus one character; no closing quote is
    /// consumed and escapes are not interpreted.
    pub(super) fn lex_apostrophe(&mut self) -> TokenKind {
        self.advance(1);
        match self.current() {
            Some(byte) if !is_space(byte) => {
                self.advance(1);
                TokenKind::CharacterLiteral
            }
            _ => TokenKind::Apostrophe,
        }
    }

    /// Lexes a run of decimal digits.
    // TODO: lex `0x`, `0b` and `0o` prefixes into the reserved number kinds.
    pub(super) fn lex_number_literal(&mut self) -> Token<'src> {
        let start = self.pos;
        self.consume_while(|b| b.is_ascii_digit());

        let kind = match self.current() {
            Some(byte) if byte.is_ascii_alphabetic() => TokenKind::InvalidNumberLiteral,
            _ => TokenKind::NumberLiteral,
        };
        Token::new(&self.source[start..self.pos], start, kind)
    }
}
