use super::*;

impl<'src> Lexer<'src> {
    /// Lexes a `//` comment up to, not including, the line break.
    pub(super) fn lex_comment(&mut self) -> Token<'src> {
        let start = self.pos;
        self.advance(2);
        self.consume_while(|b| b != b'\n' && b != b'\r');

        Token::new(&self.source[start..self.pos], start, TokenKind::Comment)
    }

    /// Lexes a `/* ... */` comment.
    ///
    /// Running out of input, or hitting an invalid character, before the
    /// closing `*/` yields `InvalidComment`.
    pub(super) fn lex_block_comment(&mut self) -> Token<'src> {
        let start = self.pos;
        self.advance(2);

        let kind = loop {
            match self.current() {
                Some(b'*') if self.peek() == Some(b'/') => {
                    self.advance(2);
                    break TokenKind::BlockComment;
                }
                Some(_) => self.advance(1),
                None => break TokenKind::InvalidComment,
            }
        };

        Token::new(&self.source[start..self.pos], start, kind)
    }
}
