use super::*;

/// Whitespace as defined by C `isspace` in the "C" locale.
pub(super) fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Printable ASCII, space included.
pub(super) fn is_printable(byte: u8) -> bool {
    (0x20..=0x7e).contains(&byte)
}

impl Lexer<'_> {
    /// Returns the byte under the cursor.
    ///
    /// Returns `None` at the end of input, and also for a byte that is neither
    /// printable nor whitespace, in which case the lexer moves to
    /// [`LexerState::InvalidAscii`].
    pub(super) fn current(&mut self) -> Option<u8> {
        let byte = *self.source.as_bytes().get(self.pos)?;
        if !is_printable(byte) && !is_space(byte) {
            self.state = LexerState::InvalidAscii;
            return None;
        }
        Some(byte)
    }

    /// Returns the raw byte after the cursor without validating it.
    pub(super) fn peek(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos + 1).copied()
    }

    /// Advances the position by n bytes, stopping at the end of input.
    pub(super) fn advance(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Consumes `expected` if it is under the cursor.
    pub(super) fn eat(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance(1);
            true
        } else {
            false
        }
    }

    /// Consumes `expected` and returns `matched`, or returns `otherwise`.
    pub(super) fn select(
        &mut self,
        expected: u8,
        matched: TokenKind,
        otherwise: TokenKind,
    ) -> TokenKind {
        if self.eat(expected) { matched } else { otherwise }
    }

    /// Consumes bytes while the predicate is true.
    pub(super) fn consume_while<F: Fn(u8) -> bool>(&mut self, pred: F) {
        while let Some(byte) = self.current() {
            if pred(byte) {
                self.advance(1);
            } else {
                break;
            }
        }
    }

    /// Skips a run of whitespace.
    pub(super) fn skip_whitespace(&mut self) {
        self.consume_while(is_space);
    }
}
