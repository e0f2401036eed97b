use super::*;

/// Requires `token` to be of the given kind.
pub(super) fn expect_kind(kind: TokenKind, token: &Token<'_>) -> CompileResult<()> {
    if token.kind == kind {
        Ok(())
    } else {
        Err(CompileError::expected(kind, token))
    }
}

impl<'src> Parser<'src> {
    /// Reads the next non-comment token and requires it to be of the given kind.
    pub(super) fn expect(&mut self, kind: TokenKind) -> CompileResult<Token<'src>> {
        let token = loop {
            let token = self.lexer.next_token();
            if !token.kind.is_comment() {
                break token;
            }
        };
        expect_kind(kind, &token)?;
        Ok(token)
    }

    /// Collects raw tokens up to the `}` closing a scope whose `{` has
    /// already been consumed.
    ///
    /// The returned list ends with that `}`, or with `EndOfFile` when the
    /// input runs out first; callers check which.
    pub(super) fn lex_scope(&mut self) -> Vec<Token<'src>> {
        let mut tokens = Vec::new();
        let mut nesting = 0usize;
        loop {
            let token = self.lexer.next_token();
            tokens.push(token);
            match token.kind {
                TokenKind::LeftBrace => nesting += 1,
                TokenKind::RightBrace if nesting == 0 => return tokens,
                TokenKind::RightBrace => nesting -= 1,
                TokenKind::EndOfFile => return tokens,
                _ => {}
            }
        }
    }

    /// Runs [`Self::lex_scope`] and splits off the closing brace, failing if
    /// the scope is unterminated.
    fn lex_closed_scope(&mut self) -> CompileResult<(Vec<Token<'src>>, Token<'src>)> {
        let mut tokens = self.lex_scope();
        match tokens.pop() {
            Some(close) if close.kind == TokenKind::RightBrace => Ok((tokens, close)),
            Some(last) => Err(CompileError::expected(TokenKind::RightBrace, &last)),
            None => Err(CompileError::expected(
                TokenKind::RightBrace,
                &self.lexer.next_token(),
            )),
        }
    }

    /// Captures a declaration scope: the body tokens without comments, and
    /// the closing brace.
    ///
    /// Any malformed token inside fails the compile.
    pub(super) fn structured_scope(&mut self) -> CompileResult<(Vec<Token<'src>>, Token<'src>)> {
        let (mut body, close) = self.lex_closed_scope()?;
        if let Some(invalid) = body.iter().find(|t| t.kind.is_invalid()) {
            return Err(CompileError::invalid_token(invalid));
        }
        body.retain(|t| !t.kind.is_comment());
        Ok((body, close))
    }

    /// Captures the verbatim text between `open` and its matching `}`.
    ///
    /// Only characters outside printable ASCII fail here; the embedded
    /// shader code is otherwise not interpreted.
    pub(super) fn raw_scope(&mut self, open: &Token<'src>) -> CompileResult<&'src str> {
        let (body, close) = self.lex_closed_scope()?;
        if let Some(invalid) = body.iter().find(|t| t.kind == TokenKind::Invalid) {
            return Err(CompileError::invalid_token(invalid));
        }
        Ok(&self.source[open.index + 1..close.index])
    }
}
