use super::scope::expect_kind;
use super::*;

/// A raw source block inside `Shader { ... }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Shared,
    Vertex,
    Fragment,
}

impl Stage {
    fn from_keyword(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::SharedKeyword => Some(Self::Shared),
            TokenKind::VertexKeyword => Some(Self::Vertex),
            TokenKind::FragmentKeyword => Some(Self::Fragment),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Shared => "Shared shader",
            Self::Vertex => "Vertex shader",
            Self::Fragment => "Fragment shader",
        }
    }

    fn slot(self, sources: &mut Sources) -> &mut Option<String> {
        match self {
            Self::Shared => &mut sources.shared,
            Self::Vertex => &mut sources.vertex,
            Self::Fragment => &mut sources.fragment,
        }
    }
}

impl<'src> Parser<'src> {
    /// Parses `Shader { ... }` holding stage sources and entry points.
    pub(super) fn parse_shader(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::LeftBrace)?;

        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::RightBrace => return Ok(()),
                TokenKind::EndOfFile => {
                    return Err(CompileError::expected(TokenKind::RightBrace, &token));
                }
                kind if kind.is_comment() => {}
                kind if kind.is_invalid() => return Err(CompileError::invalid_token(&token)),
                TokenKind::EntrypointKeyword => self.parse_entrypoints()?,
                kind => match Stage::from_keyword(kind) {
                    Some(stage) => self.parse_stage(stage, &token)?,
                    None => return Err(CompileError::unknown_in_scope("Shader", &token)),
                },
            }
        }
    }

    /// Parses `Shared|Vertex|Fragment { <raw code> }`.
    fn parse_stage(&mut self, stage: Stage, keyword: &Token<'src>) -> CompileResult<()> {
        if stage.slot(&mut self.sources).is_some() {
            return Err(CompileError::already_set(stage.label(), keyword));
        }

        let open = self.expect(TokenKind::LeftBrace)?;
        let text = self.raw_scope(&open)?;

        log::trace!("{} with {} bytes", stage.label(), text.len());
        *stage.slot(&mut self.sources) = Some(text.to_owned());
        Ok(())
    }

    /// Parses `Entrypoint { Vertex "<fn>"; Fragment "<fn>"; }`.
    fn parse_entrypoints(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::LeftBrace)?;
        let (body, close) = self.structured_scope()?;

        let mut tokens = body.into_iter();
        while let Some(token) = tokens.next() {
            let (label, slot) = match token.kind {
                TokenKind::VertexKeyword => ("Vertex entrypoint", &mut self.meta.vertex_entrypoint),
                TokenKind::FragmentKeyword => {
                    ("Fragment entrypoint", &mut self.meta.fragment_entrypoint)
                }
                _ => return Err(CompileError::unknown_in_scope("Entrypoint", &token)),
            };
            if slot.is_some() {
                return Err(CompileError::already_set(label, &token));
            }

            // A short entry is reported against the closing brace.
            let name = tokens.next().unwrap_or(close);
            expect_kind(TokenKind::StringLiteral, &name)?;
            let semicolon = tokens.next().unwrap_or(close);
            expect_kind(TokenKind::Semicolon, &semicolon)?;

            log::trace!("{} {:?}", label, name.text);
            *slot = Some(name.text.to_owned());
        }

        Ok(())
    }
}
