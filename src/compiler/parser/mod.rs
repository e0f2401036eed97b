//! Parser for shader definitions.
//!
//! The parser pulls tokens from a private [`Lexer`] and dispatches on the
//! top-level keywords. Brace-delimited sections are captured with
//! [`Parser::lex_scope`] and then read as binding lists, entry points or raw
//! source text. Parsing stops at the first error.

mod bindings;
mod inputs;
mod scope;
mod shader;

use super::errors::{CompileError, CompileResult};
use super::lexer::{Lexer, Token};
use super::meta::{CompiledShader, Meta, Sources};
use super::syntax::TokenKind;

/// The parser for one source buffer.
pub(super) struct Parser<'src> {
    /// The full source text, for slicing raw stage sources.
    source: &'src str,
    /// The token source.
    lexer: Lexer<'src>,
    /// Metadata accumulated so far.
    meta: Meta,
    /// Raw stage sources accumulated so far.
    sources: Sources,
    /// Whether an `Input` section has been read.
    seen_inputs: bool,
    /// Whether a `PixelInput` section has been read.
    seen_pixel_inputs: bool,
}

impl<'src> Parser<'src> {
    /// Creates a new parser over the given source.
    pub(super) fn new(source: &'src str) -> Self {
        Self {
            source,
            lexer: Lexer::new(source),
            meta: Meta::default(),
            sources: Sources::default(),
            seen_inputs: false,
            seen_pixel_inputs: false,
        }
    }

    /// Parses the whole source.
    pub(super) fn parse(mut self) -> CompileResult<CompiledShader> {
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::EndOfFile => break,
                kind if kind.is_comment() => {}
                kind if kind.is_invalid() => return Err(CompileError::invalid_token(&token)),
                TokenKind::NameKeyword => self.parse_name(&token)?,
                TokenKind::BindingsKeyword => self.parse_bindings()?,
                TokenKind::InputKeyword | TokenKind::PixelInputKeyword => {
                    self.parse_inputs(&token)?
                }
                TokenKind::ShaderKeyword => self.parse_shader()?,
                _ => return Err(CompileError::unknown_token(&token)),
            }
        }

        Ok(CompiledShader {
            meta: self.meta,
            sources: self.sources,
        })
    }

    /// Parses `Name "<name>";`.
    fn parse_name(&mut self, keyword: &Token<'src>) -> CompileResult<()> {
        if self.meta.name.is_some() {
            return Err(CompileError::already_set("Name", keyword));
        }

        let name = self.expect(TokenKind::StringLiteral)?;
        self.expect(TokenKind::Semicolon)?;

        log::trace!("program name {:?}", name.text);
        self.meta.name = Some(name.text.to_owned());
        Ok(())
    }
}
