use super::scope::expect_kind;
use super::*;
use crate::compiler::meta::{Binding, UniformBuffer};

/// Reads a binding list as strides of `type name : slot ;`.
///
/// The slot is a symbol such as `MODEL_MATRIX` or a register number.
///
/// Tokens left over after the last full stride are a syntax error at the
/// first of them.
pub(super) fn parse_binding_list(section: &str, body: &[Token<'_>]) -> CompileResult<Vec<Binding>> {
    let mut strides = body.chunks_exact(5);
    let mut bindings = Vec::with_capacity(body.len() / 5);

    for stride in &mut strides {
        let (ty, name, colon, slot, semicolon) =
            (&stride[0], &stride[1], &stride[2], &stride[3], &stride[4]);
        expect_kind(TokenKind::Symbol, ty)?;
        expect_kind(TokenKind::Symbol, name)?;
        expect_kind(TokenKind::Colon, colon)?;
        if slot.kind != TokenKind::NumberLiteral {
            expect_kind(TokenKind::Symbol, slot)?;
        }
        expect_kind(TokenKind::Semicolon, semicolon)?;

        bindings.push(Binding {
            ty: ty.text.to_owned(),
            name: name.text.to_owned(),
            slot: slot.text.to_owned(),
        });
    }

    if let Some(first) = strides.remainder().first() {
        return Err(CompileError::invalid_syntax(section, first));
    }

    Ok(bindings)
}

impl Parser<'_> {
    /// Parses `Bindings { ... }` holding `Uniforms` and `Textures` sections.
    pub(super) fn parse_bindings(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::LeftBrace)?;

        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::RightBrace => return Ok(()),
                TokenKind::EndOfFile => return Err(CompileError::unterminated_scope(&token)),
                kind if kind.is_comment() => {}
                kind if kind.is_invalid() => return Err(CompileError::invalid_token(&token)),
                TokenKind::UniformsKeyword => self.parse_uniforms()?,
                TokenKind::TexturesKeyword => self.parse_textures()?,
                _ => return Err(CompileError::unknown_in_scope("Bindings", &token)),
            }
        }
    }

    /// Parses `Uniforms "<buffer>" { ... }` into a new uniform buffer.
    fn parse_uniforms(&mut self) -> CompileResult<()> {
        let name = self.expect(TokenKind::StringLiteral)?;
        self.expect(TokenKind::LeftBrace)?;

        let (body, _) = self.structured_scope()?;
        let bindings = parse_binding_list("Uniforms", &body)?;

        log::trace!("uniform buffer {:?} with {} bindings", name.text, bindings.len());
        self.meta.uniform_buffers.push(UniformBuffer {
            name: name.text.to_owned(),
            bindings,
        });
        Ok(())
    }

    /// Parses `Textures { ... }`, appending to the shared texture list.
    fn parse_textures(&mut self) -> CompileResult<()> {
        self.expect(TokenKind::LeftBrace)?;

        let (body, _) = self.structured_scope()?;
        let textures = parse_binding_list("Textures", &body)?;

        log::trace!("{} textures", textures.len());
        self.meta.textures.extend(textures);
        Ok(())
    }
}
