use super::bindings::parse_binding_list;
use super::*;

impl<'src> Parser<'src> {
    /// Parses `Input { ... }` or `PixelInput { ... }`.
    ///
    /// Each of the two sections may appear once.
    pub(super) fn parse_inputs(&mut self, keyword: &Token<'src>) -> CompileResult<()> {
        let pixel = keyword.kind == TokenKind::PixelInputKeyword;
        let section = if pixel { "PixelInput" } else { "Input" };

        let seen = if pixel {
            &mut self.seen_pixel_inputs
        } else {
            &mut self.seen_inputs
        };
        if std::mem::replace(seen, true) {
            return Err(CompileError::already_set(section, keyword));
        }

        self.expect(TokenKind::LeftBrace)?;
        let (body, _) = self.structured_scope()?;
        let inputs = parse_binding_list(section, &body)?;

        log::trace!("{} section with {} entries", section, inputs.len());
        if pixel {
            self.meta.fragment_inputs = inputs;
        } else {
            self.meta.inputs = inputs;
        }
        Ok(())
    }
}
