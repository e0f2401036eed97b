use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::*;

/// Reserved words, matched case-sensitively against whole symbols.
static KEYWORDS: Lazy<FxHashMap<&'static str, TokenKind>> = Lazy::new(|| {
    [
        ("Name", TokenKind::NameKeyword),
        ("Bindings", TokenKind::BindingsKeyword),
        ("Uniforms", TokenKind::UniformsKeyword),
        ("Textures", TokenKind::TexturesKeyword),
        ("Input", TokenKind::InputKeyword),
        ("PixelInput", TokenKind::PixelInputKeyword),
        ("Shader", TokenKind::ShaderKeyword),
        ("Shared", TokenKind::SharedKeyword),
        ("Vertex", TokenKind::VertexKeyword),
        ("Fragment", TokenKind::FragmentKeyword),
        ("Generated", TokenKind::GeneratedKeyword),
        ("Entrypoint", TokenKind::EntrypointKeyword),
    ]
    .into_iter()
    .collect()
});

/// Looks up the keyword kind for a symbol, if it is one.
pub(super) fn lookup_keyword(symbol: &str) -> Option<TokenKind> {
    KEYWORDS.get(symbol).copied()
}

impl<'src> Lexer<'src> {
    /// Lexes a symbol and reclassifies it when it is a keyword.
    pub(super) fn lex_symbol(&mut self) -> Token<'src> {
        let start = self.pos;
        self.consume_while(|b| b.is_ascii_alphanumeric() || b == b'_');

        let text = &self.source[start..self.pos];
        let kind = lookup_keyword(text).unwrap_or(TokenKind::Symbol);
        Token::new(text, start, kind)
    }
}
