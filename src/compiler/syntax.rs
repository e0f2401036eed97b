//! Token kinds for the shader-definition language.
//!
//! The set is closed: every token the lexer produces carries exactly one of
//! these kinds. Punctuation variants follow ASCII order.

use std::fmt;

/// All token kinds in the shader-definition language.
///
/// Kinds fall into four groups:
/// - Special: `EndOfFile`, `Invalid`
/// - Keywords: `NameKeyword`, `BindingsKeyword`, etc.
/// - Punctuation: `Hash`, `LeftBrace`, `LessThanLessThanEqual`, etc.
/// - Literals and comments: `StringLiteral`, `NumberLiteral`, `Comment`, etc.
///
/// Each literal and comment group has an `Invalid*` counterpart for malformed
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum TokenKind {
    // ============================================
    // Special
    // ============================================
    /// End of the source buffer. Returned forever once reached.
    EndOfFile = 0,
    /// A byte that is neither printable ASCII nor whitespace.
    Invalid,

    // ============================================
    // Keywords
    // ============================================
    /// `Name`
    NameKeyword,
    /// `Bindings`
    BindingsKeyword,
    /// `Uniforms`
    UniformsKeyword,
    /// `Textures`
    TexturesKeyword,
    /// `Input`
    InputKeyword,
    /// `PixelInput`
    PixelInputKeyword,
    /// `Shader`
    ShaderKeyword,
    /// `Shared`
    SharedKeyword,
    /// `Vertex`
    VertexKeyword,
    /// `Fragment`
    FragmentKeyword,
    /// `Generated`
    GeneratedKeyword,
    /// `Entrypoint`
    EntrypointKeyword,

    // ============================================
    // Punctuation, literals and comments (ASCII order)
    // ============================================
    /// `!`
    ExclamationMark,
    /// `!=`
    ExclamationMarkEqual,
    /// `"..."`
    StringLiteral,
    /// `"...` cut short by a newline or the end of input
    InvalidStringLiteral,
    /// `#`
    Hash,
    /// `$`
    Dollar,
    /// `%`
    Percent,
    /// `&`
    Ampersand,
    /// `'` followed by whitespace
    Apostrophe,
    /// `'` followed by one non-whitespace character
    CharacterLiteral,
    /// `(`
    LeftParenthesis,
    /// `)`
    RightParenthesis,
    /// `*`
    Asterisk,
    /// `+`
    Plus,
    /// `,`
    Comma,
    /// `-`
    Minus,
    /// `.`
    Period,
    /// `/`
    Slash,
    /// `// ...`
    Comment,
    /// `/* ... */`
    BlockComment,
    /// `/* ...` without a closing `*/`
    InvalidComment,
    /// `123`
    NumberLiteral,
    /// Reserved; never produced by the lexer.
    HexNumberLiteral,
    /// Reserved; never produced by the lexer.
    BinaryNumberLiteral,
    /// Reserved; never produced by the lexer.
    OctalNumberLiteral,
    /// Digits immediately followed by a letter, e.g. `12ab`
    InvalidNumberLiteral,
    /// `:`
    Colon,
    /// `::`
    ColonColon,
    /// `;`
    Semicolon,
    /// `<`
    LessThan,
    /// `<=`
    LessThanEqual,
    /// `<<`
    LessThanLessThan,
    /// `<<=`
    LessThanLessThanEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    GreaterThan,
    /// `>=`
    GreaterThanEqual,
    /// `>>`
    GreaterThanGreaterThan,
    /// `>>=`
    GreaterThanGreaterThanEqual,
    /// `?`
    QuestionMark,
    /// `@`
    AtSign,
    /// Identifier that is not a keyword
    Symbol,
    /// `[`
    LeftBracket,
    /// `\`
    Backslash,
    /// `]`
    RightBracket,
    /// `^`
    Caret,
    /// `_`
    Underscore,
    /// `` ` ``
    Backtick,
    /// `{`
    LeftBrace,
    /// `|`
    VerticalBar,
    /// `}`
    RightBrace,
    /// `~`
    Tilde,
}

impl TokenKind {
    /// Returns the diagnostic name of this kind, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::EndOfFile => "EndOfFile",
            Self::Invalid => "Invalid",
            Self::NameKeyword => "NameKeyword",
            Self::BindingsKeyword => "BindingsKeyword",
            Self::UniformsKeyword => "UniformsKeyword",
            Self::TexturesKeyword => "TexturesKeyword",
            Self::InputKeyword => "InputKeyword",
            Self::PixelInputKeyword => "PixelInputKeyword",
            Self::ShaderKeyword => "ShaderKeyword",
            Self::SharedKeyword => "SharedKeyword",
            Self::VertexKeyword => "VertexKeyword",
            Self::FragmentKeyword => "FragmentKeyword",
            Self::GeneratedKeyword => "GeneratedKeyword",
            Self::EntrypointKeyword => "EntrypointKeyword",
            Self::ExclamationMark => "ExclamationMark",
            Self::ExclamationMarkEqual => "ExclamationMarkEqual",
            Self::StringLiteral => "StringLiteral",
            Self::InvalidStringLiteral => "InvalidStringLiteral",
            Self::Hash => "Hash",
            Self::Dollar => "Dollar",
            Self::Percent => "Percent",
            Self::Ampersand => "Ampersand",
            Self::Apostrophe => "Apostrophe",
            Self::CharacterLiteral => "CharacterLiteral",
            Self::LeftParenthesis => "LeftParenthesis",
            Self::RightParenthesis => "RightParenthesis",
            Self::Asterisk => "Asterisk",
            Self::Plus => "Plus",
            Self::Comma => "Comma",
            Self::Minus => "Minus",
            Self::Period => "Period",
            Self::Slash => "Slash",
            Self::Comment => "Comment",
            Self::BlockComment => "BlockComment",
            Self::InvalidComment => "InvalidComment",
            Self::NumberLiteral => "NumberLiteral",
            Self::HexNumberLiteral => "HexNumberLiteral",
            Self::BinaryNumberLiteral => "BinaryNumberLiteral",
            Self::OctalNumberLiteral => "OctalNumberLiteral",
            Self::InvalidNumberLiteral => "InvalidNumberLiteral",
            Self::Colon => "Colon",
            Self::ColonColon => "ColonColon",
            Self::Semicolon => "Semicolon",
            Self::LessThan => "LessThan",
            Self::LessThanEqual => "LessThanEqual",
            Self::LessThanLessThan => "LessThanLessThan",
            Self::LessThanLessThanEqual => "LessThanLessThanEqual",
            Self::Equal => "Equal",
            Self::EqualEqual => "EqualEqual",
            Self::GreaterThan => "GreaterThan",
            Self::GreaterThanEqual => "GreaterThanEqual",
            Self::GreaterThanGreaterThan => "GreaterThanGreaterThan",
            Self::GreaterThanGreaterThanEqual => "GreaterThanGreaterThanEqual",
            Self::QuestionMark => "QuestionMark",
            Self::AtSign => "AtSign",
            Self::Symbol => "Symbol",
            Self::LeftBracket => "LeftBracket",
            Self::Backslash => "Backslash",
            Self::RightBracket => "RightBracket",
            Self::Caret => "Caret",
            Self::Underscore => "Underscore",
            Self::Backtick => "Backtick",
            Self::LeftBrace => "LeftBrace",
            Self::VerticalBar => "VerticalBar",
            Self::RightBrace => "RightBrace",
            Self::Tilde => "Tilde",
        }
    }

    /// Returns true for the kinds that signal malformed input.
    pub fn is_invalid(self) -> bool {
        matches!(
            self,
            Self::Invalid
                | Self::InvalidStringLiteral
                | Self::InvalidComment
                | Self::InvalidNumberLiteral
        )
    }

    /// Returns true for well-formed line and block comments.
    pub fn is_comment(self) -> bool {
        matches!(self, Self::Comment | Self::BlockComment)
    }

    /// Returns true for the twelve reserved words.
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::NameKeyword
                | Self::BindingsKeyword
                | Self::UniformsKeyword
                | Self::TexturesKeyword
                | Self::InputKeyword
                | Self::PixelInputKeyword
                | Self::ShaderKeyword
                | Self::SharedKeyword
                | Self::VertexKeyword
                | Self::FragmentKeyword
                | Self::GeneratedKeyword
                | Self::EntrypointKeyword
        )
    }

    /// Maps a single punctuation byte to its kind.
    ///
    /// Covers every printable ASCII punctuation character; compound operators
    /// are formed by the lexer on top of this.
    pub(crate) fn from_punctuation(byte: u8) -> Option<Self> {
        let kind = match byte {
            b'!' => Self::ExclamationMark,
            b'#' => Self::Hash,
            b'$' => Self::Dollar,
            b'%' => Self::Percent,
            b'&' => Self::Ampersand,
            b'\'' => Self::Apostrophe,
            b'(' => Self::LeftParenthesis,
            b')' => Self::RightParenthesis,
            b'*' => Self::Asterisk,
            b'+' => Self::Plus,
            b',' => Self::Comma,
            b'-' => Self::Minus,
            b'.' => Self::Period,
            b'/' => Self::Slash,
            b':' => Self::Colon,
            b';' => Self::Semicolon,
            b'<' => Self::LessThan,
            b'=' => Self::Equal,
            b'>' => Self::GreaterThan,
            b'?' => Self::QuestionMark,
            b'@' => Self::AtSign,
            b'[' => Self::LeftBracket,
            b'\\' => Self::Backslash,
            b']' => Self::RightBracket,
            b'^' => Self::Caret,
            b'_' => Self::Underscore,
            b'`' => Self::Backtick,
            b'{' => Self::LeftBrace,
            b'|' => Self::VerticalBar,
            b'}' => Self::RightBrace,
            b'~' => Self::Tilde,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
