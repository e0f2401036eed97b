//! Front end for a small shader definition language.
//!
//! A shader definition names a program, declares its resource bindings and
//! vertex/pixel inputs, and embeds raw stage source blocks with their entry
//! points:
//!
//! ```text
//! Name "Unlit";
//! Bindings {
//!     Uniforms "Object" { float4x4 World : WORLD_MATRIX; }
//!     Textures { Texture2D Albedo : ALBEDO_MAP; }
//! }
//! Input { float3 Position : POSITION; }
//! Shader {
//!     Vertex { ... }
//!     Fragment { ... }
//!     Entrypoint { Vertex "VSMain"; Fragment "PSMain"; }
//! }
//! ```
//!
//! [`Compiler`] extracts the declarations into a [`Meta`] record and copies the
//! stage blocks verbatim into [`Sources`]. The embedded shader code itself is
//! not interpreted. Compilation stops at the first error, reported as a
//! [`CompileError`] with the byte offset it refers to.
//!
//! ```
//! use nsl_compiler::Compiler;
//!
//! let mut compiler = Compiler::new(r#"Name "Unlit"; Shader { Vertex { return 0; } }"#);
//! compiler.compile().unwrap();
//! assert_eq!(compiler.name(), Some("Unlit"));
//! assert_eq!(compiler.sources().vertex.as_deref(), Some(" return 0; "));
//! ```

pub mod compiler;

pub use compiler::{
    compile, Binding, CompileError, CompileErrorKind, CompileResult, CompiledShader, Compiler,
    ErrorFormat, Lexer, LexerState, Meta, SourceLocation, Sources, StringBinding, StringInput,
    StringUniformBuffer, Token, TokenKind, Tokens, UniformBuffer,
};
