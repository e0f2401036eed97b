//! Compiler for the shader definition language.
//!
//! This module provides the whole front end:
//! - Lexer: Splits the source into borrowed tokens
//! - Parser: Walks the top-level grammar and captures raw stage sources
//! - Compiler: Owns the source and exposes the extracted metadata

pub mod error_fmt;
pub mod errors;
pub mod lexer;
pub mod meta;
mod parser;
pub mod syntax;

pub use error_fmt::{ErrorFormat, SourceLocation};
pub use errors::{CompileError, CompileErrorKind, CompileResult};
pub use lexer::{Lexer, LexerState, Token, Tokens};
pub use meta::{
    Binding, CompiledShader, Meta, Sources, StringBinding, StringInput, StringUniformBuffer,
    UniformBuffer,
};
pub use syntax::TokenKind;

use parser::Parser;

/// Compiles a shader definition into its metadata and stage sources.
pub fn compile(source: &str) -> CompileResult<CompiledShader> {
    Parser::new(source).parse()
}

/// A shader definition and the results of compiling it.
///
/// The compiler owns its source for its whole lifetime. Results are only
/// available after a successful [`Compiler::compile`]; a failed compile
/// leaves them empty.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    source: String,
    meta: Meta,
    sources: Sources,
}

impl Compiler {
    /// Creates a compiler for the given source.
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            meta: Meta::default(),
            sources: Sources::default(),
        }
    }

    /// Compiles the source, stopping at the first error.
    pub fn compile(&mut self) -> CompileResult<()> {
        self.meta = Meta::default();
        self.sources = Sources::default();

        #[cfg(debug_assertions)]
        if std::env::var("NSL_DEBUG_TOKENS").is_ok() {
            for token in Lexer::new(&self.source).tokens() {
                log::debug!("{}", token);
            }
        }

        let output = Parser::new(&self.source).parse()?;

        log::debug!(
            "compiled {:?}: {} uniform buffers, {} textures, {} inputs, {} pixel inputs",
            output.meta.name.as_deref().unwrap_or("<unnamed>"),
            output.meta.uniform_buffers.len(),
            output.meta.textures.len(),
            output.meta.inputs.len(),
            output.meta.fragment_inputs.len(),
        );

        self.meta = output.meta;
        self.sources = output.sources;
        Ok(())
    }

    /// The source being compiled.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Iterates over the tokens of the source, excluding the final `EndOfFile`.
    pub fn tokens(&self) -> Tokens<'_> {
        Lexer::new(&self.source).tokens()
    }

    pub fn meta(&self) -> &Meta {
        &self.meta
    }

    pub fn sources(&self) -> &Sources {
        &self.sources
    }

    /// The program name, if declared.
    pub fn name(&self) -> Option<&str> {
        self.meta.name.as_deref()
    }

    /// Uniform buffers in declaration order.
    pub fn uniform_buffers(&self) -> Vec<StringUniformBuffer> {
        self.meta.uniform_buffers.iter().map(Into::into).collect()
    }

    /// Textures from every `Textures` section, in declaration order.
    pub fn textures(&self) -> Vec<StringBinding> {
        self.meta.textures.iter().map(Into::into).collect()
    }

    /// Vertex inputs in declaration order.
    pub fn inputs(&self) -> Vec<StringInput> {
        self.meta.inputs.iter().map(Into::into).collect()
    }

    /// Pixel inputs in declaration order.
    pub fn pixel_inputs(&self) -> Vec<StringInput> {
        self.meta.fragment_inputs.iter().map(Into::into).collect()
    }

    pub fn vertex_entrypoint(&self) -> Option<&str> {
        self.meta.vertex_entrypoint.as_deref()
    }

    pub fn pixel_entrypoint(&self) -> Option<&str> {
        self.meta.fragment_entrypoint.as_deref()
    }

    /// Converts a byte offset into a 1-based `(row, column)` pair.
    pub fn row_column(&self, index: usize) -> (usize, usize) {
        let location = SourceLocation::from_offset(&self.source, index);
        (location.row, location.column)
    }

    /// Renders an error against this compiler's source.
    pub fn format_error(&self, error: &CompileError, filename: &str) -> String {
        let mut format = ErrorFormat::new(&error.message, &self.source, error.index)
            .filename(filename)
            .annotation(error.kind.description().to_string());
        if let Some(help) = error.kind.suggestion() {
            format = format.help(help);
        }
        format.format()
    }

    /// Consumes the compiler, returning the compiled metadata and sources.
    pub fn into_output(self) -> CompiledShader {
        CompiledShader {
            meta: self.meta,
            sources: self.sources,
        }
    }
}
