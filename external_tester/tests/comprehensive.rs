//! Comprehensive tests for the nsl_compiler public API.
//!
//! These tests drive the lexer and compiler the way a downstream shader
//! pipeline would: whole definitions in, metadata and stage sources out.

use external_tester::{block_body, LIT_SURFACE};
use nsl_compiler::{compile, CompileErrorKind, Compiler, Lexer, LexerState, TokenKind};

// =============================================================================
// Helper Functions
// =============================================================================

fn compiled(source: &str) -> Compiler {
    let mut compiler = Compiler::new(source);
    if let Err(err) = compiler.compile() {
        panic!("{}", compiler.format_error(&err, "test.nsl"));
    }
    compiler
}

fn pairs<T>(items: &[T], f: impl Fn(&T) -> (&str, &str, &str)) -> Vec<(&str, &str, &str)> {
    items.iter().map(f).collect()
}

// =============================================================================
// Full Programs
// =============================================================================

#[test]
fn lit_surface_metadata() {
    let compiler = compiled(LIT_SURFACE);

    assert_eq!(compiler.name(), Some("LitSurface"));

    let buffers = compiler.uniform_buffers();
    assert_eq!(buffers.len(), 2);
    assert_eq!(buffers[0].name, "Camera");
    assert_eq!(
        pairs(&buffers[0].bindings, |b| (b.ty.as_str(), b.name.as_str(), b.target.as_str())),
        vec![
            ("float4x4", "View", "VIEW_MATRIX"),
            ("float4x4", "Projection", "PROJECTION_MATRIX"),
        ]
    );
    assert_eq!(buffers[1].name, "Object");
    assert_eq!(
        pairs(&buffers[1].bindings, |b| (b.ty.as_str(), b.name.as_str(), b.target.as_str())),
        vec![("float4x4", "Model", "MODEL_MATRIX")]
    );

    assert_eq!(
        pairs(&compiler.textures(), |t| (t.ty.as_str(), t.name.as_str(), t.target.as_str())),
        vec![
            ("Texture2D", "Diffuse", "DIFFUSE_MAP"),
            ("Texture2D", "Normal", "NORMAL_MAP"),
        ]
    );

    assert_eq!(
        pairs(&compiler.inputs(), |i| (i.ty.as_str(), i.name.as_str(), i.semantic.as_str())),
        vec![
            ("float3", "Position", "POSITION"),
            ("float3", "Normal", "NORMAL"),
            ("float2", "TexCoord", "TEXCOORD"),
        ]
    );
    assert_eq!(
        pairs(&compiler.pixel_inputs(), |i| (i.ty.as_str(), i.name.as_str(), i.semantic.as_str())),
        vec![
            ("float4", "Position", "SV_POSITION"),
            ("float3", "Normal", "NORMAL"),
            ("float2", "TexCoord", "TEXCOORD"),
        ]
    );

    assert_eq!(compiler.vertex_entrypoint(), Some("VSMain"));
    assert_eq!(compiler.pixel_entrypoint(), Some("PSMain"));
}

#[test]
fn lit_surface_sources_are_verbatim() {
    let compiler = compiled(LIT_SURFACE);
    let sources = compiler.sources();

    assert_eq!(sources.shared.as_deref(), block_body(LIT_SURFACE, "Shared"));
    assert_eq!(sources.vertex.as_deref(), block_body(LIT_SURFACE, "Vertex"));
    assert_eq!(sources.fragment.as_deref(), block_body(LIT_SURFACE, "Fragment"));

    let vertex = sources.vertex.as_deref().unwrap();
    assert!(vertex.contains("float4(input.Position, 1.0f)"));
    assert!(vertex.starts_with("\n        PixelInput VSMain"));
}

#[test]
fn captured_source_round_trips() {
    let source = "Shader {\n\tVertex {\n\t\tint x = 1;  // keep\n\t}\n}\n";
    let compiler = compiled(source);
    let vertex = compiler.sources().vertex.as_deref().unwrap();

    let start = source.find("Vertex {").unwrap() + "Vertex {".len();
    let rebuilt = format!("{}{}{}", &source[..start], vertex, &source[start + vertex.len()..]);
    assert_eq!(rebuilt, source);
    assert_eq!(&source[start + vertex.len()..start + vertex.len() + 1], "}");
}

#[test]
fn lit_surface_serializes_to_json() {
    let output = compile(LIT_SURFACE).unwrap();
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["meta"]["name"], "LitSurface");
    assert_eq!(json["meta"]["uniform_buffers"][0]["name"], "Camera");
    assert_eq!(json["meta"]["uniform_buffers"][0]["bindings"][0]["type"], "float4x4");
    assert_eq!(json["meta"]["uniform_buffers"][0]["bindings"][0]["slot"], "VIEW_MATRIX");
    assert_eq!(json["meta"]["textures"][1]["name"], "Normal");
    assert_eq!(json["meta"]["fragment_inputs"][0]["slot"], "SV_POSITION");
    assert_eq!(json["meta"]["vertex_entrypoint"], "VSMain");
    assert!(json["sources"]["vertex"].as_str().unwrap().contains("VSMain"));
}

#[test]
fn free_compile_and_compiler_agree() {
    let mut compiler = Compiler::new(LIT_SURFACE);
    compiler.compile().unwrap();
    assert_eq!(compiler.into_output(), compile(LIT_SURFACE).unwrap());
}

// =============================================================================
// Documented Properties
// =============================================================================

#[test]
fn lexer_terminates_and_stays_at_eof() {
    let inputs = [
        "",
        LIT_SURFACE,
        "\"unterminated",
        "/* unterminated",
        "'",
        "a\u{1}b\u{7f}c",
        "héllo wörld",
        "12ab 0x1F __x",
        "\t\r\n ",
    ];

    for input in inputs {
        let mut lexer = Lexer::new(input);
        let mut steps = 0;
        while lexer.next_token().kind != TokenKind::EndOfFile {
            steps += 1;
            assert!(steps <= input.len() + 1, "lexer did not terminate on {:?}", input);
        }
        assert_eq!(lexer.state(), LexerState::EndOfFile);
        for _ in 0..3 {
            let token = lexer.next_token();
            assert_eq!(token.kind, TokenKind::EndOfFile);
            assert_eq!(token.index, input.len());
        }
    }
}

#[test]
fn lexer_indices_never_decrease() {
    let mut last = 0;
    for token in Lexer::new(LIT_SURFACE).tokens() {
        assert!(token.index >= last, "{} went backwards", token);
        if token.kind != TokenKind::StringLiteral {
            assert_eq!(&LIT_SURFACE[token.index..][..token.text.len()], token.text);
        }
        last = token.index;
    }
}

#[test]
fn empty_source_starts_at_eof() {
    let mut lexer = Lexer::new("");
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
    assert_eq!(Lexer::new("").tokens().count(), 0);
}

#[test]
fn name_only_program() {
    let compiler = compiled("Name \"Foo\";");
    assert_eq!(compiler.name(), Some("Foo"));
    assert_eq!(compiler.meta().uniform_buffers.len(), 0);
}

#[test]
fn second_name_is_rejected_at_its_keyword() {
    let source = "Name \"Foo\"; Name \"Bar\";";
    let mut compiler = Compiler::new(source);
    let err = compiler.compile().unwrap_err();

    assert!(err.message.contains("already set"));
    assert_eq!(err.kind, CompileErrorKind::AlreadySet);
    assert_eq!(err.index, source.rfind("Name").unwrap());
}

#[test]
fn vertex_block_text() {
    let compiler = compiled("Shader { Vertex { int x = 1; } }");
    assert_eq!(compiler.sources().vertex.as_deref(), Some(" int x = 1; "));
}

#[test]
fn unterminated_string_token() {
    let mut lexer = Lexer::new("\"abc");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::InvalidStringLiteral);
    assert_eq!(token.index, 0);
    assert_eq!(token.text, "\"abc");
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
}

#[test]
fn two_uniform_buffers_with_numeric_slots() {
    let compiler =
        compiled(r#"Bindings { Uniforms "A" { float x : 0; } Uniforms "B" { float y : 1; } }"#);
    let buffers = compiler.uniform_buffers();

    assert_eq!(buffers.len(), 2);
    assert_eq!(buffers[0].name, "A");
    assert_eq!(buffers[1].name, "B");
    assert_eq!(buffers[0].bindings.len(), 1);
    assert_eq!(buffers[1].bindings.len(), 1);
    assert_eq!(buffers[0].bindings[0].target, "0");
    assert_eq!(buffers[1].bindings[0].name, "y");
}

#[test]
fn row_column_counts_newlines() {
    let compiler = Compiler::new(LIT_SURFACE);
    assert_eq!(compiler.row_column(0), (1, 1));

    for (index, _) in LIT_SURFACE.match_indices("Uniforms") {
        let newlines = LIT_SURFACE[..index].matches('\n').count();
        assert_eq!(compiler.row_column(index).0, newlines + 1);
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

#[test]
fn error_report_points_at_offending_line() {
    let source = "Name \"Broken\";\nInput {\n    float3 Position : POSITION\n}\n";
    let mut compiler = Compiler::new(source);
    let err = compiler.compile().unwrap_err();

    assert_eq!(err.message, "Invalid syntax for 'Input'");
    assert_eq!(compiler.row_column(err.index), (3, 5));

    let report = compiler.format_error(&err, "broken.nsl");
    assert!(report.starts_with("error: Invalid syntax for 'Input'\n"));
    assert!(report.contains(" --> broken.nsl:3:5"));
    assert!(report.contains("3 | float3 Position : POSITION"));
    assert!(report.contains("help: declare each entry as `type name : slot;`"));
}

#[test]
fn first_error_wins() {
    let source = "Name 42; Bogus";
    let err = compile(source).unwrap_err();
    assert_eq!(err.message, "Expected token StringLiteral got: NumberLiteral");
    assert_eq!(err.index, 5);
}

#[test]
fn non_ascii_is_rejected_everywhere() {
    for source in [
        "Name \"Ünicode\";",
        "Bindings { Textures { Texture2D Ä : T; } }",
        "Shader { Fragment { // ©\n } }",
    ] {
        let err = compile(source).unwrap_err();
        assert!(
            matches!(
                err.kind,
                CompileErrorKind::InvalidToken | CompileErrorKind::UnexpectedToken
            ),
            "{:?} failed with {:?}",
            source,
            err
        );
    }
}
