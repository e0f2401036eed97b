//! Compiler output: program metadata and raw stage sources.

use serde::Serialize;

/// A declared `(type, name, slot)` triple.
///
/// Used for uniforms, textures and vertex/pixel inputs alike; nothing about
/// the triple is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Binding {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    pub slot: String,
}

/// A named uniform buffer and the bindings declared inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UniformBuffer {
    pub name: String,
    pub bindings: Vec<Binding>,
}

/// Metadata accumulated while compiling a shader definition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Meta {
    /// Program name, set by the single `Name` declaration.
    pub name: Option<String>,
    /// One entry per `Uniforms` section, in declaration order.
    pub uniform_buffers: Vec<UniformBuffer>,
    /// Entries of every `Textures` section, in declaration order.
    pub textures: Vec<Binding>,
    /// Vertex inputs from the `Input` section.
    pub inputs: Vec<Binding>,
    /// Fragment inputs from the `PixelInput` section.
    pub fragment_inputs: Vec<Binding>,
    pub vertex_entrypoint: Option<String>,
    pub fragment_entrypoint: Option<String>,
}

/// Raw stage sources, copied verbatim from between their braces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Sources {
    pub shared: Option<String>,
    pub vertex: Option<String>,
    pub fragment: Option<String>,
}

/// The complete result of a successful compile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompiledShader {
    pub meta: Meta,
    pub sources: Sources,
}

/// A resource binding in the string form handed to downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringBinding {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    /// The value passed to the shader, e.g. `MODEL_MATRIX`.
    pub target: String,
}

impl From<&Binding> for StringBinding {
    fn from(binding: &Binding) -> Self {
        Self {
            ty: binding.ty.clone(),
            name: binding.name.clone(),
            target: binding.slot.clone(),
        }
    }
}

/// A vertex or pixel input in string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringInput {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
    /// The input semantic, e.g. `POSITION`.
    pub semantic: String,
}

impl From<&Binding> for StringInput {
    fn from(binding: &Binding) -> Self {
        Self {
            ty: binding.ty.clone(),
            name: binding.name.clone(),
            semantic: binding.slot.clone(),
        }
    }
}

/// A uniform buffer in string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringUniformBuffer {
    pub name: String,
    pub bindings: Vec<StringBinding>,
}

impl From<&UniformBuffer> for StringUniformBuffer {
    fn from(buffer: &UniformBuffer) -> Self {
        Self {
            name: buffer.name.clone(),
            bindings: buffer.bindings.iter().map(StringBinding::from).collect(),
        }
    }
}
