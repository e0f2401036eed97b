//! Black-box tests for `nsl_compiler`, built only against its public API.
//!
//! The fixtures here are full shader definitions shared by the tests under
//! `tests/`.

/// A complete lit-surface definition using every section of the language.
pub const LIT_SURFACE: &str = r#"
// Textured surface lit by one directional light.
Name "LitSurface";

Bindings {
    Uniforms "Camera" {
        float4x4 View : VIEW_MATRIX;
        float4x4 Projection : PROJECTION_MATRIX;
    }

    Uniforms "Object" {
        float4x4 Model : MODEL_MATRIX;
    }

    Textures {
        Texture2D Diffuse : DIFFUSE_MAP;
        Texture2D Normal : NORMAL_MAP;
    }
}

Input {
    float3 Position : POSITION;
    float3 Normal : NORMAL;
    float2 TexCoord : TEXCOORD;
}

PixelInput {
    float4 Position : SV_POSITION;
    float3 Normal : NORMAL;
    float2 TexCoord : TEXCOORD;
}

Shader {
    Shared {
        Texture2D Diffuse : register(t0);
        Texture2D Normal : register(t1);
        SamplerState Sampler : register(s0);

        struct PixelInput {
            float4 Position : SV_POSITION;
            float3 Normal : NORMAL;
            float2 TexCoord : TEXCOORD;
        };
    }

    Vertex {
        PixelInput VSMain(VertexInput input) {
            PixelInput output;
            output.Position = mul(Model, float4(input.Position, 1.0f));
            output.Position = mul(View, output.Position);
            output.Position = mul(Projection, output.Position);
            output.Normal = input.Normal;
            output.TexCoord = input.TexCoord;
            return output;
        }
    }

    Fragment {
        float4 PSMain(PixelInput input) : SV_TARGET {
            float4 diffuseColor = Diffuse.Sample(Sampler, input.TexCoord);
            float4 normalColor = Normal.Sample(Sampler, input.TexCoord);
            return diffuseColor * normalColor;
        }
    }

    Entrypoint {
        Vertex "VSMain";
        Fragment "PSMain";
    }
}
"#;

/// Returns the verbatim text between the braces following `keyword`.
///
/// Used to check captured stage sources against the fixture text. Assumes
/// the block contains no braces inside comments or strings.
pub fn block_body<'a>(source: &'a str, keyword: &str) -> Option<&'a str> {
    let start = source.find(keyword)? + keyword.len();
    let open = start + source[start..].find('{')?;
    let mut depth = 0usize;
    for (offset, ch) in source[open + 1..].char_indices() {
        match ch {
            '{' => depth += 1,
            '}' if depth == 0 => return Some(&source[open + 1..open + 1 + offset]),
            '}' => depth -= 1,
            _ => {}
        }
    }
    None
}
