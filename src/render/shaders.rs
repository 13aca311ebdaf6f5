/// Vertex shader shared by every draw: position only, three matrices.
///
/// Matrices arrive through `uniformMatrix4fv` without transposing, so in
/// GLSL they read as column-vector matrices and compose right to left.
pub const FLAT_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;

void main() {
    gl_Position = u_projection * u_view * u_model * vec4(a_position, 1.0);
}
"#;

/// Fragment shader: one solid color per draw call
pub const FLAT_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform vec4 u_color;

out vec4 fragColor;

void main() {
    fragColor = u_color;
}
"#;

/// RGBA colors of the scene parts
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const CURVE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const TANGENT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const NORMAL: [f32; 4] = [0.0, 0.6, 0.0, 1.0];
    pub const BINORMAL: [f32; 4] = [0.8, 0.0, 0.8, 1.0];
    pub const OBJECT: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
