// GLSL ES 1.00 so the same sources would run on a WebGL1 context too.

pub const CAT_VERTEX_SHADER: &str = r#"
attribute vec3 aVertexPosition;
uniform mat4 uMvpMatrix;
void main(void) {
    gl_Position = uMvpMatrix * vec4(aVertexPosition, 1.0);
}
"#;

pub const CAT_FRAGMENT_SHADER: &str = r#"
precision mediump float;
uniform vec4 uColor;
void main(void) {
    gl_FragColor = uColor;
}
"#;

pub const POSITION_ATTRIBUTE: &str = "aVertexPosition";
pub const MVP_UNIFORM: &str = "uMvpMatrix";
pub const COLOR_UNIFORM: &str = "uColor";
pub const TRANSFORM_UNIFORM: &str = "uTransformMatrix";
