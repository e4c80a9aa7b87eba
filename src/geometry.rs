//! Static vertex data. Uploaded once per demo and never touched again.

/// Unit cube corners, three floats each. Front face first, then back.
pub const CUBE_POSITIONS: [f32; 24] = [
    -0.5, -0.5, 0.5, //
    0.5, -0.5, 0.5, //
    0.5, 0.5, 0.5, //
    -0.5, 0.5, 0.5, //
    -0.5, -0.5, -0.5, //
    -0.5, 0.5, -0.5, //
    0.5, 0.5, -0.5, //
    0.5, -0.5, -0.5, //
];

/// Two triangles per face.
pub const CUBE_INDICES: [u16; 36] = [
    0, 1, 2, 0, 2, 3, // front
    4, 5, 6, 4, 6, 7, // back
    3, 2, 6, 3, 6, 5, // top
    4, 7, 1, 4, 1, 0, // bottom
    4, 0, 3, 4, 3, 5, // left
    1, 7, 6, 1, 6, 2, // right
];

pub const CUBE_COMPONENTS: i32 = 3;
pub const CUBE_INDEX_COUNT: i32 = CUBE_INDICES.len() as i32;

/// Sandbox triangle in clip space, centred on the Y axis.
pub const TRIANGLE_POSITIONS: [f32; 6] = [0.0, 0.5, -0.5, -0.5, 0.5, -0.5];

pub const TRIANGLE_COMPONENTS: i32 = 2;
pub const TRIANGLE_VERTEX_COUNT: i32 = TRIANGLE_POSITIONS.len() as i32 / TRIANGLE_COMPONENTS;

