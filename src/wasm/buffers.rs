use js_sys::{Float32Array, Object, Uint16Array};
use web_sys::{WebGl2RenderingContext as GL, WebGlBuffer};

use crate::error::DemoError;
use crate::geometry::{CUBE_INDICES, CUBE_POSITIONS, TRIANGLE_POSITIONS};

/// A write-once GPU buffer, deleted on drop.
pub struct StaticBuffer {
    gl: GL,
    buffer: WebGlBuffer,
    target: u32,
}

impl StaticBuffer {
    fn upload(gl: &GL, target: u32, data: &Object) -> Result<Self, DemoError> {
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| DemoError::Js("create_buffer returned null".into()))?;
        gl.bind_buffer(target, Some(&buffer));
        gl.buffer_data_with_array_buffer_view(target, data, GL::STATIC_DRAW);
        Ok(Self {
            gl: gl.clone(),
            buffer,
            target,
        })
    }

    pub fn bind(&self) {
        self.gl.bind_buffer(self.target, Some(&self.buffer));
    }
}

impl Drop for StaticBuffer {
    fn drop(&mut self) {
        self.gl.delete_buffer(Some(&self.buffer));
    }
}

pub struct CubeBuffers {
    pub vertices: StaticBuffer,
    pub indices: StaticBuffer,
}

impl CubeBuffers {
    pub fn upload(gl: &GL) -> Result<Self, DemoError> {
        Ok(Self {
            vertices: StaticBuffer::upload(
                gl,
                GL::ARRAY_BUFFER,
                &Float32Array::from(&CUBE_POSITIONS[..]),
            )?,
            indices: StaticBuffer::upload(
                gl,
                GL::ELEMENT_ARRAY_BUFFER,
                &Uint16Array::from(&CUBE_INDICES[..]),
            )?,
        })
    }
}

pub fn upload_triangle(gl: &GL) -> Result<StaticBuffer, DemoError> {
    StaticBuffer::upload(gl, GL::ARRAY_BUFFER, &Float32Array::from(&TRIANGLE_POSITIONS[..]))
}
