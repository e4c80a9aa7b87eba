use web_sys::{WebGl2RenderingContext as GL, WebGlProgram, WebGlShader, WebGlUniformLocation};

use crate::error::ShaderError;
use crate::program::ShaderStage;

/// A linked program. Deleted from the GPU when dropped.
pub struct Program {
    gl: GL,
    program: WebGlProgram,
}

impl Program {
    pub fn raw(&self) -> &WebGlProgram {
        &self.program
    }

    /// `None` when `name` is not an active attribute of the linked program.
    pub fn attrib_location(&self, name: &str) -> Option<u32> {
        u32::try_from(self.gl.get_attrib_location(&self.program, name)).ok()
    }

    pub fn uniform_location(&self, name: &str) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(&self.program, name)
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        log::trace!("deleting shader program");
        self.gl.delete_program(Some(&self.program));
    }
}

fn stage_enum(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => GL::VERTEX_SHADER,
        ShaderStage::Fragment => GL::FRAGMENT_SHADER,
    }
}

fn compile_stage(gl: &GL, stage: ShaderStage, source: &str) -> Result<WebGlShader, ShaderError> {
    let shader = gl
        .create_shader(stage_enum(stage))
        .ok_or(ShaderError::CreateShader(stage))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);

    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        return Ok(shader);
    }

    let log = gl
        .get_shader_info_log(&shader)
        .unwrap_or_else(|| "unknown error".to_string());
    gl.delete_shader(Some(&shader));
    Err(ShaderError::Compile { stage, log })
}

/// Compile both stages and link them. Intermediate objects are cleaned up on every path.
pub fn compile_program(
    gl: &GL,
    vertex_src: &str,
    fragment_src: &str,
) -> Result<Program, ShaderError> {
    let vertex = compile_stage(gl, ShaderStage::Vertex, vertex_src)?;
    let fragment = match compile_stage(gl, ShaderStage::Fragment, fragment_src) {
        Ok(shader) => shader,
        Err(err) => {
            gl.delete_shader(Some(&vertex));
            return Err(err);
        }
    };

    let program = match gl.create_program() {
        Some(program) => program,
        None => {
            gl.delete_shader(Some(&vertex));
            gl.delete_shader(Some(&fragment));
            return Err(ShaderError::CreateProgram);
        }
    };

    gl.attach_shader(&program, &vertex);
    gl.attach_shader(&program, &fragment);
    gl.link_program(&program);

    // The linked program keeps what it needs; the stage objects can go either way.
    gl.detach_shader(&program, &vertex);
    gl.detach_shader(&program, &fragment);
    gl.delete_shader(Some(&vertex));
    gl.delete_shader(Some(&fragment));

    let linked = gl
        .get_program_parameter(&program, GL::LINK_STATUS)
        .as_bool()
        .unwrap_or(false);
    if !linked {
        let log = gl
            .get_program_info_log(&program)
            .unwrap_or_else(|| "unknown error".to_string());
        gl.delete_program(Some(&program));
        return Err(ShaderError::Link { log });
    }

    Ok(Program {
        gl: gl.clone(),
        program,
    })
}
