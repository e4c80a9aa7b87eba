use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlUniformLocation};

use super::buffers::CubeBuffers;
use super::controls::{bind_param, optional, require};
use super::render::{self, fit_canvas, LoopHandle};
use super::shader::{compile_program, Program};
use crate::config::CatConfig;
use crate::error::{DemoError, ShaderError};
use crate::geometry::{CUBE_COMPONENTS, CUBE_INDEX_COUNT};
use crate::params::CatParams;
use crate::program::ProgramSlot;
use crate::render_loop::{RotationAccumulator, Scene};
use crate::shaders::{
    CAT_FRAGMENT_SHADER, CAT_VERTEX_SHADER, COLOR_UNIFORM, MVP_UNIFORM, POSITION_ATTRIBUTE,
};
use crate::transform::cat_mvps;

const CLEAR_COLOR: [f32; 4] = [0.9, 0.9, 0.9, 1.0];

/// The cat's program with its locations resolved up front.
pub struct CatProgram {
    program: Program,
    position: u32,
    mvp: WebGlUniformLocation,
    color: WebGlUniformLocation,
}

impl CatProgram {
    pub fn compile(gl: &GL) -> Result<Self, ShaderError> {
        let program = compile_program(gl, CAT_VERTEX_SHADER, CAT_FRAGMENT_SHADER)?;
        let missing = |name: &str| ShaderError::Link {
            log: format!("{name} is not active in the linked program"),
        };
        Ok(Self {
            position: program
                .attrib_location(POSITION_ATTRIBUTE)
                .ok_or_else(|| missing(POSITION_ATTRIBUTE))?,
            mvp: program
                .uniform_location(MVP_UNIFORM)
                .ok_or_else(|| missing(MVP_UNIFORM))?,
            color: program
                .uniform_location(COLOR_UNIFORM)
                .ok_or_else(|| missing(COLOR_UNIFORM))?,
            program,
        })
    }
}

pub struct CatScene {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: ProgramSlot<CatProgram>,
    buffers: CubeBuffers,
    params: Rc<RefCell<CatParams>>,
    spin: RotationAccumulator,
}

impl CatScene {
    fn draw(&self, program: &CatProgram, params: &CatParams, aspect: f32) {
        let gl = &self.gl;

        gl.use_program(Some(program.program.raw()));

        self.buffers.vertices.bind();
        gl.vertex_attrib_pointer_with_i32(
            program.position,
            CUBE_COMPONENTS,
            GL::FLOAT,
            false,
            0,
            0,
        );
        gl.enable_vertex_attrib_array(program.position);
        self.buffers.indices.bind();

        gl.uniform4fv_with_f32_array(Some(&program.color), &params.color);
        for mvp in cat_mvps(aspect, params.camera_distance, self.spin.angle()) {
            gl.uniform_matrix4fv_with_f32_array(Some(&program.mvp), false, &mvp.to_cols_array());
            gl.draw_elements_with_i32(GL::TRIANGLES, CUBE_INDEX_COUNT, GL::UNSIGNED_SHORT, 0);
        }
    }
}

impl Scene for CatScene {
    fn name(&self) -> &'static str {
        "cat demo"
    }

    fn render_frame(&mut self, delta_seconds: f32) {
        let params = *self.params.borrow();
        let aspect = fit_canvas(&self.canvas);
        let gl = &self.gl;

        gl.viewport(0, 0, self.canvas.width() as i32, self.canvas.height() as i32);
        let [r, g, b, a] = CLEAR_COLOR;
        gl.clear_color(r, g, b, a);
        gl.clear_depth(1.0);
        gl.enable(GL::DEPTH_TEST);
        gl.depth_func(GL::LEQUAL);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);

        let Some(program) = self.program.current() else {
            return;
        };
        self.draw(&program, &params, aspect);
        self.spin.advance(delta_seconds, params.rotation_speed);
    }
}

/// Bring up the cat demo. Sliders and the colour picker are optional.
pub fn start(document: &Document, config: &CatConfig) -> Result<LoopHandle, DemoError> {
    let canvas: HtmlCanvasElement = require(document, config.canvas_id)?;
    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or(DemoError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| DemoError::ContextUnavailable)?;

    let params = Rc::new(RefCell::new(config.initial));
    let listeners = [
        bind_param(
            optional(document, config.rotation_slider_id),
            &params,
            "rotation speed",
            CatParams::set_rotation_speed,
        )?,
        bind_param(
            optional(document, config.zoom_slider_id),
            &params,
            "camera distance",
            CatParams::set_camera_distance,
        )?,
        bind_param(
            optional(document, config.color_picker_id),
            &params,
            "cat colour",
            CatParams::set_color,
        )?,
    ];

    // A failed compile leaves the slot empty; the loop then just clears each frame.
    let mut program = ProgramSlot::empty();
    if let Err(err) = program.replace_with(|| CatProgram::compile(&gl)) {
        log::error!("cat demo: {err}");
    }
    if !program.is_ready() {
        log::warn!("cat demo: no usable program, frames will only clear");
    }

    let buffers = CubeBuffers::upload(&gl)?;
    let scene = CatScene {
        gl,
        canvas,
        program,
        buffers,
        params,
        spin: RotationAccumulator::new(),
    };
    log::info!("cat demo running");
    Ok(render::start(scene, listeners.into_iter().flatten().collect())?)
}
