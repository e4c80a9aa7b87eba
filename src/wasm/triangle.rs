//! Shader sandbox: one triangle, user-editable GLSL.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlInputElement, HtmlTextAreaElement,
    WebGl2RenderingContext as GL, WebGlUniformLocation,
};

use super::buffers::{upload_triangle, StaticBuffer};
use super::controls::{alert, bind_param, on_click, optional, require, Listener};
use super::render::{self, fit_canvas, LoopHandle};
use super::shader::{compile_program, Program};
use crate::config::TriangleConfig;
use crate::error::{DemoError, ShaderError};
use crate::geometry::{TRIANGLE_COMPONENTS, TRIANGLE_VERTEX_COUNT};
use crate::params::TriangleParams;
use crate::program::{EditorBaseline, ProgramSlot, ShaderSources};
use crate::render_loop::{RotationAccumulator, Scene};
use crate::shaders::{POSITION_ATTRIBUTE, TRANSFORM_UNIFORM};
use crate::transform::triangle_transform;

/// User programs may leave out either input; drawing just goes without it.
pub struct TriangleProgram {
    program: Program,
    position: Option<u32>,
    transform: Option<WebGlUniformLocation>,
}

impl TriangleProgram {
    pub fn compile(gl: &GL, sources: &ShaderSources) -> Result<Self, ShaderError> {
        let program = compile_program(gl, &sources.vertex, &sources.fragment)?;
        Ok(Self {
            position: program.attrib_location(POSITION_ATTRIBUTE),
            transform: program.uniform_location(TRANSFORM_UNIFORM),
            program,
        })
    }
}

pub type SharedSlot = Rc<RefCell<ProgramSlot<TriangleProgram>>>;

pub struct TriangleScene {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: SharedSlot,
    positions: StaticBuffer,
    params: Rc<RefCell<TriangleParams>>,
    spin: RotationAccumulator,
}

impl TriangleScene {
    /// Uploads the triangle and draws with whatever `program` holds each frame.
    pub fn new(
        gl: GL,
        canvas: HtmlCanvasElement,
        program: SharedSlot,
        params: Rc<RefCell<TriangleParams>>,
    ) -> Result<Self, DemoError> {
        let positions = upload_triangle(&gl)?;
        Ok(Self {
            gl,
            canvas,
            program,
            positions,
            params,
            spin: RotationAccumulator::new(),
        })
    }

    pub fn program(&self) -> &SharedSlot {
        &self.program
    }

    pub fn angle(&self) -> f32 {
        self.spin.angle()
    }
}

impl Scene for TriangleScene {
    fn name(&self) -> &'static str {
        "shader sandbox"
    }

    fn render_frame(&mut self, delta_seconds: f32) {
        // Clone the Rc so a recompile during this frame cannot pull it out from under us.
        let Some(program) = self.program.borrow().current() else {
            return;
        };
        let params = *self.params.borrow();
        fit_canvas(&self.canvas);
        let gl = &self.gl;

        gl.viewport(0, 0, self.canvas.width() as i32, self.canvas.height() as i32);
        let [r, g, b, a] = params.background;
        gl.clear_color(r, g, b, a);
        gl.clear(GL::COLOR_BUFFER_BIT);

        gl.use_program(Some(program.program.raw()));
        if let Some(location) = &program.transform {
            let matrix = triangle_transform(self.spin.angle(), params.scale);
            gl.uniform_matrix4fv_with_f32_array(Some(location), false, &matrix.to_cols_array());
        }
        if let Some(position) = program.position {
            self.positions.bind();
            gl.vertex_attrib_pointer_with_i32(
                position,
                TRIANGLE_COMPONENTS,
                GL::FLOAT,
                false,
                0,
                0,
            );
            gl.enable_vertex_attrib_array(position);
        }
        gl.draw_arrays(GL::TRIANGLES, 0, TRIANGLE_VERTEX_COUNT);

        self.spin.advance(delta_seconds, params.rotation_speed);
    }
}

/// Editors plus the text they held when the page loaded.
#[derive(Clone)]
struct Editors {
    vertex: HtmlTextAreaElement,
    fragment: HtmlTextAreaElement,
    baseline: Rc<EditorBaseline>,
}

impl Editors {
    fn new(vertex: HtmlTextAreaElement, fragment: HtmlTextAreaElement) -> Self {
        let current = ShaderSources::new(vertex.value(), fragment.value());
        Self {
            vertex,
            fragment,
            baseline: Rc::new(EditorBaseline::capture(&current)),
        }
    }

    fn sources(&self) -> ShaderSources {
        ShaderSources::new(self.vertex.value(), self.fragment.value())
    }

    fn reset(&self) {
        let initial = self.baseline.initial();
        self.vertex.set_value(&initial.vertex);
        self.fragment.set_value(&initial.fragment);
    }
}

/// Compile what the editors currently hold and swap it in on success.
fn recompile(gl: &GL, slot: &SharedSlot, editors: &Editors) {
    let sources = editors.sources();
    let mut slot = slot.borrow_mut();
    match slot.replace_with(|| TriangleProgram::compile(gl, &sources)) {
        Ok(_previous) => log::info!("shader sandbox: program #{} active", slot.generation()),
        Err(err) => {
            log::error!("shader sandbox: {err}");
            alert(&err.to_string());
        }
    }
}

/// A sandbox wired to its page controls, not yet animating.
pub struct Sandbox {
    scene: TriangleScene,
    listeners: Vec<Listener>,
}

impl Sandbox {
    pub fn scene(&self) -> &TriangleScene {
        &self.scene
    }

    /// Hand the scene and its listeners to a render loop.
    pub fn run(self) -> Result<LoopHandle, JsValue> {
        render::start(self.scene, self.listeners)
    }
}

/// Look up the sandbox's elements, bind its controls and compile the editors'
/// start-up text. Everything except the background picker is required.
pub fn mount(document: &Document, config: &TriangleConfig) -> Result<Sandbox, DemoError> {
    let canvas: HtmlCanvasElement = require(document, config.canvas_id)?;
    let vertex_editor: HtmlTextAreaElement = require(document, config.vertex_editor_id)?;
    let fragment_editor: HtmlTextAreaElement = require(document, config.fragment_editor_id)?;
    let update_button: Element = require(document, config.update_button_id)?;
    let reset_button: Element = require(document, config.reset_button_id)?;
    let scale_slider: HtmlInputElement = require(document, config.scale_slider_id)?;
    let rotation_slider: HtmlInputElement = require(document, config.rotation_slider_id)?;
    let background_picker: Option<HtmlInputElement> =
        optional(document, config.background_picker_id);

    let editors = Editors::new(vertex_editor, fragment_editor);

    let gl: GL = canvas
        .get_context("webgl2")?
        .ok_or(DemoError::ContextUnavailable)?
        .dyn_into()
        .map_err(|_| DemoError::ContextUnavailable)?;

    let mut initial = config.initial;
    if let Some(picker) = &background_picker {
        if let Err(err) = initial.set_background(&picker.value()) {
            log::warn!("shader sandbox: initial background ignored: {err}");
        }
    }
    let params = Rc::new(RefCell::new(initial));
    let mut listeners: Vec<Listener> = [
        bind_param(
            Some(scale_slider),
            &params,
            "triangle scale",
            TriangleParams::set_scale,
        )?,
        bind_param(
            Some(rotation_slider),
            &params,
            "triangle rotation speed",
            TriangleParams::set_rotation_speed,
        )?,
        bind_param(
            background_picker,
            &params,
            "background colour",
            TriangleParams::set_background,
        )?,
    ]
    .into_iter()
    .flatten()
    .collect();

    let slot: SharedSlot = Rc::new(RefCell::new(ProgramSlot::empty()));
    let scene = TriangleScene::new(gl.clone(), canvas, slot.clone(), params)?;

    {
        let (gl, slot, editors) = (gl.clone(), slot.clone(), editors.clone());
        listeners.push(on_click(&update_button, move || recompile(&gl, &slot, &editors))?);
    }
    {
        let (gl, slot, editors) = (gl.clone(), slot.clone(), editors.clone());
        listeners.push(on_click(&reset_button, move || {
            editors.reset();
            recompile(&gl, &slot, &editors);
        })?);
    }

    recompile(&gl, &slot, &editors);

    Ok(Sandbox { scene, listeners })
}

/// Bring up the sandbox and start animating it.
pub fn start(document: &Document, config: &TriangleConfig) -> Result<LoopHandle, DemoError> {
    let sandbox = mount(document, config)?;
    log::info!("shader sandbox running");
    Ok(sandbox.run()?)
}
