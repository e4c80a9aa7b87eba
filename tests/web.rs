#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use cat_gl_wasm::config::TriangleConfig;
use cat_gl_wasm::error::ShaderError;
use cat_gl_wasm::params::TriangleParams;
use cat_gl_wasm::program::{ProgramSlot, ShaderSources, ShaderStage};
use cat_gl_wasm::render_loop::FrameDriver;
use cat_gl_wasm::shaders::{
    CAT_FRAGMENT_SHADER, CAT_VERTEX_SHADER, MVP_UNIFORM, POSITION_ATTRIBUTE,
};
use cat_gl_wasm::wasm::buffers::{upload_triangle, CubeBuffers};
use cat_gl_wasm::wasm::shader::compile_program;
use cat_gl_wasm::wasm::triangle::{self, TriangleProgram, TriangleScene};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, HtmlCanvasElement, HtmlElement, HtmlTextAreaElement,
    WebGl2RenderingContext as GL,
};

wasm_bindgen_test_configure!(run_in_browser);

const BROKEN_FRAGMENT: &str =
    "precision mediump float;\nvoid main(void) { gl_FragColor = nope; }\n";

const TRIANGLE_VERTEX: &str = "attribute vec2 aVertexPosition;
uniform mat4 uTransformMatrix;
void main(void) {
    gl_Position = uTransformMatrix * vec4(aVertexPosition, 0.0, 1.0);
}";

const TRIANGLE_FRAGMENT: &str = "precision mediump float;
void main(void) {
    gl_FragColor = vec4(1.0, 0.5, 0.0, 1.0);
}";

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn canvas_and_context() -> (HtmlCanvasElement, GL) {
    let canvas = document()
        .create_element("canvas")
        .unwrap()
        .dyn_into::<HtmlCanvasElement>()
        .unwrap();
    let gl = canvas
        .get_context("webgl2")
        .unwrap()
        .expect("webgl2 not available")
        .dyn_into()
        .unwrap();
    (canvas, gl)
}

fn context() -> GL {
    canvas_and_context().1
}

/// Sandbox markup appended to the page, removed again on drop.
struct SandboxPage(Element);

impl SandboxPage {
    fn new(wrapper_id: &str, config: &TriangleConfig) -> Self {
        let markup = format!(
            r#"<div id="{wrapper_id}">
<canvas id="{canvas}" style="width: 64px; height: 64px"></canvas>
<textarea id="{vertex}">{TRIANGLE_VERTEX}</textarea>
<textarea id="{fragment}">{TRIANGLE_FRAGMENT}</textarea>
<button id="{update}">Update</button>
<button id="{reset}">Reset</button>
<input type="range" id="{scale}" min="0.1" max="2" step="0.1" value="1">
<input type="range" id="{rotation}" min="0" max="5" step="0.1" value="0">
</div>"#,
            canvas = config.canvas_id,
            vertex = config.vertex_editor_id,
            fragment = config.fragment_editor_id,
            update = config.update_button_id,
            reset = config.reset_button_id,
            scale = config.scale_slider_id,
            rotation = config.rotation_slider_id,
        );
        let document = document();
        document
            .body()
            .unwrap()
            .insert_adjacent_html("beforeend", &markup)
            .unwrap();
        Self(document.get_element_by_id(wrapper_id).unwrap())
    }

    fn element<T: JsCast>(&self, id: &str) -> T {
        document()
            .get_element_by_id(id)
            .unwrap()
            .dyn_into::<T>()
            .unwrap()
    }
}

impl Drop for SandboxPage {
    fn drop(&mut self) {
        self.0.remove();
    }
}

#[wasm_bindgen_test]
fn cat_program_links_and_exposes_locations() {
    let gl = context();
    let program = compile_program(&gl, CAT_VERTEX_SHADER, CAT_FRAGMENT_SHADER).unwrap();
    assert!(program.attrib_location(POSITION_ATTRIBUTE).is_some());
    assert!(program.uniform_location(MVP_UNIFORM).is_some());
    assert!(program.attrib_location("aNotThere").is_none());
}

#[wasm_bindgen_test]
fn compile_errors_name_the_stage() {
    let gl = context();
    match compile_program(&gl, CAT_VERTEX_SHADER, BROKEN_FRAGMENT) {
        Err(ShaderError::Compile { stage, log }) => {
            assert_eq!(stage, ShaderStage::Fragment);
            assert!(!log.is_empty());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("broken source compiled"),
    }
}

#[wasm_bindgen_test]
fn broken_recompile_keeps_previous_program_drawable() {
    let gl = context();
    let mut slot = ProgramSlot::empty();
    slot.replace_with(|| compile_program(&gl, CAT_VERTEX_SHADER, CAT_FRAGMENT_SHADER))
        .unwrap();
    let before = slot.current().unwrap();

    assert!(slot
        .replace_with(|| compile_program(&gl, CAT_VERTEX_SHADER, BROKEN_FRAGMENT))
        .is_err());

    let after = slot.current().unwrap();
    assert!(std::rc::Rc::ptr_eq(&before, &after));
    gl.use_program(Some(after.raw()));
    assert_eq!(gl.get_error(), GL::NO_ERROR);
}

#[wasm_bindgen_test]
fn static_buffers_upload_cleanly() {
    let gl = context();
    let cube = CubeBuffers::upload(&gl).unwrap();
    cube.indices.bind();
    let triangle = upload_triangle(&gl).unwrap();
    triangle.bind();
    assert_eq!(gl.get_error(), GL::NO_ERROR);
}

#[wasm_bindgen_test]
fn sandbox_without_program_skips_frames_and_keeps_looping() {
    let (canvas, gl) = canvas_and_context();
    let slot = Rc::new(RefCell::new(ProgramSlot::empty()));
    let params = Rc::new(RefCell::new(TriangleParams {
        rotation_speed: 2.0,
        ..TriangleParams::default()
    }));
    let scene = TriangleScene::new(gl.clone(), canvas, slot.clone(), params).unwrap();

    let broken = ShaderSources::new(TRIANGLE_VERTEX, BROKEN_FRAGMENT);
    assert!(slot
        .borrow_mut()
        .replace_with(|| TriangleProgram::compile(&gl, &broken))
        .is_err());

    let mut driver = FrameDriver::new(scene);
    driver.start();
    for now in [0.0, 16.0, 33.0, 50.0, 1_000.0] {
        assert!(driver.tick(now), "loop must keep going without a program");
    }
    assert_eq!(driver.frames(), 5);
    assert_eq!(driver.scene().angle(), 0.0);
    assert!(!driver.scene().program().borrow().is_ready());
    assert_eq!(gl.get_error(), GL::NO_ERROR);

    // the first good program is picked up by the next frame
    let good = ShaderSources::new(TRIANGLE_VERTEX, TRIANGLE_FRAGMENT);
    slot.borrow_mut()
        .replace_with(|| TriangleProgram::compile(&gl, &good))
        .unwrap();
    assert!(driver.tick(1_016.0));
    assert!(driver.tick(1_032.0));
    assert!(driver.scene().angle() > 0.0);
}

#[wasm_bindgen_test]
fn reset_restores_editors_and_recompiles() {
    let config = TriangleConfig {
        canvas_id: "reset-canvas",
        vertex_editor_id: "reset-vs",
        fragment_editor_id: "reset-fs",
        update_button_id: "reset-update",
        reset_button_id: "reset-reset",
        background_picker_id: "reset-bg",
        scale_slider_id: "reset-scale",
        rotation_slider_id: "reset-rotation",
        ..TriangleConfig::default()
    };
    let page = SandboxPage::new("reset-page", &config);
    let vertex: HtmlTextAreaElement = page.element(config.vertex_editor_id);
    let fragment: HtmlTextAreaElement = page.element(config.fragment_editor_id);
    let loaded = (vertex.value(), fragment.value());

    let sandbox = triangle::mount(&document(), &config).unwrap();
    assert!(sandbox.scene().program().borrow().is_ready());
    assert_eq!(sandbox.scene().program().borrow().generation(), 1);

    vertex.set_value("void main() {}");
    fragment.set_value("garbage {");
    page.element::<HtmlElement>(config.reset_button_id).click();

    assert_eq!((vertex.value(), fragment.value()), loaded);
    let slot = sandbox.scene().program().borrow();
    assert!(slot.is_ready());
    assert_eq!(slot.generation(), 2);
}

#[wasm_bindgen_test]
fn stopping_the_sandbox_releases_its_program() {
    let config = TriangleConfig {
        canvas_id: "stop-canvas",
        vertex_editor_id: "stop-vs",
        fragment_editor_id: "stop-fs",
        update_button_id: "stop-update",
        reset_button_id: "stop-reset",
        background_picker_id: "stop-bg",
        scale_slider_id: "stop-scale",
        rotation_slider_id: "stop-rotation",
        ..TriangleConfig::default()
    };
    let page = SandboxPage::new("stop-page", &config);

    let sandbox = triangle::mount(&document(), &config).unwrap();
    let slot = Rc::downgrade(sandbox.scene().program());
    let handle = sandbox.run().unwrap();
    assert!(slot.upgrade().is_some());

    handle.stop();
    assert!(slot.upgrade().is_none(), "program still referenced after stop");

    // the buttons no longer reach a sandbox
    page.element::<HtmlElement>(config.update_button_id).click();
    page.element::<HtmlElement>(config.reset_button_id).click();
}
