//! # cat_gl_wasm
//!
//! Two small WebGL demos driven from Rust: a rotating cat built from seven cubes,
//! and a triangle whose shaders can be edited live in the page.
//!
//! Everything that does not touch the browser (colour parsing, parameters,
//! matrices, geometry, program bookkeeping and the frame state machine) builds on
//! every target, so it can be tested with a plain `cargo test`.

pub mod color;
pub mod config;
pub mod error;
pub mod geometry;
pub mod params;
pub mod program;
pub mod render_loop;
pub mod shaders;
pub mod transform;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::config::DemoConfig;
    use crate::error::DemoError;

    pub mod buffers;
    pub mod cat;
    pub mod controls;
    pub mod render;
    pub mod shader;
    pub mod triangle;

    impl From<JsValue> for DemoError {
        fn from(value: JsValue) -> Self {
            DemoError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
        }
    }

    impl From<DemoError> for JsValue {
        fn from(err: DemoError) -> Self {
            JsValue::from_str(&err.to_string())
        }
    }

    thread_local! {
        static RUNNING: RefCell<Vec<render::LoopHandle>> = const { RefCell::new(Vec::new()) };
    }

    fn report(demo: &str, err: &DemoError, alert_user: bool) {
        if !err.is_user_facing() {
            log::debug!("{demo} skipped: {err}");
            return;
        }
        log::error!("{demo}: {err}");
        if alert_user {
            controls::alert(&err.to_string());
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let config = DemoConfig::default();
        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let page_level = document
            .body()
            .and_then(|body| body.get_attribute("data-log-level"));
        let level = config.log_level_from(page_level.as_deref());
        if console_log::init_with_level(level).is_err() {
            web_sys::console::warn_1(&"logger already initialised".into());
        }

        // Each demo stands alone: one failing must not keep the other from running.
        match cat::start(&document, &config.cat) {
            Ok(handle) => RUNNING.with(|running| running.borrow_mut().push(handle)),
            Err(err) => report("cat demo", &err, false),
        }
        match triangle::start(&document, &config.triangle) {
            Ok(handle) => RUNNING.with(|running| running.borrow_mut().push(handle)),
            Err(err) => report("shader sandbox", &err, true),
        }

        Ok(())
    }

    /// Stop every running render loop and release its callback. For pages that
    /// tear the canvases down without unloading.
    #[wasm_bindgen]
    pub fn stop_demos() {
        let handles = RUNNING.with(|running| std::mem::take(&mut *running.borrow_mut()));
        for handle in &handles {
            handle.stop();
        }
        log::info!("stopped {} render loop(s)", handles.len());
    }
}
