use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, HtmlCanvasElement, Window};

use super::controls::Listener;
use crate::render_loop::{FrameDriver, LoopState, Scene};
use crate::transform::aspect_ratio;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Keeps a running loop reachable so it can be stopped later.
///
/// Dropping the handle does not stop the loop; the scheduled callback keeps
/// itself alive until [`LoopHandle::stop`] is called. The page listeners that
/// feed the scene are held here too, and go away with the loop.
pub struct LoopHandle {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
    listeners: RefCell<Vec<Listener>>,
    stop_driver: Box<dyn Fn()>,
}

impl LoopHandle {
    pub fn stop(&self) {
        (self.stop_driver)();
        if let Some(id) = self.pending.take() {
            self.window.cancel_animation_frame(id).ok();
        }
        // Breaks the closure's self-reference so everything it captured is freed.
        self.callback.borrow_mut().take();
        self.listeners.borrow_mut().clear();
    }
}

/// Drive `scene` from `requestAnimationFrame` until stopped. `listeners` are
/// removed from the page when the loop is stopped.
pub fn start<S: Scene + 'static>(
    scene: S,
    listeners: Vec<Listener>,
) -> Result<LoopHandle, JsValue> {
    let window = window().ok_or("no window")?;
    let driver = Rc::new(RefCell::new(FrameDriver::new(scene)));
    driver.borrow_mut().start();

    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    // `f` holds the animation-frame closure so that it can keep handing itself to
    // `request_animation_frame`. Storing it inside an `Option` lets us create the
    // `Closure` first and then reach it from within itself.
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    {
        let driver = driver.clone();
        let pending = pending.clone();
        let window = window.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            pending.set(None);
            if !driver.borrow_mut().tick(now) {
                let driver = driver.borrow();
                log::debug!("{} stopped after {} frames", driver.scene().name(), driver.frames());
                return;
            }

            // schedule next
            let next = f
                .borrow()
                .as_ref()
                .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
            match next {
                Some(Ok(id)) => pending.set(Some(id)),
                Some(Err(err)) => log::error!("request_animation_frame failed: {err:?}"),
                None => {}
            }
        }) as Box<dyn FnMut(f64)>));
    }

    let first = g
        .borrow()
        .as_ref()
        .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()))
        .transpose()?;
    pending.set(first);

    log::debug!("{} scheduled", driver.borrow().scene().name());
    let driver: Weak<RefCell<FrameDriver<S>>> = Rc::downgrade(&driver);
    Ok(LoopHandle {
        window,
        pending,
        callback: g,
        listeners: RefCell::new(listeners),
        stop_driver: Box::new(move || {
            let Some(driver) = driver.upgrade() else {
                return;
            };
            let mut driver = driver.borrow_mut();
            if driver.state() == LoopState::Running {
                driver.stop();
            }
        }),
    })
}

/// Match the drawing buffer to the canvas' laid-out size and return its aspect ratio.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> f32 {
    let width = canvas.client_width();
    let height = canvas.client_height();
    if width > 0 && height > 0 {
        let (w, h) = (width as u32, height as u32);
        if canvas.width() != w || canvas.height() != h {
            canvas.set_width(w);
            canvas.set_height(h);
        }
    }
    aspect_ratio(f64::from(width), f64::from(height))
}
