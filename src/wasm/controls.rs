use std::cell::RefCell;
use std::fmt::Display;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlInputElement};

use crate::error::DemoError;

/// Look up `id` and cast it, or report it missing.
pub fn require<T: JsCast>(document: &Document, id: &'static str) -> Result<T, DemoError> {
    optional(document, id).ok_or(DemoError::MissingElement(id))
}

/// Look up `id` and cast it; absent or wrongly-typed elements yield `None`.
pub fn optional<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// An event listener that stays registered until the value is dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(Event)>,
    ) -> Result<Self, JsValue> {
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        if let Err(err) = self.target.remove_event_listener_with_callback(self.event, callback) {
            log::warn!("could not remove {} listener: {err:?}", self.event);
        }
    }
}

/// Run `handler` with the input's value on every `input` event.
pub fn on_input(
    input: &HtmlInputElement,
    mut handler: impl FnMut(&str) + 'static,
) -> Result<Listener, JsValue> {
    let source = input.clone();
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        handler(&source.value());
    }) as Box<dyn FnMut(_)>);
    Listener::attach(input.as_ref(), "input", closure)
}

pub fn on_click(
    element: &Element,
    mut handler: impl FnMut() + 'static,
) -> Result<Listener, JsValue> {
    let closure = Closure::wrap(Box::new(move |_event: Event| {
        handler();
    }) as Box<dyn FnMut(_)>);
    Listener::attach(element.as_ref(), "click", closure)
}

/// Wire an optional input to a parameter setter. Parse failures are logged and
/// leave the parameter as it was.
pub fn bind_param<P, E>(
    input: Option<HtmlInputElement>,
    params: &Rc<RefCell<P>>,
    what: &'static str,
    set: fn(&mut P, &str) -> Result<(), E>,
) -> Result<Option<Listener>, JsValue>
where
    P: 'static,
    E: Display,
{
    let Some(input) = input else {
        log::debug!("no control for {what}; keeping default");
        return Ok(None);
    };
    let params = params.clone();
    on_input(&input, move |raw| {
        if let Err(err) = set(&mut params.borrow_mut(), raw) {
            log::warn!("ignoring {what} input: {err}");
        }
    })
    .map(Some)
}

/// Blocking browser alert. Used for failures the person at the page has to act on.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
