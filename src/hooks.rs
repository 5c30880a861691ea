use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::Element;
use yew::prelude::*;

use crate::view_state::counter::OnceTrigger;

/// A window event listener that is removed when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        if let Err(e) = window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
            log::warn!("Could not listen for {}: {:?}", event, e);
            return None;
        }
        Some(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}

/// Holds at most one pending timeout. Scheduling again cancels the previous
/// one, so only the last call in a burst fires.
#[derive(Clone, Default)]
pub struct Debouncer {
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, callback);
        *self.pending.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

fn observe(trigger: OnceTrigger, node: &NodeRef) -> OnceTrigger {
    match (node.cast::<Element>(), viewport_height()) {
        (Some(element), Some(height)) => trigger.observe(element.get_bounding_client_rect().top(), height),
        _ => trigger,
    }
}

/// Flips to `true` the first time `node` reaches the viewport and stays there.
/// The scroll listener is removed as soon as it has fired.
#[hook]
pub fn use_in_view_once(node: NodeRef) -> bool {
    let trigger = use_state_eq(OnceTrigger::default);

    {
        let current = *trigger;
        let trigger = trigger.clone();
        use_effect_with_deps(
            move |current: &OnceTrigger| {
                let current = *current;
                let listener = if !current.needs_listener() {
                    None
                } else {
                    let next = observe(current, &node);
                    if next.fired() {
                        trigger.set(next);
                        None
                    } else {
                        // Setting the fired state re-runs this effect, whose
                        // cleanup drops the listener.
                        WindowListener::new("scroll", move || {
                            let next = observe(current, &node);
                            if next.fired() {
                                trigger.set(next);
                            }
                        })
                    }
                };
                move || drop(listener)
            },
            current,
        );
    }

    trigger.fired()
}
