//! Page-lifetime listener registry
//!
//! Each bound element owns at most one set of listeners. Binding an element
//! again (the `start` defaults followed by a page's own `mount`) first removes
//! the listeners registered for it earlier, so a click is never handled twice.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, EventTarget};

use crate::error::WebError;

struct Binding {
    owner: Element,
    target: EventTarget,
    events: &'static [&'static str],
    handler: Closure<dyn FnMut()>,
}

impl Binding {
    fn release(&self) {
        for event in self.events {
            let _ = self
                .target
                .remove_event_listener_with_callback(event, self.handler.as_ref().unchecked_ref());
        }
    }
}

thread_local! {
    static BOUND: RefCell<Vec<Binding>> = const { RefCell::new(Vec::new()) };
}

/// Register `handler` on `target` for `events` on behalf of `owner`.
///
/// Returns whether an earlier binding for `owner` was replaced.
///
/// # Errors
/// Returns an error if the browser rejects a listener. Listeners added before
/// the failure are removed again.
pub fn bind(
    owner: &Element,
    target: &EventTarget,
    events: &'static [&'static str],
    options: &AddEventListenerOptions,
    handler: Closure<dyn FnMut()>,
) -> Result<bool, WebError> {
    let replaced = unbind(owner);
    let binding = Binding {
        owner: owner.clone(),
        target: target.clone(),
        events,
        handler,
    };
    for event in events {
        if let Err(err) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            binding.handler.as_ref().unchecked_ref(),
            options,
        ) {
            binding.release();
            return Err(WebError::dom(&err));
        }
    }
    BOUND.with(|bound| bound.borrow_mut().push(binding));
    Ok(replaced)
}

/// Remove the listeners registered for `owner`, if any.
pub fn unbind(owner: &Element) -> bool {
    let previous = BOUND.with(|bound| {
        let mut bound = bound.borrow_mut();
        bound
            .iter()
            .position(|b| &b.owner == owner)
            .map(|idx| bound.swap_remove(idx))
    });
    previous.map(|binding| binding.release()).is_some()
}

#[must_use]
pub fn is_bound(owner: &Element) -> bool {
    BOUND.with(|bound| bound.borrow().iter().any(|b| &b.owner == owner))
}
