//! Scroll progress indicator
//!
//! Keeps the indicator's width in step with how far the page has been read.
//! Listeners are passive and live as long as the page; installing again for
//! the same indicator replaces the earlier listeners.

use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Element, HtmlElement, Window};
use yellow_core::{ScrollMetrics, SiteConfig};

use crate::{bindings, dom};
use crate::error::WebError;

/// Bind the indicator named by `cfg.progress_id`.
///
/// Returns `Ok(false)` without touching the page when the element is absent.
///
/// # Errors
/// Returns an error if the scroll or resize listener cannot be registered.
pub fn install(cfg: &SiteConfig) -> Result<bool, WebError> {
    let Some(bar) = dom::html_element_by_id(&cfg.progress_id) else {
        log::debug!("scroll progress disabled: no #{}", cfg.progress_id);
        return Ok(false);
    };
    let (Some(win), Some(root)) = (dom::window(), dom::root_element()) else {
        return Ok(false);
    };

    let handler = {
        let (win, root, bar) = (win.clone(), root.clone(), bar.clone());
        Closure::<dyn FnMut()>::new(move || update(&win, &root, &bar))
    };
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    if bindings::bind(&bar, &win, &["scroll", "resize"], &options, handler)? {
        log::debug!("scroll progress rebound: #{}", cfg.progress_id);
    }

    update(&win, &root, &bar);
    Ok(true)
}

/// Current scroll geometry of the document.
#[must_use]
pub fn read_metrics(win: &Window, root: &Element) -> ScrollMetrics {
    let scroll_y = win.scroll_y().unwrap_or_default();
    let scroll_top = if scroll_y.abs() > 0.0 {
        scroll_y
    } else {
        f64::from(root.scroll_top())
    };
    ScrollMetrics::new(
        scroll_top,
        f64::from(root.scroll_height()),
        f64::from(root.client_height()),
    )
}

pub fn update(win: &Window, root: &Element, bar: &HtmlElement) {
    let width = read_metrics(win, root).width_style();
    if let Err(err) = bar.style().set_property("width", &width) {
        log::warn!("scroll progress width not set: {}", dom::js_error_message(&err));
    }
}
