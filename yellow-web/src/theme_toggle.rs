//! Light/dark toggle control
use wasm_bindgen::closure::Closure;
use web_sys::AddEventListenerOptions;
use yellow_core::{SiteConfig, Theme, ThemeToggle};

use crate::{bindings, dom};
use crate::error::WebError;
use crate::media::{DocumentMarker, MediaScheme};
use crate::storage::LocalStore;

pub type BrowserThemeToggle = ThemeToggle<LocalStore, MediaScheme, DocumentMarker>;

/// Build the toggle for the current page, or `None` when the control named by
/// `cfg.toggle_id` is absent.
#[must_use]
pub fn browser_toggle(cfg: &SiteConfig) -> Option<(BrowserThemeToggle, web_sys::HtmlElement)> {
    let control = dom::html_element_by_id(&cfg.toggle_id)?;
    let win = dom::window()?;
    let root = win.document()?.document_element()?;
    let toggle = ThemeToggle::new(
        LocalStore::open(),
        MediaScheme::new(win, cfg.dark_query.as_str()),
        DocumentMarker::new(root, cfg.theme_attribute.as_str(), Some(control.clone().into())),
        cfg.storage_key.as_str(),
    );
    Some((toggle, control))
}

/// Apply the initial theme and start listening for clicks.
///
/// A control that was installed before is rebound: its earlier click handler
/// is removed, so one click always flips the theme exactly once.
///
/// Returns `Ok(None)` without touching the page when the control is absent.
///
/// # Errors
/// Returns an error if `cfg` names a theme attribute the DOM would refuse, or
/// if the click listener cannot be registered.
pub fn install(cfg: &SiteConfig) -> Result<Option<Theme>, WebError> {
    let Some((toggle, control)) = browser_toggle(cfg) else {
        log::debug!("theme toggle disabled: no #{}", cfg.toggle_id);
        return Ok(None);
    };
    cfg.validate()
        .map_err(|e| WebError::Options(e.to_string()))?;

    let initial = toggle.init().unwrap_or_else(|err| {
        log::warn!("{err}");
        toggle.current()
    });

    let on_click = Closure::<dyn FnMut()>::new(move || match toggle.toggle() {
        Ok(theme) => log::debug!("theme switched to {theme}"),
        Err(err) => log::warn!("{err}"),
    });
    if bindings::bind(
        &control,
        &control,
        &["click"],
        &AddEventListenerOptions::new(),
        on_click,
    )? {
        log::debug!("theme toggle rebound: #{}", cfg.toggle_id);
    }

    Ok(Some(initial))
}
