#![forbid(unsafe_code)]
use wasm_bindgen::prelude::*;
use yellow_core::{SiteConfig, Theme};

pub mod bindings;
pub mod dom;
pub mod error;
pub mod media;
pub mod progress;
pub mod storage;
pub mod theme_toggle;

pub use error::WebError;

/// What `mount_with` switched on for the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Mounted {
    pub progress: bool,
    pub theme: Option<Theme>,
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    mount_with(&SiteConfig::default());
}

/// Mount both page scripts with page-supplied options.
///
/// `options` may be `undefined`, or an object with any of the `SiteConfig`
/// fields; missing fields keep their defaults. Elements already bound by
/// `start` are rebound with the new options.
///
/// # Errors
/// Rejects when `options` cannot be read as a valid `SiteConfig`.
#[wasm_bindgen]
pub fn mount(options: JsValue) -> Result<(), JsValue> {
    let cfg = parse_options(options)?;
    mount_with(&cfg);
    Ok(())
}

/// Parse the options object handed to `mount`.
///
/// # Errors
/// Returns [`WebError::Options`] when the value does not deserialize or names
/// a theme attribute the DOM would refuse.
pub fn parse_options(options: JsValue) -> Result<SiteConfig, WebError> {
    if options.is_undefined() || options.is_null() {
        return Ok(SiteConfig::default());
    }
    let cfg: SiteConfig =
        serde_wasm_bindgen::from_value(options).map_err(|e| WebError::Options(e.to_string()))?;
    cfg.validate()
        .map_err(|e| WebError::Options(e.to_string()))?;
    Ok(cfg)
}

/// Install each module independently; a failure in one never blocks the other.
pub fn mount_with(cfg: &SiteConfig) -> Mounted {
    let progress = progress::install(cfg).unwrap_or_else(|err| {
        dom::console_error(&format!("scroll progress: {err}"));
        false
    });
    let theme = theme_toggle::install(cfg).unwrap_or_else(|err| {
        dom::console_error(&format!("theme toggle: {err}"));
        None
    });
    Mounted { progress, theme }
}
