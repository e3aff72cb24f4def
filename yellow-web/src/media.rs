use web_sys::{Element, Window};
use yellow_core::{ColorSchemeSource, Theme, ThemeMarker};

use crate::error::WebError;

/// System color scheme read through `matchMedia`.
pub struct MediaScheme {
    window: Window,
    query: String,
}

impl MediaScheme {
    pub fn new(window: Window, query: impl Into<String>) -> Self {
        Self {
            window,
            query: query.into(),
        }
    }
}

impl ColorSchemeSource for MediaScheme {
    fn prefers_dark(&self) -> bool {
        self.window
            .match_media(&self.query)
            .ok()
            .flatten()
            .is_some_and(|list| list.matches())
    }
}

/// Theme attribute on the document root, mirrored into the toggle's
/// `aria-pressed` state.
pub struct DocumentMarker {
    root: Element,
    attribute: String,
    control: Option<Element>,
}

impl DocumentMarker {
    pub fn new(root: Element, attribute: impl Into<String>, control: Option<Element>) -> Self {
        Self {
            root,
            attribute: attribute.into(),
            control,
        }
    }
}

impl ThemeMarker for DocumentMarker {
    type Error = WebError;

    fn read(&self) -> Option<String> {
        self.root.get_attribute(&self.attribute)
    }

    fn write(&self, theme: Theme) -> Result<(), Self::Error> {
        self.root
            .set_attribute(&self.attribute, theme.as_str())
            .map_err(|e| WebError::dom(&e))?;
        if let Some(control) = &self.control {
            let pressed = if theme.is_dark() { "true" } else { "false" };
            control
                .set_attribute("aria-pressed", pressed)
                .map_err(|e| WebError::dom(&e))?;
        }
        Ok(())
    }
}
