//! Yellow theme core
//!
//! Platform-agnostic logic behind the yellow site theme's page scripts: the
//! scroll progress arithmetic and the light/dark preference state machine.
//! This crate has no browser dependencies; `yellow-web` supplies the DOM and
//! storage implementations of the traits below.

pub mod config;
pub mod scroll;
pub mod store;
pub mod theme;
pub mod toggle;

pub use config::{ConfigError, SiteConfig};
pub use scroll::ScrollMetrics;
pub use store::MemoryStore;
pub use theme::{ParseThemeError, Theme};
pub use toggle::{ApplyError, ThemeToggle, ToggleResult};

/// Durable key-value storage scoped to the site origin, one implementation per platform
pub trait PreferenceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error>;
}

/// The system's light/dark preference signal
pub trait ColorSchemeSource {
    fn prefers_dark(&self) -> bool;
}

/// Document-level marker that styling rules key on
pub trait ThemeMarker {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Raw marker value, if one is set.
    fn read(&self) -> Option<String>;

    /// Set the marker to `theme`
    ///
    /// # Errors
    ///
    /// Returns an error if the document refuses the marker.
    fn write(&self, theme: Theme) -> Result<(), Self::Error>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    type Error = T::Error;

    fn get(&self, key: &str) -> Result<Option<String>, Self::Error> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Self::Error> {
        (**self).set(key, value)
    }
}

impl<T: ColorSchemeSource + ?Sized> ColorSchemeSource for &T {
    fn prefers_dark(&self) -> bool {
        (**self).prefers_dark()
    }
}

impl<T: ThemeMarker + ?Sized> ThemeMarker for &T {
    type Error = T::Error;

    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&self, theme: Theme) -> Result<(), Self::Error> {
        (**self).write(theme)
    }
}
