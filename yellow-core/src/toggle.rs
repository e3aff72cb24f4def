//! Light/dark toggle state machine
//!
//! The initial theme is the stored preference when one is recognized, and
//! otherwise follows the system color scheme. Every apply writes the marker
//! first and persists only once the marker is set, so a failing store never
//! leaves the page unstyled and a refused marker is never remembered.

use crate::{ColorSchemeSource, PreferenceStore, Theme, ThemeMarker};

#[derive(Debug, thiserror::Error)]
pub enum ApplyError<S, M> {
    #[error("theme marker not applied: {0}")]
    Marker(#[source] M),
    #[error("theme preference not saved: {0}")]
    Store(#[source] S),
}

pub type ToggleResult<S, M> =
    Result<Theme, ApplyError<<S as PreferenceStore>::Error, <M as ThemeMarker>::Error>>;

pub struct ThemeToggle<S, C, M>
where
    S: PreferenceStore,
    C: ColorSchemeSource,
    M: ThemeMarker,
{
    store: S,
    scheme: C,
    marker: M,
    storage_key: String,
}

impl<S, C, M> ThemeToggle<S, C, M>
where
    S: PreferenceStore,
    C: ColorSchemeSource,
    M: ThemeMarker,
{
    pub fn new(store: S, scheme: C, marker: M, storage_key: impl Into<String>) -> Self {
        Self {
            store,
            scheme,
            marker,
            storage_key: storage_key.into(),
        }
    }

    /// Persisted preference, if readable and recognized.
    pub fn stored_theme(&self) -> Option<Theme> {
        match self.store.get(&self.storage_key) {
            Ok(Some(raw)) => raw
                .parse()
                .map_err(|err| log::debug!("ignoring stored preference: {err}"))
                .ok(),
            Ok(None) => None,
            Err(err) => {
                log::warn!("failed to read theme preference {:?}: {err}", self.storage_key);
                None
            }
        }
    }

    #[must_use]
    pub fn resolve_initial(&self) -> Theme {
        self.stored_theme()
            .unwrap_or_else(|| Theme::from_prefers_dark(self.scheme.prefers_dark()))
    }

    /// Theme currently shown by the document marker.
    #[must_use]
    pub fn current(&self) -> Theme {
        Theme::from_marker(self.marker.read().as_deref())
    }

    /// Resolve, apply and persist the initial theme.
    ///
    /// # Errors
    ///
    /// Returns [`ApplyError::Marker`] if the document refused the marker, or
    /// [`ApplyError::Store`] if the resolved theme could not be persisted. The
    /// marker has already been updated in the latter case.
    pub fn init(&self) -> ToggleResult<S, M> {
        let theme = self.resolve_initial();
        log::debug!("initial theme: {theme}");
        self.apply(theme)?;
        Ok(theme)
    }

    /// Flip the marker to the other theme and persist it.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`ThemeToggle::init`].
    pub fn toggle(&self) -> ToggleResult<S, M> {
        let next = self.current().toggled();
        self.apply(next)?;
        Ok(next)
    }

    fn apply(&self, theme: Theme) -> Result<(), ApplyError<S::Error, M::Error>> {
        self.marker.write(theme).map_err(ApplyError::Marker)?;
        self.store
            .set(&self.storage_key, theme.as_str())
            .map_err(ApplyError::Store)
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    pub const fn marker(&self) -> &M {
        &self.marker
    }
}
