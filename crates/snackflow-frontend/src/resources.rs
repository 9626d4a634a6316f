//! Localized string resources bundled with the frontend.

use std::collections::HashMap;

use serde::Deserialize;
use snackflow_bridge::{ResolveError, ResourceId, ResourceResolver};
use tokio::sync::watch;

const BUNDLED_STRINGS: &str = include_str!("../assets/strings.toml");

/// Locale used when the selected one has no string for a resource.
pub const FALLBACK_LOCALE: &str = "en";

#[derive(Debug, thiserror::Error)]
pub enum ResourcesError {
    #[error("failed to parse string table: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Strings keyed by locale, then by resource key.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    locales: HashMap<String, HashMap<String, String>>,
}

impl StringTable {
    pub fn parse(source: &str) -> Result<Self, ResourcesError> {
        Ok(toml::from_str(source)?)
    }

    /// The table shipped in `assets/strings.toml`.
    pub fn bundled() -> Result<Self, ResourcesError> {
        Self::parse(BUNDLED_STRINGS)
    }

    pub fn supports(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// Available locales, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Looks `key` up in `locale`, then in [`FALLBACK_LOCALE`].
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        let lookup = |locale: &str| self.locales.get(locale)?.get(key);
        lookup(locale)
            .or_else(|| lookup(FALLBACK_LOCALE))
            .map(String::as_str)
    }
}

/// [`ResourceResolver`] over a [`StringTable`] with a switchable locale.
///
/// Strings are looked up when a snackbar is shown, so switching the locale
/// also affects snackbars that are already queued.
#[derive(Debug)]
pub struct LocalizedResources {
    table: StringTable,
    locale: watch::Sender<String>,
}

impl LocalizedResources {
    pub fn new(table: StringTable, locale: impl Into<String>) -> Self {
        Self {
            table,
            locale: watch::Sender::new(locale.into()),
        }
    }

    pub fn table(&self) -> &StringTable {
        &self.table
    }

    pub fn locale(&self) -> String {
        self.locale.borrow().clone()
    }

    pub fn set_locale(&self, locale: &str) {
        let changed = self.locale.send_if_modified(|current| {
            if current == locale {
                return false;
            }
            *current = locale.to_string();
            true
        });
        if changed {
            log::info!("Switched string resources to locale {locale}");
        }
    }

    pub fn lookup(&self, id: ResourceId) -> Result<String, ResolveError> {
        let locale = self.locale.borrow();
        match self.table.get(&locale, id.key()) {
            Some(value) => Ok(value.to_string()),
            None => Err(ResolveError::Missing {
                id,
                locale: locale.clone(),
            }),
        }
    }
}

impl ResourceResolver for LocalizedResources {
    async fn resolve(&self, id: ResourceId) -> Result<String, ResolveError> {
        self.lookup(id)
    }
}
