//! User-facing short names for speakers and favorites.

use std::collections::BTreeMap;

use crate::config::RegistryConfig;

/// Alias tables, fixed for the lifetime of the process
///
/// Lookups fall through to the input when no alias matches, so real names
/// always work alongside their aliases.
#[derive(Debug, Clone, Default)]
pub struct AliasResolver {
    speakers: BTreeMap<String, String>,
    reverse: BTreeMap<String, String>,
    playlists: BTreeMap<String, String>,
}

impl AliasResolver {
    pub fn new(speakers: BTreeMap<String, String>, playlists: BTreeMap<String, String>) -> Self {
        // Iteration is sorted, so the smallest alias of a device wins
        let mut reverse = BTreeMap::new();
        for (alias, name) in &speakers {
            reverse.entry(name.clone()).or_insert_with(|| alias.clone());
        }

        Self {
            speakers,
            reverse,
            playlists,
        }
    }

    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::new(config.speakers.clone(), config.playlists.clone())
    }

    /// Device name for a speaker alias or name
    pub fn resolve_speaker<'a>(&'a self, name_or_alias: &'a str) -> &'a str {
        self.speakers
            .get(name_or_alias)
            .map(String::as_str)
            .unwrap_or(name_or_alias)
    }

    /// Alias configured for a device name
    pub fn alias_for(&self, device_name: &str) -> Option<&str> {
        self.reverse.get(device_name).map(String::as_str)
    }

    /// Favorite title for a playlist alias or title
    pub fn resolve_favorite<'a>(&'a self, name_or_alias: &'a str) -> &'a str {
        self.playlists
            .get(name_or_alias)
            .map(String::as_str)
            .unwrap_or(name_or_alias)
    }

    pub fn speakers(&self) -> &BTreeMap<String, String> {
        &self.speakers
    }

    pub fn playlists(&self) -> &BTreeMap<String, String> {
        &self.playlists
    }
}
