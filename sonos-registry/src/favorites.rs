//! Playing "Sonos Favorites" by title or playlist alias.

use std::sync::Arc;

use tracing::{debug, info};

use crate::coordination::coordinator_of;
use crate::device::{DeviceRef, Favorite};
use crate::error::{RegistryError, Result};
use crate::grouping::GroupManager;
use crate::registry::SpeakerRegistry;
use crate::selection::SpeakerSelection;

/// Resolves favorites and starts playback on the right speaker
#[derive(Debug, Clone)]
pub struct FavoritePlayer {
    registry: Arc<SpeakerRegistry>,
}

impl FavoritePlayer {
    pub fn new(registry: Arc<SpeakerRegistry>) -> Self {
        Self { registry }
    }

    /// Play the favorite named `name_or_alias` on `device`'s group
    ///
    /// Followers reject transport commands, so both the favorites listing
    /// and `play_uri` go to the coordinator. Titles match case-insensitively.
    /// Returns the coordinator that was told to play.
    pub fn play_favorite(&self, device: &DeviceRef, name_or_alias: &str) -> Result<DeviceRef> {
        let title = self.registry.aliases().resolve_favorite(name_or_alias);

        let coordinator = coordinator_of(device)?;
        if coordinator.name() != device.name() {
            debug!(
                "Redirecting favorite playback from {} to coordinator {}",
                device.name(),
                coordinator.name()
            );
        }

        let favorites = coordinator.favorites()?;
        let favorite = find_favorite(&favorites, title).ok_or_else(|| {
            RegistryError::FavoriteNotFound {
                name: title.to_string(),
                available: favorites.iter().map(|f| f.title.clone()).collect(),
            }
        })?;

        coordinator.play_uri(&favorite.uri, &favorite.resource_meta_data)?;
        info!("Playing '{}' on {}", favorite.title, coordinator.name());

        Ok(coordinator)
    }

    /// Play a favorite on a selection of speakers
    ///
    /// `All` first groups every speaker and plays on the new coordinator.
    /// `Named` plays on the group of the first named speaker.
    pub fn play(&self, selection: &SpeakerSelection, name_or_alias: &str) -> Result<DeviceRef> {
        let target = match selection {
            SpeakerSelection::All => {
                GroupManager::new(Arc::clone(&self.registry)).group_speakers(selection)?
            }
            SpeakerSelection::Named(names) => {
                let first = names.first().ok_or(RegistryError::NoSpeakers)?;
                self.registry.get_speaker(first)?
            }
        };

        self.play_favorite(&target, name_or_alias)
    }

    /// Favorites as listed by the first cached speaker
    ///
    /// Favorites are household-wide, so any speaker's list will do.
    pub fn list_favorites(&self) -> Result<Vec<Favorite>> {
        let speaker = self
            .registry
            .speakers()
            .into_iter()
            .next()
            .ok_or(RegistryError::NoSpeakers)?;

        Ok(speaker.favorites()?)
    }
}

fn find_favorite<'a>(favorites: &'a [Favorite], title: &str) -> Option<&'a Favorite> {
    let wanted = title.to_lowercase();
    favorites.iter().find(|f| f.title.to_lowercase() == wanted)
}
