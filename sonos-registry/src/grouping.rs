//! Forming and dissolving speaker groups.

use std::sync::Arc;

use tracing::{debug, info};

use crate::device::DeviceRef;
use crate::error::{RegistryError, Result};
use crate::registry::SpeakerRegistry;
use crate::selection::SpeakerSelection;

/// Group and ungroup speakers held by a [`SpeakerRegistry`]
#[derive(Debug, Clone)]
pub struct GroupManager {
    registry: Arc<SpeakerRegistry>,
}

impl GroupManager {
    pub fn new(registry: Arc<SpeakerRegistry>) -> Self {
        Self { registry }
    }

    /// Group the selected speakers under the first one
    ///
    /// Every name is resolved before any speaker is touched. The remaining
    /// speakers then join the coordinator one after another, in order; the
    /// first failing join stops the sequence. Returns the coordinator.
    pub fn group_speakers(&self, selection: &SpeakerSelection) -> Result<DeviceRef> {
        let speakers = self.registry.select(selection)?;

        let (coordinator, members) = speakers.split_first().ok_or(RegistryError::NoSpeakers)?;

        for member in members {
            debug!("{} joining {}", member.name(), coordinator.name());
            member.join(coordinator.as_ref())?;
        }

        info!(
            "Grouped {} speakers under {}",
            speakers.len(),
            coordinator.name()
        );
        Ok(Arc::clone(coordinator))
    }

    /// Make the selected speakers standalone
    ///
    /// The selection is resolved up front; the first failing unjoin is
    /// returned.
    pub fn ungroup(&self, selection: &SpeakerSelection) -> Result<()> {
        let speakers = self.registry.select(selection)?;

        for speaker in &speakers {
            debug!("{} leaving its group", speaker.name());
            speaker.unjoin()?;
        }

        info!("Ungrouped {} speakers", speakers.len());
        Ok(())
    }
}
