//! Group coordinators and speaker status.
//!
//! In a Sonos group only the coordinator accepts transport commands and
//! knows what is playing; the other members report an empty track. Status
//! reads here backfill a member's track from its coordinator.

use std::sync::Arc;

use tracing::debug;

use crate::device::{DeviceRef, DeviceResult};
use crate::error::Result;
use crate::model::{SpeakerSnapshot, SpeakerStatus, Track, TransportState};
use crate::registry::SpeakerRegistry;

/// Coordinator of `device`'s group, or `device` itself when ungrouped
pub fn coordinator_of(device: &DeviceRef) -> DeviceResult<DeviceRef> {
    Ok(match device.group()? {
        Some(group) => group.coordinator,
        None => Arc::clone(device),
    })
}

/// Coordinator lookups and status snapshots over a [`SpeakerRegistry`]
#[derive(Debug, Clone)]
pub struct GroupCoordinator {
    registry: Arc<SpeakerRegistry>,
}

impl GroupCoordinator {
    pub fn new(registry: Arc<SpeakerRegistry>) -> Self {
        Self { registry }
    }

    /// The speaker that accepts transport commands for `name_or_alias`
    pub fn get_coordinator(&self, name_or_alias: &str) -> Result<DeviceRef> {
        let device = self.registry.get_speaker(name_or_alias)?;
        Ok(coordinator_of(&device)?)
    }

    /// Read the full status of one speaker from the device
    ///
    /// The device's own track is read once. Only when it is empty and the
    /// device follows a different coordinator is the coordinator asked too.
    pub fn get_speaker_snapshot(&self, device: &DeviceRef) -> Result<SpeakerSnapshot> {
        let transport = device.transport_info()?;
        let own_track = device.track_info()?;
        let group = device.group()?;

        let track_info = match &group {
            Some(group) if own_track.is_empty() && !group.is_coordinator(device.as_ref()) => {
                debug!(
                    "{} has no track of its own, reading from coordinator {}",
                    device.name(),
                    group.coordinator.name()
                );
                group.coordinator.track_info()?
            }
            _ => own_track,
        };

        Ok(SpeakerSnapshot {
            name: device.name().to_string(),
            alias: self
                .registry
                .aliases()
                .alias_for(device.name())
                .map(str::to_string),
            ip: device.ip_address().to_string(),
            volume: device.volume()?,
            muted: device.mute()?,
            state: TransportState::from_transport_state(&transport.current_transport_state),
            group_coordinator: group.map(|group| group.coordinator.name().to_string()),
            track: Track::from_track_info(track_info),
        })
    }

    /// Rediscover, then read the status of every speaker
    ///
    /// A speaker that fails any read is listed as unreachable rather than
    /// failing the whole listing.
    pub fn statuses(&self) -> Vec<SpeakerStatus> {
        self.registry.refresh();

        self.registry
            .speakers()
            .iter()
            .map(|device| match self.get_speaker_snapshot(device) {
                Ok(snapshot) => SpeakerStatus::Available(snapshot),
                Err(e) => {
                    debug!("Status read for {} failed: {}", device.name(), e);
                    SpeakerStatus::Unreachable {
                        name: device.name().to_string(),
                        error: e.to_string(),
                    }
                }
            })
            .collect()
    }
}
