//! Transport, volume and mute commands.
//!
//! Transport commands for named speakers are routed to their group
//! coordinator. Volume and mute are per speaker and go to the speaker itself.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::coordination::coordinator_of;
use crate::device::{Device, DeviceRef, DeviceResult};
use crate::error::Result;
use crate::registry::SpeakerRegistry;
use crate::selection::SpeakerSelection;

pub const MAX_VOLUME: u8 = 100;

/// AVTransport commands without arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportCommand {
    Play,
    Pause,
    Stop,
    Next,
    Previous,
}

impl TransportCommand {
    fn apply(self, device: &dyn Device) -> DeviceResult<()> {
        match self {
            TransportCommand::Play => device.play(),
            TransportCommand::Pause => device.pause(),
            TransportCommand::Stop => device.stop(),
            TransportCommand::Next => device.next(),
            TransportCommand::Previous => device.previous(),
        }
    }
}

impl fmt::Display for TransportCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportCommand::Play => "play",
            TransportCommand::Pause => "pause",
            TransportCommand::Stop => "stop",
            TransportCommand::Next => "next",
            TransportCommand::Previous => "previous",
        };
        f.write_str(name)
    }
}

/// Clamp a requested volume into 0..=100
pub fn clamp_volume(volume: i64) -> u8 {
    volume.clamp(0, i64::from(MAX_VOLUME)) as u8
}

/// Transport, volume and mute commands over a [`SpeakerRegistry`]
#[derive(Debug, Clone)]
pub struct PlaybackControl {
    registry: Arc<SpeakerRegistry>,
}

impl PlaybackControl {
    pub fn new(registry: Arc<SpeakerRegistry>) -> Self {
        Self { registry }
    }

    /// Send a transport command
    ///
    /// `All` addresses every cached speaker directly. Named speakers are
    /// redirected to their coordinators; a coordinator shared by several
    /// named speakers receives the command once.
    pub fn send(&self, selection: &SpeakerSelection, command: TransportCommand) -> Result<()> {
        let speakers = self.registry.select(selection)?;

        let targets = match selection {
            SpeakerSelection::All => speakers,
            SpeakerSelection::Named(_) => {
                let mut coordinators: Vec<DeviceRef> = Vec::with_capacity(speakers.len());
                for speaker in &speakers {
                    let coordinator = coordinator_of(speaker)?;
                    if !coordinators.iter().any(|c| c.name() == coordinator.name()) {
                        coordinators.push(coordinator);
                    }
                }
                coordinators
            }
        };

        for target in &targets {
            debug!("Sending {} to {}", command, target.name());
            command.apply(target.as_ref())?;
        }
        Ok(())
    }

    /// Set the volume of each selected speaker, returning the clamped value
    pub fn set_volume(&self, selection: &SpeakerSelection, volume: i64) -> Result<u8> {
        let volume = clamp_volume(volume);
        for speaker in self.registry.select(selection)? {
            debug!("Setting volume of {} to {}", speaker.name(), volume);
            speaker.set_volume(volume)?;
        }
        Ok(volume)
    }

    pub fn set_mute(&self, selection: &SpeakerSelection, muted: bool) -> Result<()> {
        for speaker in self.registry.select(selection)? {
            debug!("Setting mute of {} to {}", speaker.name(), muted);
            speaker.set_mute(muted)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_volume() {
        assert_eq!(clamp_volume(-5), 0);
        assert_eq!(clamp_volume(0), 0);
        assert_eq!(clamp_volume(42), 42);
        assert_eq!(clamp_volume(100), 100);
        assert_eq!(clamp_volume(250), 100);
        assert_eq!(clamp_volume(i64::MIN), 0);
    }

    #[test]
    fn test_command_display() {
        assert_eq!(TransportCommand::Previous.to_string(), "previous");
        assert_eq!(TransportCommand::Pause.to_string(), "pause");
    }
}
