//! # Sonos Registry
//!
//! Live registry of the Sonos speakers on the local network, plus the group
//! logic that sits between an HTTP API and the speakers themselves.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use sonos_registry::{
//!     FavoritePlayer, GroupCoordinator, RegistryConfig, SpeakerRegistry, SweepTask,
//! };
//!
//! let config = RegistryConfig::load("config.yaml")?;
//! let registry = Arc::new(SpeakerRegistry::new(config, discovery));
//! let sweep = SweepTask::start(Arc::clone(&registry));
//!
//! let coordinator = GroupCoordinator::new(Arc::clone(&registry));
//! let speaker = registry.get_speaker("lr")?;
//! println!("{:?}", coordinator.get_speaker_snapshot(&speaker)?);
//!
//! FavoritePlayer::new(Arc::clone(&registry)).play_favorite(&speaker, "altwave")?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! API layer (routes)
//!     ↓
//! GroupCoordinator / FavoritePlayer / GroupManager / PlaybackControl
//!     ↓
//! SpeakerRegistry (mutex-guarded cache) ← SweepTask (periodic refresh)
//!     ↓
//! Discovery + Device traits (SSDP/UPnP implementation)
//! ```
//!
//! The speaker protocol is not implemented here. Plug an SSDP/SOAP client in
//! through [`Discovery`] and [`Device`].

pub mod alias;
pub mod config;
pub mod control;
pub mod coordination;
pub mod device;
pub mod duration;
pub mod error;
pub mod favorites;
pub mod grouping;
pub mod logging;
pub mod model;
pub mod registry;
pub mod selection;
pub mod sweep;

pub use alias::AliasResolver;
pub use config::{ConfigError, RegistryConfig};
pub use control::{PlaybackControl, TransportCommand};
pub use coordination::{coordinator_of, GroupCoordinator};
pub use device::{
    Device, DeviceRef, DeviceResult, Discovery, Favorite, Group, TrackInfo, TransportInfo,
};
pub use duration::parse_duration;
pub use error::{DeviceError, RegistryError, Result};
pub use favorites::FavoritePlayer;
pub use grouping::GroupManager;
pub use logging::{init_logging, init_logging_from_env, LoggingError, LoggingMode};
pub use model::{SpeakerSnapshot, SpeakerStatus, Track, TransportState};
pub use registry::{RefreshOutcome, SpeakerRegistry};
pub use selection::SpeakerSelection;
pub use sweep::SweepTask;
