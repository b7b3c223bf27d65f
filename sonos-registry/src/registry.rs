//! SpeakerRegistry - discovery cache shared by every request handler
//!
//! The cache maps device names to device handles and is swapped wholesale on
//! every successful discovery sweep. One mutex guards it; the lock is held
//! for the swap, lookup or copy only, never while talking to the network.

use std::collections::BTreeMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::alias::AliasResolver;
use crate::config::RegistryConfig;
use crate::device::{DeviceRef, Discovery};
use crate::error::{RegistryError, Result};
use crate::selection::SpeakerSelection;

/// What a call to [`SpeakerRegistry::refresh`] did to the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The cache now holds exactly the devices of this sweep
    Replaced { count: usize },
    /// The sweep found nothing or failed; the previous cache was kept
    Retained,
}

/// Concurrency-safe cache of discovered speakers
///
/// Construct it once, wrap it in an `Arc` and hand clones to whatever needs
/// it. Construction runs one discovery sweep before returning.
///
/// # Example
///
/// ```rust,ignore
/// let registry = Arc::new(SpeakerRegistry::new(config, discovery));
/// let speaker = registry.get_speaker("lr")?;
/// println!("{} at {}", speaker.name(), speaker.ip_address());
/// ```
pub struct SpeakerRegistry {
    config: RegistryConfig,
    aliases: AliasResolver,
    discovery: Arc<dyn Discovery>,
    speakers: Mutex<BTreeMap<String, DeviceRef>>,
}

impl SpeakerRegistry {
    /// Create the registry and run the initial discovery sweep
    pub fn new(config: RegistryConfig, discovery: Arc<dyn Discovery>) -> Self {
        let registry = Self {
            aliases: AliasResolver::from_config(&config),
            config,
            discovery,
            speakers: Mutex::new(BTreeMap::new()),
        };

        let outcome = registry.refresh();
        debug!("Initial discovery: {:?}", outcome);

        registry
    }

    /// Run one discovery sweep and replace the cache with its result
    ///
    /// An empty or failed sweep leaves the cache untouched.
    pub fn refresh(&self) -> RefreshOutcome {
        let discovered = match self.discovery.discover(self.config.discovery_timeout) {
            Ok(devices) => devices,
            Err(e) => {
                warn!("Discovery sweep failed, keeping cached speakers: {}", e);
                return RefreshOutcome::Retained;
            }
        };

        if discovered.is_empty() {
            warn!("Discovery sweep found no speakers, keeping cached speakers");
            return RefreshOutcome::Retained;
        }

        let fresh: BTreeMap<String, DeviceRef> = discovered
            .into_iter()
            .map(|device| (device.name().to_string(), device))
            .collect();
        let count = fresh.len();

        let dropped: Vec<String> = {
            let mut cache = self.speakers.lock();
            let dropped = cache
                .keys()
                .filter(|name| !fresh.contains_key(*name))
                .cloned()
                .collect();
            *cache = fresh;
            dropped
        };

        info!("Discovery sweep found {} speakers", count);
        for name in dropped {
            info!("Speaker {} is no longer reachable", name);
        }

        RefreshOutcome::Replaced { count }
    }

    /// Look a speaker up by alias or device name
    pub fn get_speaker(&self, name_or_alias: &str) -> Result<DeviceRef> {
        let real_name = self.aliases.resolve_speaker(name_or_alias);
        self.speakers
            .lock()
            .get(real_name)
            .cloned()
            .ok_or_else(|| RegistryError::SpeakerNotFound(name_or_alias.to_string()))
    }

    /// Resolve every speaker of `selection`, failing on the first unknown name
    pub fn select(&self, selection: &SpeakerSelection) -> Result<Vec<DeviceRef>> {
        match selection {
            SpeakerSelection::All => Ok(self.speakers()),
            SpeakerSelection::Named(names) => names
                .iter()
                .map(|name| self.get_speaker(name))
                .collect(),
        }
    }

    /// Copy of the whole cache, ordered by device name
    pub fn get_all_speakers(&self) -> BTreeMap<String, DeviceRef> {
        self.speakers.lock().clone()
    }

    /// Cached devices in name order
    pub fn speakers(&self) -> Vec<DeviceRef> {
        self.speakers.lock().values().cloned().collect()
    }

    pub fn speaker_names(&self) -> Vec<String> {
        self.speakers.lock().keys().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.speakers.lock().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.speakers.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.speakers.lock().is_empty()
    }

    pub fn aliases(&self) -> &AliasResolver {
        &self.aliases
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }
}

impl std::fmt::Debug for SpeakerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeakerRegistry")
            .field("speakers", &self.speaker_names())
            .field("config", &self.config)
            .finish()
    }
}
