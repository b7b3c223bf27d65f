//! Mock speakers and discovery for integration tests
//!
//! `MockDevice` records every call it receives and behaves like a real group
//! member: transport commands and `play_uri` sent to a speaker that follows
//! another coordinator are rejected.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use sonos_registry::{
    Device, DeviceError, DeviceRef, DeviceResult, Discovery, Favorite, Group, RegistryConfig,
    SpeakerRegistry, TrackInfo, TransportInfo,
};

/// A call received by a mock speaker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    TransportInfo,
    TrackInfo,
    Play,
    Pause,
    Stop,
    Next,
    Previous,
    Volume,
    SetVolume(u8),
    Mute,
    SetMute(bool),
    Join(String),
    Unjoin,
    Group,
    Favorites,
    PlayUri { uri: String, metadata: String },
}

/// Calls received by several mocks, in the order they arrived
pub type CallLog = Arc<Mutex<Vec<(String, Call)>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[derive(Default)]
struct MockState {
    transport_state: String,
    track: TrackInfo,
    volume: u8,
    muted: bool,
    coordinator: Option<Weak<MockDevice>>,
    favorites: Vec<Favorite>,
    failure: Option<DeviceError>,
}

pub struct MockDevice {
    name: String,
    ip: String,
    state: Mutex<MockState>,
    calls: Mutex<Vec<Call>>,
    shared_log: Option<CallLog>,
}

/// Builder for a [`MockDevice`]
pub struct MockDeviceBuilder {
    name: String,
    ip: String,
    state: MockState,
    shared_log: Option<CallLog>,
}

impl MockDeviceBuilder {
    pub fn ip(mut self, ip: &str) -> Self {
        self.ip = ip.to_string();
        self
    }

    pub fn playing(mut self, track: TrackInfo) -> Self {
        self.state.transport_state = "PLAYING".to_string();
        self.state.track = track;
        self
    }

    pub fn transport_state(mut self, state: &str) -> Self {
        self.state.transport_state = state.to_string();
        self
    }

    pub fn volume(mut self, volume: u8) -> Self {
        self.state.volume = volume;
        self
    }

    pub fn muted(mut self, muted: bool) -> Self {
        self.state.muted = muted;
        self
    }

    pub fn favorites(mut self, favorites: Vec<Favorite>) -> Self {
        self.state.favorites = favorites;
        self
    }

    /// Also record calls into `log`
    pub fn logging_to(mut self, log: &CallLog) -> Self {
        self.shared_log = Some(Arc::clone(log));
        self
    }

    /// Member of `coordinator`'s group
    pub fn following(mut self, coordinator: &Arc<MockDevice>) -> Self {
        self.state.coordinator = Some(Arc::downgrade(coordinator));
        self
    }

    /// Not in any group
    pub fn build(self) -> Arc<MockDevice> {
        Arc::new(self.into_device())
    }

    /// Coordinator of its own group
    pub fn build_coordinator(self) -> Arc<MockDevice> {
        Arc::new_cyclic(|weak| {
            let device = self.into_device();
            device.state.lock().unwrap().coordinator = Some(weak.clone());
            device
        })
    }

    fn into_device(self) -> MockDevice {
        MockDevice {
            name: self.name,
            ip: self.ip,
            state: Mutex::new(self.state),
            calls: Mutex::new(Vec::new()),
            shared_log: self.shared_log,
        }
    }
}

impl MockDevice {
    pub fn builder(name: &str) -> MockDeviceBuilder {
        MockDeviceBuilder {
            name: name.to_string(),
            ip: "192.168.1.99".to_string(),
            state: MockState {
                transport_state: "STOPPED".to_string(),
                volume: 25,
                ..Default::default()
            },
            shared_log: None,
        }
    }

    /// Ungrouped, stopped speaker
    pub fn standalone(name: &str) -> Arc<MockDevice> {
        Self::builder(name).build()
    }

    /// Make every following call fail with `error`
    pub fn fail_with(&self, error: DeviceError) {
        self.state.lock().unwrap().failure = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }

    pub fn received(&self, call: &Call) -> bool {
        self.count(call) > 0
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn current_volume(&self) -> u8 {
        self.state.lock().unwrap().volume
    }

    fn record(&self, call: Call) -> DeviceResult<()> {
        if let Some(log) = &self.shared_log {
            log.lock().unwrap().push((self.name.clone(), call.clone()));
        }
        self.calls.lock().unwrap().push(call);
        match &self.state.lock().unwrap().failure {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn coordinator(&self) -> Option<Arc<MockDevice>> {
        self.state
            .lock()
            .unwrap()
            .coordinator
            .as_ref()
            .and_then(Weak::upgrade)
    }

    /// Followers refuse transport commands, like real group members
    fn require_coordinator(&self, action: &str) -> DeviceResult<()> {
        match self.coordinator() {
            Some(coordinator) if coordinator.name != self.name => Err(DeviceError::Rejected(
                format!("{action} sent to {} which follows {}", self.name, coordinator.name),
            )),
            _ => Ok(()),
        }
    }

    fn transport(&self, call: Call, action: &str) -> DeviceResult<()> {
        self.record(call)?;
        self.require_coordinator(action)
    }
}

impl Device for MockDevice {
    fn name(&self) -> &str {
        &self.name
    }

    fn ip_address(&self) -> &str {
        &self.ip
    }

    fn transport_info(&self) -> DeviceResult<TransportInfo> {
        self.record(Call::TransportInfo)?;
        Ok(TransportInfo {
            current_transport_state: self.state.lock().unwrap().transport_state.clone(),
            current_transport_status: "OK".to_string(),
            current_speed: "1".to_string(),
        })
    }

    fn track_info(&self) -> DeviceResult<TrackInfo> {
        self.record(Call::TrackInfo)?;
        Ok(self.state.lock().unwrap().track.clone())
    }

    fn play(&self) -> DeviceResult<()> {
        self.transport(Call::Play, "Play")
    }

    fn pause(&self) -> DeviceResult<()> {
        self.transport(Call::Pause, "Pause")
    }

    fn stop(&self) -> DeviceResult<()> {
        self.transport(Call::Stop, "Stop")
    }

    fn next(&self) -> DeviceResult<()> {
        self.transport(Call::Next, "Next")
    }

    fn previous(&self) -> DeviceResult<()> {
        self.transport(Call::Previous, "Previous")
    }

    fn volume(&self) -> DeviceResult<u8> {
        self.record(Call::Volume)?;
        Ok(self.state.lock().unwrap().volume)
    }

    fn set_volume(&self, volume: u8) -> DeviceResult<()> {
        self.record(Call::SetVolume(volume))?;
        self.state.lock().unwrap().volume = volume;
        Ok(())
    }

    fn mute(&self) -> DeviceResult<bool> {
        self.record(Call::Mute)?;
        Ok(self.state.lock().unwrap().muted)
    }

    fn set_mute(&self, muted: bool) -> DeviceResult<()> {
        self.record(Call::SetMute(muted))?;
        self.state.lock().unwrap().muted = muted;
        Ok(())
    }

    fn join(&self, coordinator: &dyn Device) -> DeviceResult<()> {
        self.record(Call::Join(coordinator.name().to_string()))
    }

    fn unjoin(&self) -> DeviceResult<()> {
        self.record(Call::Unjoin)
    }

    fn group(&self) -> DeviceResult<Option<Group>> {
        self.record(Call::Group)?;
        Ok(self
            .coordinator()
            .map(|coordinator| Group::new(coordinator as DeviceRef)))
    }

    fn favorites(&self) -> DeviceResult<Vec<Favorite>> {
        self.record(Call::Favorites)?;
        Ok(self.state.lock().unwrap().favorites.clone())
    }

    fn play_uri(&self, uri: &str, metadata: &str) -> DeviceResult<()> {
        self.transport(
            Call::PlayUri {
                uri: uri.to_string(),
                metadata: metadata.to_string(),
            },
            "SetAVTransportURI",
        )
    }
}

/// Discovery that returns whatever it was last told to
pub struct MockDiscovery {
    result: Mutex<DeviceResult<Vec<DeviceRef>>>,
    calls: AtomicUsize,
    timeouts: Mutex<Vec<Duration>>,
}

impl MockDiscovery {
    pub fn new(devices: &[&Arc<MockDevice>]) -> Arc<Self> {
        Arc::new(Self {
            result: Mutex::new(Ok(as_refs(devices))),
            calls: AtomicUsize::new(0),
            timeouts: Mutex::new(Vec::new()),
        })
    }

    pub fn set_devices(&self, devices: &[&Arc<MockDevice>]) {
        *self.result.lock().unwrap() = Ok(as_refs(devices));
    }

    pub fn set_error(&self, error: DeviceError) {
        *self.result.lock().unwrap() = Err(error);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.timeouts.lock().unwrap().clone()
    }
}

impl Discovery for MockDiscovery {
    fn discover(&self, timeout: Duration) -> DeviceResult<Vec<DeviceRef>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.timeouts.lock().unwrap().push(timeout);
        self.result.lock().unwrap().clone()
    }
}

pub fn as_refs(devices: &[&Arc<MockDevice>]) -> Vec<DeviceRef> {
    devices
        .iter()
        .map(|device| Arc::clone(*device) as DeviceRef)
        .collect()
}

pub fn device_ref(device: &Arc<MockDevice>) -> DeviceRef {
    Arc::clone(device) as DeviceRef
}

/// Track with a 3 minute duration, one minute in
pub fn track(title: &str) -> TrackInfo {
    TrackInfo {
        title: title.to_string(),
        artist: "Some Artist".to_string(),
        album: "Some Album".to_string(),
        duration: "0:03:00".to_string(),
        position: "0:01:00".to_string(),
        album_art: String::new(),
    }
}

pub fn favorites() -> Vec<Favorite> {
    vec![
        Favorite::new("Alt Wave", "x-sonosapi-radio:alt-wave", "<DIDL-Lite>alt</DIDL-Lite>"),
        Favorite::new("Morning News", "x-sonosapi-stream:news", "<DIDL-Lite>news</DIDL-Lite>"),
    ]
}

pub fn registry(
    config: RegistryConfig,
    devices: &[&Arc<MockDevice>],
) -> (Arc<SpeakerRegistry>, Arc<MockDiscovery>) {
    let discovery = MockDiscovery::new(devices);
    let registry = SpeakerRegistry::new(config, discovery.clone());
    (Arc::new(registry), discovery)
}
