use super::constants::{
    BGM_URI, BGM_VOLUME, DEFAULT_VOLUME, GRAMOPHONE_URI, RADIO_URI,
};
use super::media::{clamp_volume, snap_volume, MediaHandle, MediaLoader};

/// Static description of one playable track.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackSpec {
    /// Short tag used in log lines.
    pub name: &'static str,
    pub uri: &'static str,
    pub looping: bool,
    pub initial_volume: f64,
}

impl TrackSpec {
    pub fn bgm() -> Self {
        Self {
            name: "bgm",
            uri: BGM_URI,
            looping: true,
            initial_volume: BGM_VOLUME,
        }
    }

    pub fn radio() -> Self {
        Self {
            name: "radio",
            uri: RADIO_URI,
            looping: false,
            initial_volume: DEFAULT_VOLUME,
        }
    }

    pub fn gramophone() -> Self {
        Self {
            name: "gramophone",
            uri: GRAMOPHONE_URI,
            looping: false,
            initial_volume: DEFAULT_VOLUME,
        }
    }
}

/// Play/pause + volume state bound to one exclusively owned media handle.
///
/// The handle is loaded on the first `toggle` that needs it. A failed load
/// leaves the controller without a handle and is retried on the next start.
/// `enabled` always flips, whether or not audio actually starts.
pub struct PlaybackController<L: MediaLoader> {
    spec: TrackSpec,
    loader: L,
    enabled: bool,
    volume: f64,
    handle: Option<L::Handle>,
}

impl<L: MediaLoader> PlaybackController<L> {
    pub fn new(spec: TrackSpec, loader: L) -> Self {
        let volume = clamp_volume(spec.initial_volume).unwrap_or(DEFAULT_VOLUME);
        Self {
            spec,
            loader,
            enabled: false,
            volume,
            handle: None,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        self.volume
    }

    #[inline]
    pub fn is_loaded(&self) -> bool {
        self.handle.is_some()
    }

    #[inline]
    pub fn handle(&self) -> Option<&L::Handle> {
        self.handle.as_ref()
    }

    /// Flip `enabled` and start or stop playback accordingly. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if self.enabled {
            if let Some(handle) = self.ensure_handle() {
                handle.play();
            }
        } else if let Some(handle) = &self.handle {
            handle.pause();
        }
        log::info!("[{}] enabled={}", self.spec.name, self.enabled);
        self.enabled
    }

    /// Store and apply a volume clamped to `[0, 1]`. Returns the volume now in effect.
    pub fn set_volume(&mut self, volume: f64) -> f64 {
        match clamp_volume(volume) {
            Some(v) => {
                self.volume = v;
                if let Some(handle) = &self.handle {
                    handle.set_volume(v);
                }
            }
            None => log::warn!("[{}] ignoring volume {}", self.spec.name, volume),
        }
        self.volume
    }

    /// Step the volume by `delta`, landing on the slider grid.
    pub fn nudge_volume(&mut self, delta: f64) -> f64 {
        self.set_volume(snap_volume(self.volume + delta))
    }

    fn ensure_handle(&mut self) -> Option<&L::Handle> {
        if self.handle.is_none() {
            match self.loader.load(self.spec.uri) {
                Ok(handle) => {
                    handle.set_looping(self.spec.looping);
                    handle.set_volume(self.volume);
                    self.handle = Some(handle);
                }
                Err(e) => {
                    log::warn!("[{}] could not load {}: {:?}", self.spec.name, self.spec.uri, e);
                }
            }
        }
        self.handle.as_ref()
    }
}
