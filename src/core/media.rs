/// A single playable media object, e.g. one `<audio>` element.
///
/// `play` is fire-and-forget: implementations may start playback
/// asynchronously and must not report whether it actually started.
pub trait MediaHandle {
    fn play(&self);
    fn pause(&self);
    fn volume(&self) -> f64;
    fn set_volume(&self, volume: f64);
    fn looping(&self) -> bool;
    fn set_looping(&self, looping: bool);
}

/// Creates media handles for a URI.
pub trait MediaLoader {
    type Handle: MediaHandle;

    fn load(&self, uri: &str) -> anyhow::Result<Self::Handle>;
}

/// Clamp a requested volume into `[0, 1]`. Non-finite input yields `None`.
#[inline]
pub fn clamp_volume(volume: f64) -> Option<f64> {
    volume
        .is_finite()
        .then(|| volume.clamp(super::constants::VOLUME_MIN, super::constants::VOLUME_MAX))
}

/// Round onto the slider grid so repeated nudges do not drift.
#[inline]
pub fn snap_volume(volume: f64) -> f64 {
    let steps = (1.0 / super::constants::VOLUME_SLIDER_STEP).round();
    (volume * steps).round() / steps
}
