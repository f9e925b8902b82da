use super::constants::{
    FRAME_BRIGHTNESS_DIM, FRAME_BRIGHTNESS_LIT, LIGHT_OFF_IMAGE, LIGHT_ON_IMAGE, LIGHT_SWITCH_URI,
};
use super::media::{MediaHandle, MediaLoader};

/// The two room backgrounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightImage {
    On,
    Off,
}

impl LightImage {
    #[inline]
    pub fn for_state(on: bool) -> Self {
        if on {
            LightImage::On
        } else {
            LightImage::Off
        }
    }

    #[inline]
    pub fn asset(self) -> &'static str {
        match self {
            LightImage::On => LIGHT_ON_IMAGE,
            LightImage::Off => LIGHT_OFF_IMAGE,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LightSpec {
    pub switch_sound_uri: &'static str,
    pub initially_on: bool,
}

impl Default for LightSpec {
    fn default() -> Self {
        Self {
            switch_sound_uri: LIGHT_SWITCH_URI,
            initially_on: true,
        }
    }
}

/// On/off state of the room light.
///
/// Every toggle plays the switch click on a fresh handle which is dropped
/// right away; nothing about that sound is kept.
pub struct LightController<L: MediaLoader> {
    spec: LightSpec,
    loader: L,
    enabled: bool,
}

impl<L: MediaLoader> LightController<L> {
    pub fn new(spec: LightSpec, loader: L) -> Self {
        let enabled = spec.initially_on;
        Self {
            spec,
            loader,
            enabled,
        }
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn toggle(&mut self) -> bool {
        match self.loader.load(self.spec.switch_sound_uri) {
            Ok(click) => click.play(),
            Err(e) => log::warn!("[light] switch sound unavailable: {:?}", e),
        }
        self.enabled = !self.enabled;
        log::info!("[light] on={}", self.enabled);
        self.enabled
    }

    #[inline]
    pub fn image(&self) -> LightImage {
        LightImage::for_state(self.enabled)
    }

    /// CSS brightness percentage for the picture frame.
    #[inline]
    pub fn frame_brightness(&self) -> u32 {
        if self.enabled {
            FRAME_BRIGHTNESS_LIT
        } else {
            FRAME_BRIGHTNESS_DIM
        }
    }
}
