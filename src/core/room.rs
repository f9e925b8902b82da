use super::constants::{PAUSE_GLYPH, PLAY_GLYPH, VOLUME_KEY_STEP};
use super::controller::{PlaybackController, TrackSpec};
use super::light::{LightController, LightImage, LightSpec};
use super::media::MediaLoader;

/// The two players on the bottom control panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Device {
    Radio,
    Gramophone,
}

impl Device {
    pub const ALL: [Device; 2] = [Device::Radio, Device::Gramophone];

    #[inline]
    pub fn label(self) -> &'static str {
        match self {
            Device::Radio => "Radio",
            Device::Gramophone => "Gramophone",
        }
    }
}

/// Everything a user can do to the room.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RoomAction {
    ToggleLight,
    /// Clicking the picture frame.
    ToggleMusic,
    TogglePlayer(Device),
    SetVolume(Device, f64),
    NudgeVolume(Device, f64),
}

impl RoomAction {
    /// Toggles are skipped on keyboard auto-repeat; volume nudges are not.
    #[inline]
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            RoomAction::ToggleLight | RoomAction::ToggleMusic | RoomAction::TogglePlayer(_)
        )
    }
}

/// Ctrl, Meta or Alt chords belong to the browser.
#[inline]
pub fn has_command_modifier(ctrl: bool, meta: bool, alt: bool) -> bool {
    ctrl || meta || alt
}

#[inline]
pub fn is_overlay_key(key: &str) -> bool {
    key == "h" || key == "H"
}

#[inline]
pub fn action_for_key(key: &str) -> Option<RoomAction> {
    match key {
        "l" | "L" => Some(RoomAction::ToggleLight),
        "m" | "M" => Some(RoomAction::ToggleMusic),
        "r" | "R" => Some(RoomAction::TogglePlayer(Device::Radio)),
        "g" | "G" => Some(RoomAction::TogglePlayer(Device::Gramophone)),
        "[" => Some(RoomAction::NudgeVolume(Device::Radio, -VOLUME_KEY_STEP)),
        "]" => Some(RoomAction::NudgeVolume(Device::Radio, VOLUME_KEY_STEP)),
        "{" => Some(RoomAction::NudgeVolume(Device::Gramophone, -VOLUME_KEY_STEP)),
        "}" => Some(RoomAction::NudgeVolume(Device::Gramophone, VOLUME_KEY_STEP)),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoomConfig {
    pub light: LightSpec,
    pub bgm: TrackSpec,
    pub radio: TrackSpec,
    pub gramophone: TrackSpec,
}

impl Default for RoomConfig {
    fn default() -> Self {
        Self {
            light: LightSpec::default(),
            bgm: TrackSpec::bgm(),
            radio: TrackSpec::radio(),
            gramophone: TrackSpec::gramophone(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerSnapshot {
    pub playing: bool,
    pub volume: f64,
}

impl PlayerSnapshot {
    /// Toggle button text: the glyph shows what a click will do.
    pub fn button_label(&self, device: Device) -> String {
        let glyph = if self.playing { PAUSE_GLYPH } else { PLAY_GLYPH };
        format!("{} {}", glyph, device.label())
    }
}

/// Plain copy of the room state handed to the view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoomSnapshot {
    pub light_on: bool,
    pub light_image: LightImage,
    pub frame_brightness: u32,
    pub music_on: bool,
    pub radio: PlayerSnapshot,
    pub gramophone: PlayerSnapshot,
}

impl RoomSnapshot {
    #[inline]
    pub fn frame_style(&self) -> String {
        format!("filter:brightness({}%)", self.frame_brightness)
    }

    #[inline]
    pub fn player(&self, device: Device) -> PlayerSnapshot {
        match device {
            Device::Radio => self.radio,
            Device::Gramophone => self.gramophone,
        }
    }
}

/// The four independent controllers that make up the room.
pub struct Room<L: MediaLoader + Clone> {
    light: LightController<L>,
    music: PlaybackController<L>,
    radio: PlaybackController<L>,
    gramophone: PlaybackController<L>,
}

impl<L: MediaLoader + Clone> Room<L> {
    pub fn new(config: RoomConfig, loader: L) -> Self {
        Self {
            light: LightController::new(config.light, loader.clone()),
            music: PlaybackController::new(config.bgm, loader.clone()),
            radio: PlaybackController::new(config.radio, loader.clone()),
            gramophone: PlaybackController::new(config.gramophone, loader),
        }
    }

    #[inline]
    pub fn light(&self) -> &LightController<L> {
        &self.light
    }

    #[inline]
    pub fn music(&self) -> &PlaybackController<L> {
        &self.music
    }

    #[inline]
    pub fn player(&self, device: Device) -> &PlaybackController<L> {
        match device {
            Device::Radio => &self.radio,
            Device::Gramophone => &self.gramophone,
        }
    }

    #[inline]
    fn player_mut(&mut self, device: Device) -> &mut PlaybackController<L> {
        match device {
            Device::Radio => &mut self.radio,
            Device::Gramophone => &mut self.gramophone,
        }
    }

    pub fn apply(&mut self, action: RoomAction) {
        match action {
            RoomAction::ToggleLight => {
                self.light.toggle();
            }
            RoomAction::ToggleMusic => {
                self.music.toggle();
            }
            RoomAction::TogglePlayer(device) => {
                self.player_mut(device).toggle();
            }
            RoomAction::SetVolume(device, volume) => {
                self.player_mut(device).set_volume(volume);
            }
            RoomAction::NudgeVolume(device, delta) => {
                let v = self.player_mut(device).nudge_volume(delta);
                log::info!("[{}] volume={:.2}", device.label().to_lowercase(), v);
            }
        }
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        let player = |c: &PlaybackController<L>| PlayerSnapshot {
            playing: c.is_enabled(),
            volume: c.volume(),
        };
        RoomSnapshot {
            light_on: self.light.is_enabled(),
            light_image: self.light.image(),
            frame_brightness: self.light.frame_brightness(),
            music_on: self.music.is_enabled(),
            radio: player(&self.radio),
            gramophone: player(&self.gramophone),
        }
    }
}
