// Asset paths and default levels for the room. Paths are relative to the
// served site root.

// Audio
pub const BGM_URI: &str = "/devadoothan bgm.mp3";
pub const RADIO_URI: &str = "/radio.mp3";
pub const GRAMOPHONE_URI: &str = "/gramaphone.mp3";
pub const LIGHT_SWITCH_URI: &str = "/light-switch.mp3";

// Images
pub const LIGHT_ON_IMAGE: &str = "/light-on.png";
pub const LIGHT_OFF_IMAGE: &str = "/light-off.png";
pub const FRAME_IMAGE: &str = "/frame.png";
pub const CLICK_HINT_IMAGE: &str = "/click-text.png";

// Levels
pub const BGM_VOLUME: f64 = 0.8;
pub const DEFAULT_VOLUME: f64 = 1.0; // HTMLMediaElement default
pub const VOLUME_MIN: f64 = 0.0;
pub const VOLUME_MAX: f64 = 1.0;
pub const VOLUME_SLIDER_STEP: f64 = 0.01;
pub const VOLUME_KEY_STEP: f64 = 0.05;

// Frame brightness (percent) with the light on/off
pub const FRAME_BRIGHTNESS_LIT: u32 = 100;
pub const FRAME_BRIGHTNESS_DIM: u32 = 60;

// Player button glyphs
pub const PLAY_GLYPH: &str = "\u{23F5}";
pub const PAUSE_GLYPH: &str = "\u{23F8}";

// Viewports narrower than this render the mobile layout
pub const MOBILE_BREAKPOINT_PX: f64 = 640.0;
