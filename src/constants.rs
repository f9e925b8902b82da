// DOM ids, classes and labels used by the web view.

// Mount point; falls back to <body> when absent
pub const ROOT_ID: &str = "room";

pub const BACKGROUND_ID: &str = "room-background";
pub const FRAME_ID: &str = "room-frame";
pub const CLICK_HINT_ID: &str = "room-click-hint";
pub const SWITCH_ID: &str = "room-switch";
pub const PANEL_ID: &str = "room-panel";
pub const MOBILE_NOTICE_ID: &str = "room-mobile-notice";
pub const HINT_OVERLAY_ID: &str = "hint-overlay";

// Per-device ids are `{prefix}-toggle` / `{prefix}-volume`
pub const RADIO_PREFIX: &str = "radio";
pub const GRAMOPHONE_PREFIX: &str = "gramophone";

pub const HIDDEN_CLASS: &str = "hidden";
pub const PLAYING_CLASS: &str = "playing";

pub const MOBILE_NOTICE_TEXT: &str = "Open in desktop view to get full experience";

pub const HINT_TEXT: &str =
    "L light \u{2022} M music \u{2022} R radio \u{2022} G gramophone \u{2022} [ ] radio vol \u{2022} { } gramophone vol \u{2022} H hide";
