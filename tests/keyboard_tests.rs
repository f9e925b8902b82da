// Host-side tests for key bindings and layout selection.

mod support;

use support::core::constants::*;
use support::core::*;

#[test]
fn action_for_key_toggles_case_insensitive() {
    for (lower, upper, expected) in [
        ("l", "L", RoomAction::ToggleLight),
        ("m", "M", RoomAction::ToggleMusic),
        ("r", "R", RoomAction::TogglePlayer(Device::Radio)),
        ("g", "G", RoomAction::TogglePlayer(Device::Gramophone)),
    ] {
        assert_eq!(action_for_key(lower), Some(expected));
        assert_eq!(action_for_key(upper), Some(expected));
        assert!(expected.is_toggle());
    }
}

#[test]
fn action_for_key_volume_brackets() {
    assert_eq!(
        action_for_key("["),
        Some(RoomAction::NudgeVolume(Device::Radio, -VOLUME_KEY_STEP))
    );
    assert_eq!(
        action_for_key("]"),
        Some(RoomAction::NudgeVolume(Device::Radio, VOLUME_KEY_STEP))
    );
    assert_eq!(
        action_for_key("{"),
        Some(RoomAction::NudgeVolume(Device::Gramophone, -VOLUME_KEY_STEP))
    );
    assert_eq!(
        action_for_key("}"),
        Some(RoomAction::NudgeVolume(Device::Gramophone, VOLUME_KEY_STEP))
    );
    assert!(!action_for_key("]").unwrap().is_toggle());
}

#[test]
fn action_for_key_unbound_keys() {
    // 'h' belongs to the overlay, not the room
    for key in ["h", "H", "", " ", "Enter", "ArrowUp", "x", "1", "notakey"] {
        assert_eq!(action_for_key(key), None, "{key:?} should be unbound");
    }
}

#[test]
fn layout_from_viewport_width() {
    assert_eq!(LayoutMode::from_viewport_width(320.0), LayoutMode::Mobile);
    assert_eq!(LayoutMode::from_viewport_width(639.5), LayoutMode::Mobile);
    assert_eq!(
        LayoutMode::from_viewport_width(MOBILE_BREAKPOINT_PX),
        LayoutMode::Desktop
    );
    assert_eq!(LayoutMode::from_viewport_width(1920.0), LayoutMode::Desktop);
    assert_eq!(LayoutMode::from_viewport_width(f64::NAN), LayoutMode::Desktop);
}

#[test]
fn layout_visibility_rules() {
    let d = LayoutMode::Desktop;
    let m = LayoutMode::Mobile;
    assert!(d.shows_click_hint() && !d.shows_mobile_notice());
    assert!(m.shows_mobile_notice() && !m.shows_click_hint());
    assert_eq!(d.switch_label(), None);
    assert_eq!(m.switch_label(), Some("ON/OFF"));
    assert_ne!(d.css_class(), m.css_class());
}

#[test]
fn device_labels() {
    assert_eq!(Device::ALL, [Device::Radio, Device::Gramophone]);
    assert_eq!(Device::Radio.label(), "Radio");
    assert_eq!(Device::Gramophone.label(), "Gramophone");
}

#[test]
fn command_modifiers_are_left_to_the_browser() {
    assert!(!has_command_modifier(false, false, false));
    assert!(has_command_modifier(true, false, false));
    assert!(has_command_modifier(false, true, false));
    assert!(has_command_modifier(false, false, true));
    assert!(has_command_modifier(true, true, true));
}

#[test]
fn overlay_key_is_h_only() {
    assert!(is_overlay_key("h"));
    assert!(is_overlay_key("H"));
    for key in ["", "l", "hh", "Home", "?"] {
        assert!(!is_overlay_key(key), "{key:?}");
    }
    // no room action shares the overlay key
    assert_eq!(action_for_key("h"), None);
}
