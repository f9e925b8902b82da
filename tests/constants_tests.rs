// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn volumes_are_within_range() {
    assert!(VOLUME_MIN == 0.0 && VOLUME_MAX == 1.0);
    for v in [BGM_VOLUME, DEFAULT_VOLUME] {
        assert!((VOLUME_MIN..=VOLUME_MAX).contains(&v));
    }
    assert!(VOLUME_SLIDER_STEP > 0.0 && VOLUME_SLIDER_STEP < VOLUME_KEY_STEP);
    assert!(VOLUME_KEY_STEP < VOLUME_MAX);
}

#[test]
fn asset_paths_are_rooted_and_distinct() {
    let assets = [
        BGM_URI,
        RADIO_URI,
        GRAMOPHONE_URI,
        LIGHT_SWITCH_URI,
        LIGHT_ON_IMAGE,
        LIGHT_OFF_IMAGE,
        FRAME_IMAGE,
        CLICK_HINT_IMAGE,
    ];
    for (i, a) in assets.iter().enumerate() {
        assert!(a.starts_with('/'), "{a} is not rooted");
        for b in &assets[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn frame_dims_when_dark() {
    assert!(FRAME_BRIGHTNESS_DIM < FRAME_BRIGHTNESS_LIT);
    assert!(MOBILE_BREAKPOINT_PX > 0.0);
    assert_ne!(PLAY_GLYPH, PAUSE_GLYPH);
}

#[test]
fn dom_ids_are_unique() {
    let ids = [
        ROOT_ID,
        BACKGROUND_ID,
        FRAME_ID,
        CLICK_HINT_ID,
        SWITCH_ID,
        PANEL_ID,
        MOBILE_NOTICE_ID,
        HINT_OVERLAY_ID,
        RADIO_PREFIX,
        GRAMOPHONE_PREFIX,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
