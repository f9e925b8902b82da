use super::RoomWiring;
use crate::constants::HINT_OVERLAY_ID;
use crate::core::{action_for_key, has_command_modifier, is_overlay_key};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(ev: &web::KeyboardEvent, wiring: &RoomWiring) {
    if has_command_modifier(ev.ctrl_key(), ev.meta_key(), ev.alt_key()) {
        return;
    }
    let key = ev.key();
    let Some(action) = action_for_key(&key) else {
        return;
    };
    if action.is_toggle() && ev.repeat() {
        return;
    }
    log::info!("[keys] {} -> {:?}", key, action);
    wiring.dispatch(action);
    ev.prevent_default();
}

// Wire an 'H' key handler to toggle the shortcut overlay
pub fn wire_overlay_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if has_command_modifier(ev.ctrl_key(), ev.meta_key(), ev.alt_key()) {
                    return;
                }
                if is_overlay_key(&ev.key()) {
                    if let Some(el) = doc.get_element_by_id(HINT_OVERLAY_ID) {
                        dom::toggle_hidden(&el);
                    }
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_global_keydown(wiring: RoomWiring) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &wiring);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
