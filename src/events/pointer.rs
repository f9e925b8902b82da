use super::RoomWiring;
use crate::core::{Device, RoomAction};
use crate::dom;

pub fn wire_input_handlers(w: &RoomWiring) {
    wire_switch(w);
    wire_frame(w);
    for device in Device::ALL {
        wire_player(w, device);
    }
}

fn wire_switch(w: &RoomWiring) {
    let wiring = w.clone();
    dom::add_click_listener(&w.view.switch, move || {
        wiring.dispatch(RoomAction::ToggleLight);
    });
}

fn wire_frame(w: &RoomWiring) {
    let wiring = w.clone();
    dom::add_click_listener(&w.view.frame, move || {
        wiring.dispatch(RoomAction::ToggleMusic);
    });
}

fn wire_player(w: &RoomWiring, device: Device) {
    let controls = w.view.player(device);

    let wiring = w.clone();
    dom::add_click_listener(&controls.toggle, move || {
        wiring.dispatch(RoomAction::TogglePlayer(device));
    });

    let wiring = w.clone();
    dom::add_range_listener(&controls.volume, move |value| {
        wiring.dispatch(RoomAction::SetVolume(device, value));
    });
}
