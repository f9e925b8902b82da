use crate::constants::*;
use crate::core::constants::{
    CLICK_HINT_IMAGE, FRAME_IMAGE, VOLUME_MAX, VOLUME_MIN, VOLUME_SLIDER_STEP,
};
use crate::core::{Device, LayoutMode, RoomSnapshot};
use crate::dom;
use web_sys as web;

pub struct PlayerControls {
    pub toggle: web::HtmlElement,
    pub volume: web::HtmlInputElement,
}

/// DOM for one room, built once for a fixed layout mode.
pub struct RoomView {
    pub background: web::HtmlImageElement,
    pub frame: web::HtmlImageElement,
    pub switch: web::HtmlElement,
    pub radio: PlayerControls,
    pub gramophone: PlayerControls,
}

#[inline]
fn device_prefix(device: Device) -> &'static str {
    match device {
        Device::Radio => RADIO_PREFIX,
        Device::Gramophone => GRAMOPHONE_PREFIX,
    }
}

fn image(
    document: &web::Document,
    id: &str,
    src: &str,
    alt: &str,
) -> anyhow::Result<web::HtmlImageElement> {
    let img: web::HtmlImageElement = dom::create(document, "img", id)?;
    img.set_src(src);
    img.set_alt(alt);
    Ok(img)
}

fn build_player(
    document: &web::Document,
    panel: &web::Element,
    device: Device,
    initial_volume: f64,
) -> anyhow::Result<PlayerControls> {
    let prefix = device_prefix(device);
    let group: web::HtmlElement = dom::create(document, "div", prefix)?;
    group.set_class_name("player");

    let toggle: web::HtmlElement = dom::create(document, "button", &format!("{prefix}-toggle"))?;
    let volume: web::HtmlInputElement = dom::create(document, "input", &format!("{prefix}-volume"))?;
    volume.set_type("range");
    volume.set_min(&VOLUME_MIN.to_string());
    volume.set_max(&VOLUME_MAX.to_string());
    volume.set_step(&VOLUME_SLIDER_STEP.to_string());
    volume.set_value_as_number(initial_volume);

    _ = group.append_child(&toggle);
    _ = group.append_child(&volume);
    _ = panel.append_child(&group);
    Ok(PlayerControls { toggle, volume })
}

impl RoomView {
    pub fn build(
        document: &web::Document,
        mount: &web::Element,
        layout: LayoutMode,
        initial: &RoomSnapshot,
    ) -> anyhow::Result<Self> {
        _ = mount.class_list().add_1(layout.css_class());

        let background = image(
            document,
            BACKGROUND_ID,
            initial.light_image.asset(),
            "Light bulb",
        )?;
        let frame = image(document, FRAME_ID, FRAME_IMAGE, "frame")?;
        let click_hint = image(document, CLICK_HINT_ID, CLICK_HINT_IMAGE, "click-text")?;
        dom::set_hidden(&click_hint, !layout.shows_click_hint());

        let switch: web::HtmlElement = dom::create(document, "button", SWITCH_ID)?;
        switch.set_title("Light switch");
        if let Some(label) = layout.switch_label() {
            switch.set_text_content(Some(label));
        }

        let panel: web::HtmlElement = dom::create(document, "div", PANEL_ID)?;
        let radio = build_player(document, &panel, Device::Radio, initial.radio.volume)?;
        let gramophone =
            build_player(document, &panel, Device::Gramophone, initial.gramophone.volume)?;

        let notice: web::HtmlElement = dom::create(document, "p", MOBILE_NOTICE_ID)?;
        notice.set_text_content(Some(MOBILE_NOTICE_TEXT));
        dom::set_hidden(&notice, !layout.shows_mobile_notice());

        let hint: web::HtmlElement = dom::create(document, "div", HINT_OVERLAY_ID)?;
        hint.set_text_content(Some(HINT_TEXT));
        dom::set_hidden(&hint, true);

        _ = mount.append_child(&switch);
        _ = mount.append_child(&click_hint);
        _ = mount.append_child(&frame);
        _ = mount.append_child(&background);
        _ = mount.append_child(&panel);
        _ = mount.append_child(&notice);
        _ = mount.append_child(&hint);

        let view = Self {
            background,
            frame,
            switch,
            radio,
            gramophone,
        };
        view.render(initial);
        Ok(view)
    }

    #[inline]
    pub fn player(&self, device: Device) -> &PlayerControls {
        match device {
            Device::Radio => &self.radio,
            Device::Gramophone => &self.gramophone,
        }
    }

    pub fn render(&self, snap: &RoomSnapshot) {
        let src = snap.light_image.asset();
        if !self.background.src().ends_with(src) {
            self.background.set_src(src);
        }
        _ = self.frame.set_attribute("style", &snap.frame_style());
        let frame_cl = self.frame.class_list();
        _ = frame_cl.toggle_with_force(PLAYING_CLASS, snap.music_on);

        for device in Device::ALL {
            let state = snap.player(device);
            let controls = self.player(device);
            controls
                .toggle
                .set_text_content(Some(&state.button_label(device)));
            _ = controls
                .toggle
                .class_list()
                .toggle_with_force(PLAYING_CLASS, state.playing);
            if (controls.volume.value_as_number() - state.volume).abs() > f64::EPSILON {
                controls.volume.set_value_as_number(state.volume);
            }
        }
    }
}
