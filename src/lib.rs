#![cfg(target_arch = "wasm32")]
use crate::audio::HtmlAudioLoader;
use crate::core::{LayoutMode, Room, RoomConfig};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod view;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vintage-room starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn mount_point(document: &web::Document) -> anyhow::Result<web::Element> {
    if let Some(el) = document.get_element_by_id(constants::ROOT_ID) {
        return Ok(el);
    }
    document
        .body()
        .map(Into::into)
        .ok_or_else(|| anyhow::anyhow!("missing #{} and <body>", constants::ROOT_ID))
}

async fn init() -> anyhow::Result<()> {
    // Only one room per page
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mount = mount_point(&document)?;

    // Evaluated once; resizing does not switch layouts
    let layout = LayoutMode::from_viewport_width(dom::viewport_width().unwrap_or(f64::NAN));
    log::info!("[layout] {:?}", layout);

    let room = Room::new(RoomConfig::default(), HtmlAudioLoader);
    let initial = room.snapshot();
    let view = view::RoomView::build(&document, &mount, layout, &initial)?;

    let wiring = events::RoomWiring {
        room: Rc::new(RefCell::new(room)),
        view: Rc::new(view),
    };
    events::wire_input_handlers(&wiring);
    events::wire_global_keydown(wiring);
    events::wire_overlay_toggle_h(&document);

    Ok(())
}
