use crate::core::{MediaHandle, MediaLoader};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Loads tracks as detached `<audio>` elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlAudioLoader;

impl MediaLoader for HtmlAudioLoader {
    type Handle = web::HtmlAudioElement;

    fn load(&self, uri: &str) -> anyhow::Result<Self::Handle> {
        web::HtmlAudioElement::new_with_src(uri)
            .map_err(|e| anyhow::anyhow!("HtmlAudioElement({}) error: {:?}", uri, e))
    }
}

impl MediaHandle for web::HtmlAudioElement {
    // The returned promise rejects under autoplay policy or for a missing
    // asset; that is logged and otherwise ignored.
    fn play(&self) {
        match web::HtmlMediaElement::play(self) {
            Ok(promise) => {
                let src = self.src();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::debug!("play() rejected for {}: {:?}", src, e);
                    }
                });
            }
            Err(e) => log::debug!("play() threw: {:?}", e),
        }
    }

    fn pause(&self) {
        _ = web::HtmlMediaElement::pause(self);
    }

    fn volume(&self) -> f64 {
        web::HtmlMediaElement::volume(self)
    }

    fn set_volume(&self, volume: f64) {
        web::HtmlMediaElement::set_volume(self, volume);
    }

    fn looping(&self) -> bool {
        self.loop_()
    }

    fn set_looping(&self, looping: bool) {
        self.set_loop(looping);
    }
}
