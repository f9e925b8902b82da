// Shared host-side fixtures. The main crate is wasm-only, so the pure-Rust
// state modules are included directly.

#![allow(dead_code)]

pub mod core {
    pub mod constants {
        include!("../../src/core/constants.rs");
    }
    pub mod media {
        include!("../../src/core/media.rs");
    }
    pub mod controller {
        include!("../../src/core/controller.rs");
    }
    pub mod light {
        include!("../../src/core/light.rs");
    }
    pub mod layout {
        include!("../../src/core/layout.rs");
    }
    pub mod room {
        include!("../../src/core/room.rs");
    }

    pub use controller::*;
    pub use layout::*;
    pub use light::*;
    pub use media::*;
    pub use room::*;
}

use self::core::{MediaHandle, MediaLoader};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Everything the fake media layer was asked to do, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Load(String),
    Play(String),
    Pause(String),
    SetVolume(String, f64),
    SetLooping(String, bool),
}

pub struct FakeHandle {
    uri: String,
    calls: Rc<RefCell<Vec<Call>>>,
    volume: Cell<f64>,
    looping: Cell<bool>,
}

impl MediaHandle for FakeHandle {
    fn play(&self) {
        self.calls.borrow_mut().push(Call::Play(self.uri.clone()));
    }

    fn pause(&self) {
        self.calls.borrow_mut().push(Call::Pause(self.uri.clone()));
    }

    fn volume(&self) -> f64 {
        self.volume.get()
    }

    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
        self.calls
            .borrow_mut()
            .push(Call::SetVolume(self.uri.clone(), volume));
    }

    fn looping(&self) -> bool {
        self.looping.get()
    }

    fn set_looping(&self, looping: bool) {
        self.looping.set(looping);
        self.calls
            .borrow_mut()
            .push(Call::SetLooping(self.uri.clone(), looping));
    }
}

/// Records calls; `fail` makes every subsequent load error out.
#[derive(Clone, Default)]
pub struct FakeLoader {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub fail: Rc<Cell<bool>>,
}

impl MediaLoader for FakeLoader {
    type Handle = FakeHandle;

    fn load(&self, uri: &str) -> anyhow::Result<FakeHandle> {
        if self.fail.get() {
            anyhow::bail!("no such asset: {uri}");
        }
        self.calls.borrow_mut().push(Call::Load(uri.to_string()));
        Ok(FakeHandle {
            uri: uri.to_string(),
            calls: self.calls.clone(),
            volume: Cell::new(1.0),
            looping: Cell::new(false),
        })
    }
}

impl FakeLoader {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|c| pred(c)).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}
