pub mod keyboard;
pub mod pointer;

pub use keyboard::*;
pub use pointer::*;

use crate::audio::HtmlAudioLoader;
use crate::core::{Room, RoomAction};
use crate::view::RoomView;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handles every event closure needs.
#[derive(Clone)]
pub struct RoomWiring {
    pub room: Rc<RefCell<Room<HtmlAudioLoader>>>,
    pub view: Rc<RoomView>,
}

impl RoomWiring {
    /// Apply one action and re-render. The room borrow ends before rendering.
    pub fn dispatch(&self, action: RoomAction) {
        let snap = {
            let mut room = self.room.borrow_mut();
            room.apply(action);
            room.snapshot()
        };
        self.view.render(&snap);
    }
}
