pub mod constants;
pub mod controller;
pub mod layout;
pub mod light;
pub mod media;
pub mod room;

pub use controller::*;
pub use layout::*;
pub use light::*;
pub use media::*;
pub use room::*;
