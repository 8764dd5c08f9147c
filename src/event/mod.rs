//! Window events.

pub use self::window_event::{Action, Key, WindowEvent};

mod window_event;
