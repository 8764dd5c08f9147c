/// Input or window-system event forwarded to the render loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindowEvent {
    /// The user asked the window to close.
    Close,
    /// The framebuffer of the window changed size, in physical pixels.
    FramebufferSize(u32, u32),
    /// A keyboard key changed state.
    Key(Key, Action),
}

/// State change of a key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    /// The key was released.
    Release,
    /// The key was pressed.
    Press,
}

/// Keyboard keys the demos react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Key {
    /// The escape key.
    Escape,
    /// The space bar.
    Space,
    /// Any other key.
    Unknown,
}

impl WindowEvent {
    /// Whether this event asks the render loop to stop.
    ///
    /// That is a close request or releasing the escape key.
    #[inline]
    pub fn is_close_request(&self) -> bool {
        matches!(
            self,
            WindowEvent::Close | WindowEvent::Key(Key::Escape, Action::Release)
        )
    }
}
