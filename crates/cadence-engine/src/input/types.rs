/// Keyboard key identifier.
///
/// Covers the keys the benchmark binds plus common control keys. Unmapped
/// platform keys arrive as `Key::Unknown` with the platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Q,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// A single translated keyboard event.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    pub state: KeyState,
    /// OS auto-repeat while the key is held.
    pub repeat: bool,
}

impl KeyEvent {
    pub const fn pressed(key: Key) -> Self {
        Self { key, state: KeyState::Pressed, repeat: false }
    }

    pub const fn released(key: Key) -> Self {
        Self { key, state: KeyState::Released, repeat: false }
    }

    /// True for a fresh press (not a release, not an auto-repeat).
    pub fn is_fresh_press(&self) -> bool {
        self.state == KeyState::Pressed && !self.repeat
    }
}
