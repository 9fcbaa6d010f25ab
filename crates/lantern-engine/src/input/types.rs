use std::fmt;

/// Keyboard key identifier.
///
/// The window backend maps platform scancodes/keycodes into these variants
/// where possible. For unsupported keys, `Key::Unknown(u32)` carries a stable
/// platform code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    // Common control keys
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers as keys
    Shift,
    Control,
    Alt,
    Meta,

    // Letters
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    // Digits
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    // Function keys
    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    /// Platform-dependent key not represented above.
    Unknown(u32),
}

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Controller/gamepad button identity.
///
/// `id` distinguishes controllers when more than one is attached.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ControllerButton {
    pub id: u32,
    pub button: u8,
}

/// Any discrete input source that can be pressed and released.
///
/// Equality and hashing identify the physical button, so repeated presses of
/// the same key compare equal and a held-set can be keyed on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Button {
    Keyboard(Key),
    Mouse(MouseButton),
    Controller(ControllerButton),
}

impl From<Key> for Button {
    fn from(key: Key) -> Self {
        Button::Keyboard(key)
    }
}

impl From<MouseButton> for Button {
    fn from(button: MouseButton) -> Self {
        Button::Mouse(button)
    }
}

impl From<ControllerButton> for Button {
    fn from(button: ControllerButton) -> Self {
        Button::Controller(button)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
