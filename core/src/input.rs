//! Platform-agnostic input types.
//!
//! Windowing layers (e.g. winit) map their native codes onto these so the
//! camera and viewer never depend on a windowing crate.

/// Physical keyboard key identifier.
///
/// Only the keys the viewer binds are listed. Platform layers return `None`
/// for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum KeyCode {
    I,
    R,
    T,
    Escape,

    // Exposure
    Minus,
    Equal,
    NumpadAdd,
    NumpadSubtract,
}

/// Pointer (mouse) button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button.
    Primary,
    /// Right button.
    Secondary,
    /// Wheel button.
    Middle,
    /// Any other button, by platform index.
    Other(u16),
}

/// Held modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
    pub super_key: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        super_key: false,
    };

    /// Whether any modifier is held.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.super_key
    }
}

/// Held state of the three pointer buttons the viewer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerButtons {
    pub primary: bool,
    pub secondary: bool,
    pub middle: bool,
}

impl PointerButtons {
    /// Record a press or release. Buttons outside the three tracked ones are ignored.
    pub fn set(&mut self, button: PointerButton, pressed: bool) {
        match button {
            PointerButton::Primary => self.primary = pressed,
            PointerButton::Secondary => self.secondary = pressed,
            PointerButton::Middle => self.middle = pressed,
            PointerButton::Other(_) => {}
        }
    }

    /// Whether `button` is currently held.
    pub fn is_pressed(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Primary => self.primary,
            PointerButton::Secondary => self.secondary,
            PointerButton::Middle => self.middle,
            PointerButton::Other(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_track_press_and_release() {
        let mut buttons = PointerButtons::default();
        buttons.set(PointerButton::Middle, true);
        assert!(buttons.is_pressed(PointerButton::Middle));
        assert!(!buttons.is_pressed(PointerButton::Primary));

        buttons.set(PointerButton::Other(7), true);
        assert!(!buttons.is_pressed(PointerButton::Other(7)));

        buttons.set(PointerButton::Middle, false);
        assert_eq!(buttons, PointerButtons::default());
    }

    #[test]
    fn modifiers_any() {
        assert!(!Modifiers::NONE.any());
        let m = Modifiers {
            alt: true,
            ..Modifiers::NONE
        };
        assert!(m.any());
    }
}
