//! Input conversion and tracking.
//!
//! Maps platform-specific (winit) codes to engine-agnostic
//! [`lumen_core::input`] values and accumulates window events into the
//! per-frame [`CameraInput`] snapshot and queued [`CameraEvent`]s.

use lumen_core::camera::{CameraEvent, CameraInput};
use lumen_core::input::{KeyCode, Modifiers, PointerButton, PointerButtons};
use lumen_core::math::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{self, ModifiersState, PhysicalKey};

/// Pixel scroll deltas (touchpads) per line of wheel scroll.
const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// Convert a winit [`keyboard::KeyCode`] to an engine [`KeyCode`], if a
/// mapping exists.
pub fn map_winit_key(key: keyboard::KeyCode) -> Option<KeyCode> {
    Some(match key {
        keyboard::KeyCode::KeyI => KeyCode::I,
        keyboard::KeyCode::KeyR => KeyCode::R,
        keyboard::KeyCode::KeyT => KeyCode::T,
        keyboard::KeyCode::Escape => KeyCode::Escape,

        keyboard::KeyCode::Minus => KeyCode::Minus,
        keyboard::KeyCode::Equal => KeyCode::Equal,
        keyboard::KeyCode::NumpadAdd => KeyCode::NumpadAdd,
        keyboard::KeyCode::NumpadSubtract => KeyCode::NumpadSubtract,

        _ => return None,
    })
}

/// Convert a winit [`MouseButton`] to a [`PointerButton`].
pub fn map_mouse_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
        MouseButton::Back => PointerButton::Other(3),
        MouseButton::Forward => PointerButton::Other(4),
        MouseButton::Other(index) => PointerButton::Other(index),
    }
}

/// Convert winit modifier state to [`Modifiers`].
pub fn map_modifiers(state: ModifiersState) -> Modifiers {
    Modifiers {
        shift: state.shift_key(),
        control: state.control_key(),
        alt: state.alt_key(),
        super_key: state.super_key(),
    }
}

/// Scroll amount in lines. Pixel deltas are converted at [`PIXELS_PER_SCROLL_LINE`].
pub fn scroll_lines(delta: MouseScrollDelta) -> (f32, f32) {
    match delta {
        MouseScrollDelta::LineDelta(x, y) => (x, y),
        MouseScrollDelta::PixelDelta(pos) => (
            pos.x as f32 / PIXELS_PER_SCROLL_LINE,
            pos.y as f32 / PIXELS_PER_SCROLL_LINE,
        ),
    }
}

/// Accumulates window input between frames.
///
/// Feed it every [`WindowEvent`]; once per frame read [`camera_input`]
/// and drain the queued camera events and key presses.
///
/// Bindings: left Shift is the pan modifier, the left button is primary
/// (pan together with left Shift) and the middle button rotates. Right
/// Shift does not pan.
///
/// [`camera_input`]: InputTracker::camera_input
#[derive(Debug, Default)]
pub struct InputTracker {
    pointer: Vec2,
    buttons: PointerButtons,
    modifiers: Modifiers,
    left_shift: bool,
    events: Vec<CameraEvent>,
    key_presses: Vec<KeyCode>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a window event. Returns `true` if the event was input the tracker uses.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.button_changed(map_mouse_button(*button), *state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = scroll_lines(*delta);
                self.scrolled(x, y);
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers_changed(map_modifiers(modifiers.state()));
            }
            WindowEvent::Resized(size) => {
                self.resized(size.width, size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                if code == keyboard::KeyCode::ShiftLeft {
                    self.left_shift_changed(event.state == ElementState::Pressed);
                    return true;
                }
                if event.state != ElementState::Pressed || event.repeat {
                    return false;
                }
                match map_winit_key(code) {
                    Some(key) => self.key_pressed(key),
                    None => return false,
                }
            }
            WindowEvent::Focused(false) => {
                // Releases are not delivered to unfocused windows.
                self.buttons = PointerButtons::default();
                self.modifiers = Modifiers::NONE;
                self.left_shift = false;
            }
            _ => return false,
        }
        true
    }

    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn button_changed(&mut self, button: PointerButton, pressed: bool) {
        log::trace!("{button:?} {}", if pressed { "pressed" } else { "released" });
        self.buttons.set(button, pressed);
    }

    pub fn scrolled(&mut self, x_offset: f32, y_offset: f32) {
        self.events.push(CameraEvent::Scroll { x_offset, y_offset });
    }

    pub fn modifiers_changed(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    pub fn left_shift_changed(&mut self, pressed: bool) {
        self.left_shift = pressed;
    }

    /// Queue a viewport change. Zero-sized (minimized) windows are ignored.
    pub fn resized(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.events.push(CameraEvent::Resize { width, height });
        }
    }

    pub fn key_pressed(&mut self, key: KeyCode) {
        self.key_presses.push(key);
    }

    /// Snapshot for [`OrbitCamera::update`](lumen_core::camera::OrbitCamera::update).
    pub fn camera_input(&self) -> CameraInput {
        CameraInput {
            pointer: self.pointer,
            pan_modifier: self.left_shift,
            primary_button: self.buttons.primary,
            secondary_button: self.buttons.middle,
        }
    }

    /// Camera events queued since the last call, in arrival order.
    pub fn drain_events(&mut self) -> Vec<CameraEvent> {
        std::mem::take(&mut self.events)
    }

    /// Keys pressed since the last call, in arrival order. Repeats are not included.
    pub fn drain_key_presses(&mut self) -> Vec<KeyCode> {
        std::mem::take(&mut self.key_presses)
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    pub fn buttons(&self) -> PointerButtons {
        self.buttons
    }

    pub fn left_shift(&self) -> bool {
        self.left_shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use winit::dpi::{PhysicalPosition, PhysicalSize};

    #[rstest]
    #[case(MouseScrollDelta::LineDelta(0.0, 1.0), (0.0, 1.0))]
    #[case(MouseScrollDelta::LineDelta(-2.0, -3.0), (-2.0, -3.0))]
    #[case(MouseScrollDelta::PixelDelta(PhysicalPosition::new(40.0, -20.0)), (2.0, -1.0))]
    fn test_scroll_lines(#[case] delta: MouseScrollDelta, #[case] expected: (f32, f32)) {
        assert_eq!(scroll_lines(delta), expected);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_winit_key(keyboard::KeyCode::KeyT), Some(KeyCode::T));
        assert_eq!(map_winit_key(keyboard::KeyCode::Equal), Some(KeyCode::Equal));
        assert_eq!(map_winit_key(keyboard::KeyCode::KeyQ), None);
        assert_eq!(map_winit_key(keyboard::KeyCode::ShiftLeft), None);
        assert_eq!(map_winit_key(keyboard::KeyCode::Space), None);
    }

    #[test]
    fn test_button_mapping() {
        assert_eq!(map_mouse_button(MouseButton::Left), PointerButton::Primary);
        assert_eq!(map_mouse_button(MouseButton::Middle), PointerButton::Middle);
        assert_eq!(map_mouse_button(MouseButton::Other(9)), PointerButton::Other(9));
    }

    #[test]
    fn test_modifier_mapping() {
        let m = map_modifiers(ModifiersState::SHIFT | ModifiersState::ALT);
        assert!(m.shift && m.alt);
        assert!(!m.control && !m.super_key);
    }

    #[test]
    fn test_pan_needs_left_shift_and_left() {
        let mut tracker = InputTracker::new();
        tracker.cursor_moved(10.0, 20.0);
        tracker.button_changed(PointerButton::Primary, true);
        assert!(!tracker.camera_input().pans());

        // Right Shift sets the shift modifier but is not bound to pan.
        tracker.modifiers_changed(Modifiers {
            shift: true,
            ..Modifiers::NONE
        });
        assert!(!tracker.camera_input().pans());

        tracker.left_shift_changed(true);
        let input = tracker.camera_input();
        assert!(input.pans());
        assert!(!input.rotates());
        assert_eq!(input.pointer, Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_middle_button_rotates() {
        let mut tracker = InputTracker::new();
        tracker.button_changed(PointerButton::Middle, true);
        assert!(tracker.camera_input().rotates());
        tracker.button_changed(PointerButton::Middle, false);
        assert!(!tracker.camera_input().rotates());
        // Right button is not bound.
        tracker.button_changed(PointerButton::Secondary, true);
        assert!(!tracker.camera_input().rotates());
    }

    #[test]
    fn test_events_drain_in_order() {
        let mut tracker = InputTracker::new();
        tracker.scrolled(0.0, 1.0);
        assert!(tracker.handle_window_event(&WindowEvent::Resized(PhysicalSize::new(800, 600))));
        tracker.resized(0, 0);

        assert_eq!(
            tracker.drain_events(),
            vec![
                CameraEvent::Scroll {
                    x_offset: 0.0,
                    y_offset: 1.0
                },
                CameraEvent::Resize {
                    width: 800,
                    height: 600
                },
            ]
        );
        assert!(tracker.drain_events().is_empty());
    }

    #[test]
    fn test_focus_loss_releases_everything() {
        let mut tracker = InputTracker::new();
        tracker.button_changed(PointerButton::Middle, true);
        tracker.modifiers_changed(Modifiers {
            shift: true,
            ..Modifiers::NONE
        });
        tracker.left_shift_changed(true);
        assert!(tracker.handle_window_event(&WindowEvent::Focused(false)));
        assert_eq!(tracker.buttons(), PointerButtons::default());
        assert_eq!(tracker.modifiers(), Modifiers::NONE);
        assert!(!tracker.left_shift());
    }

    #[test]
    fn test_key_presses_drain() {
        let mut tracker = InputTracker::new();
        tracker.key_pressed(KeyCode::T);
        tracker.key_pressed(KeyCode::I);
        assert_eq!(tracker.drain_key_presses(), vec![KeyCode::T, KeyCode::I]);
        assert!(tracker.drain_key_presses().is_empty());
    }
}
