//! Per-frame camera input and the events the camera reacts to.

use crate::math::Vec2;

/// Everything [`OrbitCamera::update`](super::OrbitCamera::update) reads for one frame.
///
/// The caller samples its input source once per frame and passes the
/// snapshot in, so the camera never polls global state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CameraInput {
    /// Current pointer position in window pixels.
    pub pointer: Vec2,
    /// Pan modifier (Shift in the viewer) is held.
    pub pan_modifier: bool,
    /// Primary pointer button is held.
    pub primary_button: bool,
    /// Secondary (rotate) pointer button is held.
    pub secondary_button: bool,
}

impl CameraInput {
    /// Input with the pointer at `pointer` and nothing held.
    pub fn at(pointer: Vec2) -> Self {
        Self {
            pointer,
            ..Default::default()
        }
    }

    /// Hold the pan modifier together with the primary button.
    pub fn with_pan(mut self) -> Self {
        self.pan_modifier = true;
        self.primary_button = true;
        self
    }

    /// Hold the secondary button.
    pub fn with_rotate(mut self) -> Self {
        self.secondary_button = true;
        self
    }

    /// Pan applies only while the modifier and the primary button are both held.
    pub fn pans(&self) -> bool {
        self.pan_modifier && self.primary_button
    }

    /// Rotation follows the secondary button regardless of modifiers.
    pub fn rotates(&self) -> bool {
        self.secondary_button
    }
}

/// Discrete events dispatched to the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraEvent {
    /// Scroll wheel moved. Positive `y_offset` zooms in.
    Scroll { x_offset: f32, y_offset: f32 },
    /// The viewport changed size (physical pixels).
    Resize { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_needs_modifier_and_primary() {
        let base = CameraInput::at(Vec2::new(1.0, 2.0));
        assert!(!base.pans());
        assert!(base.with_pan().pans());

        let primary_only = CameraInput {
            primary_button: true,
            ..base
        };
        assert!(!primary_only.pans());

        let modifier_only = CameraInput {
            pan_modifier: true,
            ..base
        };
        assert!(!modifier_only.pans());
    }

    #[test]
    fn rotate_ignores_modifier() {
        let input = CameraInput {
            pan_modifier: true,
            ..CameraInput::default()
        }
        .with_rotate();
        assert!(input.rotates());
        assert!(!input.pans());
    }
}
