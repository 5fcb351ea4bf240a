use crate::coords::Vec2;

use super::buttons::ButtonSet;
use super::types::{
    InputEvent, Key, KeyState, MouseButton, MouseButtonState, PointerButtonEvent, PointerMoveEvent,
};

/// Pointer state: button edges plus continuous position.
///
/// `position` and `delta` are in world orientation: origin at the center of the
/// observation surface, +Y up.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub buttons: ButtonSet<MouseButton>,
    /// Pointer position relative to the surface center, +Y up.
    pub position: Vec2,
    /// Movement reported by the most recent move event, +Y up.
    pub delta: Vec2,
    /// Last raw surface position, used to derive `delta`.
    last_raw: Option<Vec2>,
}

impl PointerState {
    #[inline]
    pub fn was_pressed(&self, button: MouseButton) -> bool {
        self.buttons.was_pressed(button)
    }

    #[inline]
    pub fn is_held(&self, button: MouseButton) -> bool {
        self.buttons.is_held(button)
    }

    #[inline]
    pub fn was_released(&self, button: MouseButton) -> bool {
        self.buttons.was_released(button)
    }
}

/// Edge-triggered keyboard and pointer state for the observation surface.
///
/// Raw events are applied as they arrive; `end_frame` runs once per frame
/// after the post-render scripts.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub keyboard: ButtonSet<Key>,
    pub pointer: PointerState,

    focused: bool,
    surface_size: Vec2,
}

impl InputState {
    /// Sets the logical size of the observation surface. Pointer positions are
    /// centered on it.
    pub fn observe(&mut self, width: f32, height: f32) {
        self.surface_size = Vec2::new(width, height);
    }

    pub fn surface_size(&self) -> Vec2 {
        self.surface_size
    }

    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Applies a platform-agnostic input event.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => self.keyboard.press(*key),
                KeyState::Released => self.keyboard.release(*key),
            },

            InputEvent::PointerButton(PointerButtonEvent { button, state }) => match state {
                MouseButtonState::Pressed => self.pointer.buttons.press(*button),
                MouseButtonState::Released => self.pointer.buttons.release(*button),
            },

            InputEvent::PointerMoved(PointerMoveEvent { x, y }) => {
                let raw = Vec2::new(*x, *y);
                let half = self.surface_size / 2.0;

                self.pointer.position = Vec2::new(raw.x - half.x, half.y - raw.y);
                self.pointer.delta = match self.pointer.last_raw {
                    Some(prev) => Vec2::new(raw.x - prev.x, prev.y - raw.y),
                    None => Vec2::ZERO,
                };
                self.pointer.last_raw = Some(raw);
            }

            InputEvent::PointerLeft => {
                self.pointer.last_raw = None;
            }

            InputEvent::Focused(f) => {
                self.focused = *f;
                if !*f {
                    // Focus loss swallows the matching "up" events; release now
                    // so nothing stays held.
                    self.keyboard.release_all();
                    self.pointer.buttons.release_all();
                }
            }

            InputEvent::SurfaceResized { width, height } => {
                self.observe(*width, *height);
            }
        }
    }

    /// Frame boundary: clears pressed/released edges for keyboard and pointer.
    pub fn end_frame(&mut self) {
        self.keyboard.end_frame();
        self.pointer.buttons.end_frame();
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keyboard.was_pressed(key)
    }

    #[inline]
    pub fn key_held(&self, key: Key) -> bool {
        self.keyboard.is_held(key)
    }

    #[inline]
    pub fn key_released(&self, key: Key) -> bool {
        self.keyboard.was_released(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(k: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key: k, state, repeat: false }
    }

    fn button(b: MouseButton, state: MouseButtonState) -> InputEvent {
        InputEvent::PointerButton(PointerButtonEvent { button: b, state })
    }

    // ── edge lifecycle ────────────────────────────────────────────────────

    #[test]
    fn held_key_yields_one_press_and_one_release_across_frames() {
        let mut input = InputState::default();
        let frames = 6;
        let mut pressed_seen = 0;
        let mut released_seen = 0;

        for frame in 0..frames {
            if frame == 1 {
                input.apply_event(&key(Key::W, KeyState::Pressed));
            }
            if (2..5).contains(&frame) {
                // OS key-repeat while held.
                input.apply_event(&InputEvent::Key { key: Key::W, state: KeyState::Pressed, repeat: true });
            }
            if frame == 5 {
                input.apply_event(&key(Key::W, KeyState::Released));
            }

            if input.key_pressed(Key::W) {
                pressed_seen += 1;
                assert_eq!(frame, 1);
            }
            if input.key_released(Key::W) {
                released_seen += 1;
                assert_eq!(frame, 5);
            }
            if (1..5).contains(&frame) {
                assert!(input.key_held(Key::W), "frame {frame}");
            }

            input.end_frame();
        }

        assert_eq!(pressed_seen, 1);
        assert_eq!(released_seen, 1);
        assert!(!input.key_held(Key::W));
    }

    #[test]
    fn pointer_buttons_track_edges() {
        let mut input = InputState::default();
        input.apply_event(&button(MouseButton::Right, MouseButtonState::Pressed));
        assert!(input.pointer.was_pressed(MouseButton::Right));
        input.end_frame();
        assert!(!input.pointer.was_pressed(MouseButton::Right));
        assert!(input.pointer.is_held(MouseButton::Right));
        input.apply_event(&button(MouseButton::Right, MouseButtonState::Released));
        assert!(input.pointer.was_released(MouseButton::Right));
        assert!(!input.pointer.is_held(MouseButton::Right));
    }

    #[test]
    fn focus_loss_releases_held_state() {
        let mut input = InputState::default();
        input.apply_event(&key(Key::A, KeyState::Pressed));
        input.apply_event(&button(MouseButton::Left, MouseButtonState::Pressed));
        input.end_frame();

        input.apply_event(&InputEvent::Focused(false));
        assert!(!input.key_held(Key::A));
        assert!(input.key_released(Key::A));
        assert!(input.pointer.was_released(MouseButton::Left));
    }

    // ── pointer position ──────────────────────────────────────────────────

    #[test]
    fn pointer_position_is_centered_and_y_up() {
        let mut input = InputState::default();
        input.observe(800.0, 600.0);

        input.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 400.0, y: 300.0 }));
        assert_eq!(input.pointer.position, Vec2::ZERO);

        input.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 500.0, y: 100.0 }));
        assert_eq!(input.pointer.position, Vec2::new(100.0, 200.0));
        assert_eq!(input.pointer.delta, Vec2::new(100.0, 200.0));
    }

    #[test]
    fn pointer_delta_resets_after_leaving() {
        let mut input = InputState::default();
        input.observe(100.0, 100.0);
        input.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 10.0, y: 10.0 }));
        input.apply_event(&InputEvent::PointerLeft);
        input.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 90.0, y: 90.0 }));
        assert_eq!(input.pointer.delta, Vec2::ZERO);
        assert_eq!(input.pointer.position, Vec2::new(40.0, -40.0));
    }

    #[test]
    fn resize_event_recenters() {
        let mut input = InputState::default();
        input.apply_event(&InputEvent::SurfaceResized { width: 200.0, height: 100.0 });
        input.apply_event(&InputEvent::PointerMoved(PointerMoveEvent { x: 0.0, y: 0.0 }));
        assert_eq!(input.pointer.position, Vec2::new(-100.0, 50.0));
    }
}
