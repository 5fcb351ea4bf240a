use std::collections::HashSet;
use std::hash::Hash;

/// Edge-triggered state for one family of buttons (keys or pointer buttons).
///
/// - `pressed`: went down during the current frame
/// - `held`: currently down, persists across frames
/// - `released`: went up during the current frame
///
/// `end_frame` clears the two edge sets and leaves `held` alone.
#[derive(Debug, Clone)]
pub struct ButtonSet<T> {
    pressed: HashSet<T>,
    held: HashSet<T>,
    released: HashSet<T>,
}

impl<T> Default for ButtonSet<T> {
    fn default() -> Self {
        Self {
            pressed: HashSet::new(),
            held: HashSet::new(),
            released: HashSet::new(),
        }
    }
}

impl<T> ButtonSet<T>
where
    T: Copy + Eq + Hash,
{
    /// Raw "down". A button that is already held does not produce another
    /// pressed edge, which filters out platform key-repeat.
    pub fn press(&mut self, button: T) {
        if self.held.insert(button) {
            self.pressed.insert(button);
        }
    }

    /// Raw "up". Always records a released edge.
    pub fn release(&mut self, button: T) {
        self.held.remove(&button);
        self.released.insert(button);
    }

    /// Releases everything currently held, recording a released edge for each.
    pub fn release_all(&mut self) {
        for button in self.held.drain() {
            self.released.insert(button);
        }
    }

    /// Frame boundary: clears the pressed/released edges.
    pub fn end_frame(&mut self) {
        self.pressed.clear();
        self.released.clear();
    }

    #[inline]
    pub fn was_pressed(&self, button: T) -> bool {
        self.pressed.contains(&button)
    }

    #[inline]
    pub fn is_held(&self, button: T) -> bool {
        self.held.contains(&button)
    }

    #[inline]
    pub fn was_released(&self, button: T) -> bool {
        self.released.contains(&button)
    }

    pub fn pressed(&self) -> impl Iterator<Item = T> + '_ {
        self.pressed.iter().copied()
    }

    pub fn held(&self) -> impl Iterator<Item = T> + '_ {
        self.held.iter().copied()
    }

    pub fn released(&self) -> impl Iterator<Item = T> + '_ {
        self.released.iter().copied()
    }

    pub fn any_pressed(&self) -> bool {
        !self.pressed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    enum B {
        One,
        Two,
    }

    #[test]
    fn press_records_edge_and_hold() {
        let mut s = ButtonSet::default();
        s.press(B::One);
        assert!(s.was_pressed(B::One));
        assert!(s.is_held(B::One));
        assert!(!s.was_released(B::One));
    }

    #[test]
    fn repeated_press_does_not_retrigger() {
        let mut s = ButtonSet::default();
        s.press(B::One);
        s.end_frame();
        s.press(B::One);
        s.press(B::One);
        assert!(!s.was_pressed(B::One));
        assert!(s.is_held(B::One));
    }

    #[test]
    fn release_without_hold_still_records_edge() {
        let mut s = ButtonSet::<B>::default();
        s.release(B::Two);
        assert!(s.was_released(B::Two));
        assert!(!s.is_held(B::Two));
    }

    #[test]
    fn press_and_release_in_same_frame_keeps_both_edges() {
        let mut s = ButtonSet::default();
        s.press(B::One);
        s.release(B::One);
        assert!(s.was_pressed(B::One));
        assert!(s.was_released(B::One));
        assert!(!s.is_held(B::One));
    }

    #[test]
    fn end_frame_keeps_held() {
        let mut s = ButtonSet::default();
        s.press(B::One);
        s.end_frame();
        assert!(!s.was_pressed(B::One));
        assert!(s.is_held(B::One));
    }

    #[test]
    fn release_all_moves_held_to_released() {
        let mut s = ButtonSet::default();
        s.press(B::One);
        s.press(B::Two);
        s.end_frame();
        s.release_all();
        assert!(s.was_released(B::One));
        assert!(s.was_released(B::Two));
        assert_eq!(s.held().count(), 0);
    }
}
