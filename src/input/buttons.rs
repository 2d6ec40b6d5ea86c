use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Double-buffered on/off state for one class of inputs.
///
/// `current` is written by host events at any time before the step phase.
/// `previous` is written only by [`ButtonStates::end_frame`], so every
/// down/pressed/released read inside one frame sees the same pair.
#[derive(Debug, Clone)]
pub struct ButtonStates<K> {
    current: HashMap<K, bool>,
    previous: HashMap<K, bool>,
}

impl<K> Default for ButtonStates<K> {
    fn default() -> Self {
        Self {
            current: HashMap::new(),
            previous: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> ButtonStates<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_down(&mut self, id: K, down: bool) {
        self.current.insert(id, down);
    }

    #[inline]
    fn current<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.current.get(id).copied().unwrap_or(false)
    }

    #[inline]
    fn previous<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.previous.get(id).copied().unwrap_or(false)
    }

    pub fn is_down<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.current(id)
    }

    pub fn is_pressed<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.current(id) && !self.previous(id)
    }

    pub fn is_released<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        !self.current(id) && self.previous(id)
    }

    pub fn any_down(&self) -> bool {
        self.current.values().any(|down| *down)
    }

    pub fn any_pressed(&self) -> bool {
        self.current.keys().any(|id| self.is_pressed::<K>(id))
    }

    pub fn any_released(&self) -> bool {
        self.current.keys().any(|id| self.is_released::<K>(id))
    }

    /// Copy every current value into `previous`. Runs once per frame.
    pub fn end_frame(&mut self) {
        for (id, down) in self.current.iter() {
            self.previous.insert(id.clone(), *down);
        }
    }

    /// Mark every held id as up. `previous` is untouched, so ids held last
    /// frame report released until the next `end_frame`.
    pub fn release_all(&mut self) {
        for down in self.current.values_mut() {
            *down = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn release_all_keeps_the_release_edge() {
        let mut states: ButtonStates<&str> = ButtonStates::new();
        states.set_down("Space", true);
        states.end_frame();

        states.release_all();
        assert!(!states.is_down(&"Space"));
        assert!(states.is_released(&"Space"));
        assert!(states.any_released());

        states.end_frame();
        assert!(!states.is_released(&"Space"));
    }

    #[test]
    fn untouched_ids_report_nothing() {
        let states: ButtonStates<&str> = ButtonStates::new();
        assert!(!states.is_down(&"Space"));
        assert!(!states.is_pressed(&"Space"));
        assert!(!states.is_released(&"Space"));
        assert!(!states.any_down());
    }

    #[test]
    fn press_is_visible_before_end_frame() {
        let mut states = ButtonStates::new();
        states.set_down("Space", true);
        assert!(states.is_down(&"Space"));
        assert!(states.is_pressed(&"Space"));
        // Reads are stable inside the frame.
        assert!(states.is_pressed(&"Space"));
        assert!(states.any_pressed());
    }

    #[test]
    fn press_hold_release_sequence() {
        let mut states = ButtonStates::new();
        states.set_down("Space", true);
        states.end_frame();
        assert!(states.is_down(&"Space"));
        assert!(!states.is_pressed(&"Space"));

        states.set_down("Space", false);
        assert!(!states.is_down(&"Space"));
        assert!(states.is_released(&"Space"));
        assert!(states.any_released());

        states.end_frame();
        assert!(!states.is_released(&"Space"));
    }

    #[test]
    fn tap_within_one_frame_is_lost_if_released_before_step() {
        let mut states = ButtonStates::new();
        states.set_down("KeyA", true);
        states.set_down("KeyA", false);
        assert!(!states.is_pressed(&"KeyA"));
        assert!(!states.is_released(&"KeyA"));
    }
}
