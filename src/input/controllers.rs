use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::buttons::ButtonStates;

/// Identity of an external controller device, assigned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerId(pub u32);

impl fmt::Display for ControllerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "controller#{}", self.0)
    }
}

/// Per-device input buffers. Each registered device owns its own
/// current/previous maps; unregistering drops both.
#[derive(Debug, Default, Clone)]
pub struct ControllerHub {
    devices: BTreeMap<ControllerId, ButtonStates<String>>,
}

impl ControllerHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the device was already registered (state is kept).
    pub fn register(&mut self, id: ControllerId) -> bool {
        if self.devices.contains_key(&id) {
            return false;
        }
        self.devices.insert(id, ButtonStates::new());
        log::info!("{id} registered");
        true
    }

    /// Returns `false` if the device was not registered.
    pub fn unregister(&mut self, id: ControllerId) -> bool {
        let removed = self.devices.remove(&id).is_some();
        if removed {
            log::info!("{id} unregistered");
        }
        removed
    }

    pub fn is_registered(&self, id: ControllerId) -> bool {
        self.devices.contains_key(&id)
    }

    /// Registered devices in ascending id order.
    pub fn controllers(&self) -> impl Iterator<Item = ControllerId> + '_ {
        self.devices.keys().copied()
    }

    /// Input for an unknown device is dropped. Returns whether it was applied.
    pub fn set_down(&mut self, id: ControllerId, input: &str, down: bool) -> bool {
        match self.devices.get_mut(&id) {
            Some(states) => {
                states.set_down(input.to_owned(), down);
                true
            }
            None => {
                log::debug!("dropping input `{input}` for unregistered {id}");
                false
            }
        }
    }

    pub fn is_down(&self, id: ControllerId, input: &str) -> bool {
        self.devices.get(&id).is_some_and(|s| s.is_down(input))
    }

    pub fn is_pressed(&self, id: ControllerId, input: &str) -> bool {
        self.devices.get(&id).is_some_and(|s| s.is_pressed(input))
    }

    pub fn is_released(&self, id: ControllerId, input: &str) -> bool {
        self.devices.get(&id).is_some_and(|s| s.is_released(input))
    }

    pub fn any_down(&self, input: &str) -> bool {
        self.devices.values().any(|s| s.is_down(input))
    }

    pub fn any_pressed(&self, input: &str) -> bool {
        self.devices.values().any(|s| s.is_pressed(input))
    }

    pub fn any_released(&self, input: &str) -> bool {
        self.devices.values().any(|s| s.is_released(input))
    }

    pub fn end_frame(&mut self) {
        for states in self.devices.values_mut() {
            states.end_frame();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAD: ControllerId = ControllerId(7);
    const OTHER: ControllerId = ControllerId(9);

    #[test]
    fn unregistered_device_reports_nothing() {
        let mut hub = ControllerHub::new();
        assert!(!hub.set_down(PAD, "JUMP", true));
        assert!(!hub.is_down(PAD, "JUMP"));
        assert!(!hub.is_pressed(PAD, "JUMP"));
        assert!(!hub.is_released(PAD, "JUMP"));
    }

    #[test]
    fn devices_are_tracked_independently() {
        let mut hub = ControllerHub::new();
        assert!(hub.register(PAD));
        assert!(hub.register(OTHER));
        assert!(!hub.register(PAD));

        hub.set_down(PAD, "JUMP", true);
        assert!(hub.is_pressed(PAD, "JUMP"));
        assert!(!hub.is_down(OTHER, "JUMP"));
        assert!(hub.any_down("JUMP"));
        assert!(hub.any_pressed("JUMP"));

        hub.end_frame();
        assert!(!hub.any_pressed("JUMP"));

        hub.set_down(PAD, "JUMP", false);
        assert!(hub.is_released(PAD, "JUMP"));
        assert!(hub.any_released("JUMP"));
        assert_eq!(hub.controllers().collect::<Vec<_>>(), vec![PAD, OTHER]);
    }

    #[test]
    fn unregister_drops_state_entirely() {
        let mut hub = ControllerHub::new();
        hub.register(PAD);
        hub.set_down(PAD, "RUN", true);
        hub.end_frame();
        hub.set_down(PAD, "RUN", false);
        assert!(hub.is_released(PAD, "RUN"));

        assert!(hub.unregister(PAD));
        assert!(!hub.unregister(PAD));
        assert!(!hub.is_released(PAD, "RUN"));
        assert!(!hub.any_released("RUN"));

        // Re-registering starts from a clean slate.
        hub.register(PAD);
        assert!(!hub.is_down(PAD, "RUN"));
    }
}
