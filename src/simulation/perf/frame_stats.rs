use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Timings and counts of the last completed tick.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameStats {
    pub(crate) frame: u64,
    pub(crate) draw_ms: f64,
    pub(crate) step_ms: f64,
    pub(crate) entity_count: u32,
    pub(crate) draw_commands: u32,
    pub(crate) purged: u32,
}

#[wasm_bindgen]
impl FrameStats {
    /// Frames completed so far, including this one
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn draw_ms(&self) -> f64 { self.draw_ms }
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn total_ms(&self) -> f64 { self.draw_ms + self.step_ms }
    /// Live entities after the step phase
    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 { self.entity_count }
    #[wasm_bindgen(getter)]
    pub fn draw_commands(&self) -> u32 { self.draw_commands }
    /// Records of entities destroyed during the tick
    #[wasm_bindgen(getter)]
    pub fn purged(&self) -> u32 { self.purged }
}
