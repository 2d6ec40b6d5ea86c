//! Tinsel Engine - frame-driven 2D game simulation core in WASM
//!
//! The host page owns the canvas, the asset loading and the animation loop.
//! Each tick the engine returns draw requests and consumes the input events
//! forwarded since the previous tick.
//!
//! Layout:
//! - core/        - Angle, BoundingBox, errors, logging
//! - input/       - Keyboard, mouse and controller state
//! - domain/      - Entity bodies, asset descriptors, tile levels
//! - systems/     - Collision marching and integration
//! - simulation/  - Game state, entity registry, frame loop
//! - api/         - wasm-bindgen surface
//! - demo/        - The elf jump game

pub mod core;
pub mod input;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod api;
pub mod demo;

use wasm_bindgen::prelude::*;

pub use crate::core::{Angle, BoundingBox, EngineError, EngineResult};
pub use domain::{AssetCatalog, Body, TileGrid};
pub use input::{ControllerId, InputState, MouseButton};
pub use simulation::{
    Behavior, Director, DrawCommand, DrawList, EntityCtx, EntityId, FrameOrchestrator, Game,
    GameConfig, Spawn,
};
pub use systems::{Resolution, SolidityOracle};

pub use api::wasm::JumpGameHandle;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logging(log::LevelFilter::Info);
    log::info!("tinsel engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
