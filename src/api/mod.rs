//! API - wasm-bindgen surface for the browser host

pub mod wasm;
