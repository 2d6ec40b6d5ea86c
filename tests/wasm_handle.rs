#![cfg(target_arch = "wasm32")]

use tinsel_engine::JumpGameHandle;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn handle_runs_in_the_browser() {
    tinsel_engine::init();
    let mut handle = JumpGameHandle::new(r#"{"targetFps": 30}"#).unwrap();
    assert_eq!(handle.target_fps(), 30.0);
    assert!(handle.set_target_fps(-1.0).is_err());

    handle.mouse_move(100.0, 50.0);
    handle.mouse_down(0);
    let json = handle.tick();
    assert!(json.starts_with('['));
    assert_eq!(handle.frame(), 1);
    assert_eq!(handle.score(), 0);
    assert!(handle.stats().total_ms() >= 0.0);
}

#[wasm_bindgen_test]
fn bad_config_is_a_js_error() {
    assert!(JumpGameHandle::new(r#"{"seed": 0}"#).is_err());
    assert!(JumpGameHandle::with_level("", "").is_err());
}
