use wasm_bindgen::prelude::*;

use crate::core::EngineError;
use crate::demo::{self, JumpGame, Player};
use crate::input::{ControllerId, MouseButton};
use crate::simulation::{DrawList, FrameOrchestrator, FrameStats, GameConfig};

fn to_js(err: EngineError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The jump game as driven by the page: the host forwards DOM events between
/// ticks and calls `tick` from its animation loop at (roughly) `targetFps`.
#[wasm_bindgen]
pub struct JumpGameHandle {
    frames: FrameOrchestrator<JumpGame>,
    draw_list: DrawList,
}

#[wasm_bindgen]
impl JumpGameHandle {
    /// Built-in level. `config_json` may be empty or `{}` for the level's own
    /// room size; any field it sets overrides.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<JumpGameHandle, JsValue> {
        Self::with_level(demo::DEFAULT_LEVEL, config_json)
    }

    /// Custom ASCII level (`#` wall, `P` player, `G` gift).
    #[wasm_bindgen(js_name = withLevel)]
    pub fn with_level(layout: &str, config_json: &str) -> Result<JumpGameHandle, JsValue> {
        let director = JumpGame::new(layout).map_err(to_js)?;
        let config = if config_json.trim().is_empty() {
            director.config()
        } else {
            merged_config(&director.config(), config_json).map_err(|e| {
                log::warn!("rejected host config: {e}");
                to_js(e)
            })?
        };
        let level = config.log_level_filter().map_err(to_js)?;
        crate::core::logging::init_logging(level);
        let frames = demo::build_with_config(layout, config).map_err(to_js)?;
        Ok(JumpGameHandle {
            frames,
            draw_list: DrawList::new(),
        })
    }

    // === Host input events ===

    /// `code` is `KeyboardEvent.code`
    pub fn key_down(&mut self, code: &str) {
        self.frames.game_mut().input_mut().set_key_down(code, true);
    }

    pub fn key_up(&mut self, code: &str) {
        self.frames.game_mut().input_mut().set_key_down(code, false);
    }

    /// `button` is `MouseEvent.button`; unknown buttons are ignored.
    pub fn mouse_down(&mut self, button: i16) {
        if let Some(button) = MouseButton::from_code(button) {
            self.frames.game_mut().input_mut().set_mouse_button_down(button, true);
        }
    }

    pub fn mouse_up(&mut self, button: i16) {
        if let Some(button) = MouseButton::from_code(button) {
            self.frames.game_mut().input_mut().set_mouse_button_down(button, false);
        }
    }

    /// Canvas-relative position (`offsetX` / `offsetY`)
    pub fn mouse_move(&mut self, x: f32, y: f32) {
        self.frames.game_mut().input_mut().set_mouse_position(x, y);
    }

    /// Window lost focus: release held keys and buttons.
    pub fn blur(&mut self) {
        self.frames.game_mut().input_mut().release_all();
    }

    pub fn register_controller(&mut self, id: u32) -> bool {
        self.frames.game_mut().input_mut().register_controller(ControllerId(id))
    }

    pub fn unregister_controller(&mut self, id: u32) -> bool {
        self.frames.game_mut().input_mut().unregister_controller(ControllerId(id))
    }

    /// Returns `false` for unregistered controllers.
    pub fn controller_input(&mut self, id: u32, input: &str, down: bool) -> bool {
        self.frames
            .game_mut()
            .input_mut()
            .set_controller_input_down(ControllerId(id), input, down)
    }

    // === Frame loop ===

    /// Run one tick and return its draw requests as a JSON array.
    pub fn tick(&mut self) -> String {
        self.frames.tick(&mut self.draw_list);
        self.draw_list.to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn target_fps(&self) -> f32 {
        self.frames.target_fps()
    }

    pub fn set_target_fps(&mut self, fps: f32) -> Result<(), JsValue> {
        self.frames.set_target_fps(fps).map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 {
        self.frames.game().frame()
    }

    #[wasm_bindgen(getter)]
    pub fn entity_count(&self) -> u32 {
        self.frames.game().entities().count() as u32
    }

    /// Gifts the player has picked up
    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        let entities = self.frames.game().entities();
        entities
            .of_type::<Player>()
            .filter_map(|id| entities.behavior::<Player>(id))
            .map(Player::collected)
            .sum()
    }

    pub fn stats(&self) -> FrameStats {
        self.frames.stats()
    }

    /// Asset descriptors by name, so the host can preload images.
    /// Populated by the first tick.
    pub fn asset_manifest_json(&self) -> String {
        self.frames.game().assets().manifest_json()
    }

    pub fn config_json(&self) -> String {
        self.frames.game().config().to_json()
    }
}

/// Host JSON on top of `base`: fields the host leaves out keep `base` values.
fn merged_config(base: &GameConfig, json: &str) -> Result<GameConfig, EngineError> {
    let mut merged = serde_json::to_value(base)?;
    let overrides: serde_json::Value = serde_json::from_str(json)?;
    if let (Some(target), serde_json::Value::Object(fields)) = (merged.as_object_mut(), overrides) {
        target.extend(fields);
    }
    let config: GameConfig = serde_json::from_value(merged)?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_fields_override_level_config() {
        let base = GameConfig {
            room_width: 672,
            room_height: 224,
            ..GameConfig::default()
        };
        let merged = merged_config(&base, r#"{"targetFps": 30, "viewWidth": 320}"#).unwrap();
        assert_eq!(merged.room_width, 672);
        assert_eq!(merged.view_width, 320);
        assert_eq!(merged.target_fps, 30.0);
    }

    #[test]
    fn merged_config_is_validated() {
        assert!(merged_config(&GameConfig::default(), r#"{"roomWidth": 0}"#).is_err());
        assert!(merged_config(&GameConfig::default(), "not json").is_err());
    }

    #[test]
    fn handle_ticks_natively() {
        let mut handle = JumpGameHandle::new("").unwrap();
        handle.key_down("ArrowRight");
        let json = handle.tick();
        let commands: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(commands[0]["kind"], "fillRect");
        assert_eq!(handle.frame(), 1);
        assert!(handle.entity_count() >= 1);
        assert!(handle.asset_manifest_json().contains("elf"));
    }
}
