use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::core::{EngineError, EngineResult};

/// Startup configuration, usually handed over by the host as JSON.
/// Every field is optional.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    pub room_width: u32,
    pub room_height: u32,
    pub view_width: u32,
    pub view_height: u32,
    pub view_x: i32,
    pub view_y: i32,
    /// Pacing hint for the host driver. The core never sleeps.
    pub target_fps: f32,
    /// Seed of the shared xorshift32 random source. Must be non-zero.
    pub seed: u32,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            room_width: 480,
            room_height: 320,
            view_width: 480,
            view_height: 320,
            view_x: 0,
            view_y: 0,
            target_fps: 60.0,
            seed: 12345,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> EngineResult<()> {
        positive("roomWidth", self.room_width)?;
        positive("roomHeight", self.room_height)?;
        positive("viewWidth", self.view_width)?;
        positive("viewHeight", self.view_height)?;
        validate_fps(self.target_fps)?;
        if self.seed == 0 {
            return Err(EngineError::InvalidConfig {
                field: "seed",
                reason: "xorshift32 needs a non-zero seed".into(),
            });
        }
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> EngineResult<LevelFilter> {
        LevelFilter::from_str(&self.log_level).map_err(|_| EngineError::InvalidConfig {
            field: "logLevel",
            reason: format!("unknown level `{}`", self.log_level),
        })
    }
}

fn positive(field: &'static str, value: u32) -> EngineResult<()> {
    if value == 0 {
        return Err(EngineError::InvalidConfig {
            field,
            reason: "must be greater than zero".into(),
        });
    }
    Ok(())
}

pub(crate) fn validate_fps(fps: f32) -> EngineResult<()> {
    if fps.is_finite() && fps > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig {
            field: "targetFps",
            reason: format!("{fps} is not a positive frame rate"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn camel_case_fields_override_defaults() {
        let config = GameConfig::from_json(r#"{"roomWidth": 672, "targetFps": 30, "logLevel": "debug"}"#).unwrap();
        assert_eq!(config.room_width, 672);
        assert_eq!(config.room_height, 320);
        assert_eq!(config.target_fps, 30.0);
        assert_eq!(config.log_level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn invalid_values_name_the_field() {
        let err = GameConfig::from_json(r#"{"viewHeight": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { field: "viewHeight", .. }));

        let err = GameConfig::from_json(r#"{"targetFps": -5}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { field: "targetFps", .. }));

        let err = GameConfig::from_json(r#"{"logLevel": "loud"}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { field: "logLevel", .. }));

        let err = GameConfig::from_json(r#"{"seed": 0}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { field: "seed", .. }));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(GameConfig::from_json("{"), Err(EngineError::ConfigParse(_))));
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let mut config = GameConfig::default();
        config.view_x = -32;
        let back = GameConfig::from_json(&config.to_json()).unwrap();
        assert_eq!(back, config);
    }
}
