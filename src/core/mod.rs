//! Core value types shared by every other module

pub mod angle;
pub mod bounding_box;
pub mod error;
pub mod logging;

pub use angle::Angle;
pub use bounding_box::BoundingBox;
pub use error::{EngineError, EngineResult};
