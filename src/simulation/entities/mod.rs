//! Entities - registry, behavior hooks and hook contexts

pub mod behavior;
pub mod registry;

pub use behavior::{AsAny, Behavior, DrawCtx, EntityCtx, Spawn};
pub use registry::{EntityId, EntityKind, EntityRegistry};

pub(crate) use behavior::run_hook;
