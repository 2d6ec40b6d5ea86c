//! Entity registry - owns every entity and the ordered live list
//!
//! Destroying an entity removes it from the live list at once but keeps its
//! record until the end of the tick, so a snapshot taken earlier in the tick
//! can still step it. `purge_retired` drops those records.

use std::any::{type_name, TypeId};
use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::core::BoundingBox;
use crate::domain::Body;

use super::behavior::Behavior;

/// Stable handle of one entity. Never reused within a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntityId(u64);

impl EntityId {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

/// Runtime kind of an entity: the concrete behavior type it was created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EntityKind {
    id: TypeId,
    name: &'static str,
}

impl EntityKind {
    pub fn of<T: 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Type name, for diagnostics only
    pub fn name(&self) -> &'static str {
        self.name
    }
}

pub(crate) struct EntityRecord {
    kind: EntityKind,
    pub(crate) body: Body,
    /// Taken out while one of its hooks runs
    behavior: Option<Box<dyn Behavior>>,
    live: bool,
}

#[derive(Default)]
pub struct EntityRegistry {
    records: HashMap<EntityId, EntityRecord>,
    live: Vec<EntityId>,
    next_id: u64,
}

impl fmt::Debug for EntityRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityRegistry")
            .field("live", &self.live)
            .field("records", &self.records.len())
            .finish()
    }
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new entity to the live list. Hooks are not run here.
    pub(crate) fn insert(&mut self, kind: EntityKind, body: Body, behavior: Box<dyn Behavior>) -> EntityId {
        // Never reused, even after a purge.
        self.next_id += 1;
        let id = EntityId(self.next_id);
        self.records.insert(
            id,
            EntityRecord {
                kind,
                body,
                behavior: Some(behavior),
                live: true,
            },
        );
        self.live.push(id);
        log::trace!("created {id} ({})", kind.name());
        id
    }

    /// Remove from the live list. Returns `false` (and does nothing) if the
    /// entity is not live.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        let Some(record) = self.records.get_mut(&id).filter(|r| r.live) else {
            return false;
        };
        record.live = false;
        self.live.retain(|&live| live != id);
        log::trace!("destroyed {id} ({})", record.kind.name());
        true
    }

    /// Drop records of destroyed entities. Returns how many were dropped.
    pub(crate) fn purge_retired(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|_, r| r.live);
        before - self.records.len()
    }

    pub fn is_alive(&self, id: EntityId) -> bool {
        self.records.get(&id).is_some_and(|r| r.live)
    }

    /// Live entity count
    #[inline]
    pub fn count(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Live entities in creation order.
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.live.iter().copied()
    }

    /// Copy of the live list for one full pass.
    pub fn snapshot(&self) -> Vec<EntityId> {
        self.live.clone()
    }

    pub fn kind(&self, id: EntityId) -> Option<EntityKind> {
        self.records.get(&id).map(|r| r.kind)
    }

    pub fn is_kind<T: 'static>(&self, id: EntityId) -> bool {
        self.kind(id).is_some_and(|k| k == EntityKind::of::<T>())
    }

    /// Live entities whose behavior type is `T`, in list order.
    pub fn of_type<T: 'static>(&self) -> impl Iterator<Item = EntityId> + '_ {
        let kind = EntityKind::of::<T>();
        self.live
            .iter()
            .copied()
            .filter(move |id| self.records.get(id).is_some_and(|r| r.kind == kind))
    }

    /// Body of a live or just-destroyed entity.
    pub fn body(&self, id: EntityId) -> Option<&Body> {
        self.records.get(&id).map(|r| &r.body)
    }

    pub fn body_mut(&mut self, id: EntityId) -> Option<&mut Body> {
        self.records.get_mut(&id).map(|r| &mut r.body)
    }

    /// Concrete behavior state, if the entity is a `T` and no hook of it is
    /// running.
    pub fn behavior<T: Behavior>(&self, id: EntityId) -> Option<&T> {
        self.records
            .get(&id)
            .and_then(|r| r.behavior.as_deref())
            .and_then(|b| b.as_any().downcast_ref::<T>())
    }

    pub(crate) fn record(&self, id: EntityId) -> Option<&EntityRecord> {
        self.records.get(&id)
    }

    pub(crate) fn take_behavior(&mut self, id: EntityId) -> Option<Box<dyn Behavior>> {
        self.records.get_mut(&id).and_then(|r| r.behavior.take())
    }

    pub(crate) fn restore_behavior(&mut self, id: EntityId, behavior: Box<dyn Behavior>) {
        if let Some(record) = self.records.get_mut(&id) {
            record.behavior = Some(behavior);
        }
    }

    /// Live entities of kind `T` whose world box overlaps `id`'s. Never
    /// includes `id` itself; empty when `id` has no box.
    pub fn colliding_with<T: 'static>(&self, id: EntityId) -> Vec<EntityId> {
        match self.body(id).and_then(Body::world_box) {
            Some(own) => self.overlapping::<T>(own, id),
            None => Vec::new(),
        }
    }

    /// Live entities of kind `T` other than `exclude` whose world box
    /// intersects `area` (touching edges do not count).
    pub fn overlapping<T: 'static>(&self, area: BoundingBox, exclude: EntityId) -> Vec<EntityId> {
        self.of_type::<T>()
            .filter(|&other| other != exclude)
            .filter(|&other| {
                self.body(other)
                    .and_then(Body::world_box)
                    .is_some_and(|b| area.intersects(&b))
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.live.clear();
    }
}

impl EntityRecord {
    pub(crate) fn behavior(&self) -> Option<&dyn Behavior> {
        self.behavior.as_deref()
    }
}
