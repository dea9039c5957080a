//! PolygonRegistry - custom vertex lists for polygon colliders
//!
//! Vertices are stored in world space and keyed by `BodyId`. When the owning
//! body moves, `resync` translates the whole list so its centroid lands on the
//! body position again; the shape itself is never re-derived.

use std::collections::{HashMap, HashSet};

use crate::core::Vec2;
use crate::domain::BodyId;

#[derive(Default, Clone, Debug)]
pub struct PolygonRegistry {
    entries: HashMap<BodyId, Vec<Vec2>>,
}

impl PolygonRegistry {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Store world-space vertices for `id`, replacing any previous entry.
    ///
    /// Returns `false` (and stores nothing) for an empty vertex list. Fewer than
    /// three vertices are kept but collide degenerately.
    pub fn register(&mut self, id: BodyId, vertices: Vec<Vec2>) -> bool {
        if vertices.is_empty() {
            log::warn!("polygon registry: refusing empty vertex list for body {}", id);
            return false;
        }
        if vertices.len() < 3 {
            log::warn!(
                "polygon registry: body {} registered with only {} vertices",
                id,
                vertices.len()
            );
        }
        self.entries.insert(id, vertices);
        true
    }

    /// Register vertices given as offsets from `origin`.
    pub fn register_relative(&mut self, id: BodyId, origin: Vec2, offsets: &[Vec2]) -> bool {
        let vertices = offsets.iter().map(|o| origin + *o).collect();
        self.register(id, vertices)
    }

    /// Translate the stored vertices of `id` so their centroid equals `position`.
    ///
    /// Returns `true` when an entry was moved. Missing or degenerate (<3) entries
    /// are left alone.
    pub fn resync(&mut self, id: BodyId, position: Vec2) -> bool {
        let Some(vertices) = self.entries.get_mut(&id) else {
            return false;
        };
        if vertices.len() < 3 {
            return false;
        }

        let displacement = position - Vec2::centroid(vertices);
        if displacement.is_zero() {
            return false;
        }
        for v in vertices.iter_mut() {
            *v += displacement;
        }
        true
    }

    /// Drop every entry whose id is not in `live`. Returns how many were removed.
    pub fn sweep<I>(&mut self, live: I) -> usize
    where
        I: IntoIterator<Item = BodyId>,
    {
        if self.entries.is_empty() {
            return 0;
        }
        let live: HashSet<BodyId> = live.into_iter().collect();
        let before = self.entries.len();
        self.entries.retain(|id, _| live.contains(id));
        before - self.entries.len()
    }

    pub fn remove(&mut self, id: BodyId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub fn vertices(&self, id: BodyId) -> Option<&[Vec2]> {
        self.entries.get(&id).map(|v| v.as_slice())
    }

    pub fn vertex_count(&self, id: BodyId) -> usize {
        self.entries.get(&id).map_or(0, |v| v.len())
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Debug-log every entry (diagnostics only).
    pub fn dump(&self) {
        if self.entries.is_empty() {
            log::debug!("polygon registry is empty");
            return;
        }
        log::debug!("polygon registry: {} entries", self.entries.len());
        let mut ids: Vec<&BodyId> = self.entries.keys().collect();
        ids.sort();
        for id in ids {
            let verts = &self.entries[id];
            let c = Vec2::centroid(verts);
            log::debug!("  body {} centroid ({:.2}, {:.2}) - {} vertices", id, c.x, c.y, verts.len());
        }
    }
}
