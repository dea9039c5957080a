//! OwnershipIndex - which interactive object owns which colliders
//!
//! Two maps kept in lockstep: owner → colliders and collider → owner. The index
//! only does bookkeeping; removing the bodies themselves is the world's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::BodyId;

/// Identity of an interactive world object that spawns colliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OwnerId(pub u64);

impl std::fmt::Display for OwnerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "owner:{}", self.0)
    }
}

#[derive(Default, Clone, Debug)]
pub struct OwnershipIndex {
    by_owner: HashMap<OwnerId, Vec<BodyId>>,
    owner_of: HashMap<BodyId, OwnerId>,
}

impl OwnershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `body` under `owner`. A body already owned by someone else is
    /// moved over.
    pub fn record(&mut self, owner: OwnerId, body: BodyId) {
        if let Some(previous) = self.owner_of.insert(body, owner) {
            if previous == owner {
                return;
            }
            self.detach(previous, body);
        }
        self.by_owner.entry(owner).or_default().push(body);
    }

    /// Remove `owner` from both maps and hand back its colliders. Unknown
    /// owners yield an empty list.
    pub fn take_owner(&mut self, owner: OwnerId) -> Vec<BodyId> {
        let bodies = self.by_owner.remove(&owner).unwrap_or_default();
        for id in bodies.iter() {
            self.owner_of.remove(id);
        }
        bodies
    }

    /// Drop any trace of `body`. Returns its former owner.
    pub fn forget_body(&mut self, body: BodyId) -> Option<OwnerId> {
        let owner = self.owner_of.remove(&body)?;
        self.detach(owner, body);
        Some(owner)
    }

    fn detach(&mut self, owner: OwnerId, body: BodyId) {
        if let Some(list) = self.by_owner.get_mut(&owner) {
            list.retain(|b| *b != body);
            if list.is_empty() {
                self.by_owner.remove(&owner);
            }
        }
    }

    pub fn owned_by(&self, owner: OwnerId) -> &[BodyId] {
        self.by_owner.get(&owner).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn owner_of(&self, body: BodyId) -> Option<OwnerId> {
        self.owner_of.get(&body).copied()
    }

    pub fn owner_count(&self) -> usize {
        self.by_owner.len()
    }

    /// Number of owned colliders.
    pub fn len(&self) -> usize {
        self.owner_of.len()
    }

    pub fn is_empty(&self) -> bool {
        self.owner_of.is_empty()
    }

    pub fn clear(&mut self) {
        self.by_owner.clear();
        self.owner_of.clear();
    }

    /// Both directions agree entry for entry.
    pub fn is_consistent(&self) -> bool {
        let forward: usize = self.by_owner.values().map(|v| v.len()).sum();
        forward == self.owner_of.len()
            && self.by_owner.iter().all(|(owner, bodies)| {
                !bodies.is_empty() && bodies.iter().all(|b| self.owner_of.get(b) == Some(owner))
            })
    }
}
