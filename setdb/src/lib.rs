use log::trace;
use rand::seq::IteratorRandom;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub(crate) mod datamodel;
use datamodel::DataModel;
pub use datamodel::{Combine, Member, Members};

/// In-process keyed set storage.
///
/// Cloning is cheap and every clone addresses the same keyspace. Each method
/// runs under a single lock acquisition, so every primitive is atomic with
/// respect to the others. A key whose set becomes empty is removed, which
/// keeps `exists` consistent with "absent keys are empty sets".
#[derive(Clone, Default)]
pub struct SetDB {
    data: Arc<RwLock<HashMap<Member, Members>>>,
}

impl SetDB {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<Member, Members>> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Member, Members>> {
        self.data.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add members, returning how many were not already present.
    pub fn sadd(&self, key: &[u8], members: &[&[u8]]) -> u64 {
        if members.is_empty() {
            return 0;
        }
        let mut data = self.write();
        let set = data.entry(key.to_vec()).or_default();
        members.iter().filter(|m| set.insert(m.to_vec())).count() as u64
    }

    /// Remove members, returning how many were present.
    pub fn srem(&self, key: &[u8], members: &[&[u8]]) -> u64 {
        let mut data = self.write();
        let Some(set) = data.get_mut(key) else {
            return 0;
        };
        let removed = members.iter().filter(|m| set.remove(**m)).count() as u64;
        if set.is_empty() {
            data.remove(key);
        }
        removed
    }

    pub fn sismember(&self, key: &[u8], member: &[u8]) -> bool {
        self.read().get(key).is_some_and(|s| s.contains(member))
    }

    pub fn smembers(&self, key: &[u8]) -> Vec<Member> {
        self.read()
            .get(key)
            .map(|s| s.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn scard(&self, key: &[u8]) -> u64 {
        self.read().get(key).map_or(0, |s| s.len() as u64)
    }

    /// Delete whole keys, returning how many existed.
    pub fn del(&self, keys: &[&[u8]]) -> u64 {
        let mut data = self.write();
        keys.iter().filter(|k| data.remove(**k).is_some()).count() as u64
    }

    pub fn exists(&self, key: &[u8]) -> bool {
        self.read().contains_key(key)
    }

    /// Compute `op` over `keys` without persisting it.
    pub fn combine(&self, op: Combine, keys: &[&[u8]]) -> Vec<Member> {
        trace!("{} over {} keys", op.name(), keys.len());
        DataModel::combine(&self.read(), op, keys).into_iter().collect()
    }

    /// Compute `op` over `keys` and store the result under `dest`, replacing
    /// whatever was there. An empty result deletes `dest`. Returns the
    /// cardinality of the stored set.
    pub fn combine_store(&self, op: Combine, dest: &[u8], keys: &[&[u8]]) -> u64 {
        let mut data = self.write();
        let result = DataModel::combine(&data, op, keys);
        let card = result.len() as u64;
        trace!("{}STORE {} keys -> {} members", op.name(), keys.len(), card);
        if result.is_empty() {
            data.remove(dest);
        } else {
            data.insert(dest.to_vec(), result);
        }
        card
    }

    /// Remove and return an arbitrary member.
    pub fn spop(&self, key: &[u8]) -> Option<Member> {
        let mut data = self.write();
        let set = data.get_mut(key)?;
        let picked = set.iter().choose(&mut rand::thread_rng()).cloned()?;
        set.remove(&picked);
        if set.is_empty() {
            data.remove(key);
        }
        Some(picked)
    }

    /// Return an arbitrary member without removing it.
    pub fn srandmember(&self, key: &[u8]) -> Option<Member> {
        self.read()
            .get(key)?
            .iter()
            .choose(&mut rand::thread_rng())
            .cloned()
    }

    /// Atomically move `member` from `src` to `dst`. Returns false when
    /// `member` is not in `src`, in which case nothing changes.
    pub fn smove(&self, src: &[u8], dst: &[u8], member: &[u8]) -> bool {
        let mut data = self.write();
        let Some(source) = data.get_mut(src) else {
            return false;
        };
        if !source.remove(member) {
            return false;
        }
        if source.is_empty() {
            data.remove(src);
        }
        data.entry(dst.to_vec()).or_default().insert(member.to_vec());
        true
    }
}
