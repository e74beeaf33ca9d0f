//! The primitive set commands a `RemoteSet` is built on.

use crate::error::StoreResult;
use std::future::Future;

mod memory;
pub mod resp;

pub use resp::RespStore;

/// A handle to a keyed set store.
///
/// Implementations must execute every call atomically, deduplicate members by
/// exact byte equality and treat absent keys as empty sets. Handles are cheap
/// to clone and clones address the same store.
pub trait SetStore: Clone + Send + Sync {
    /// Adds members to the set at `key`. Returns how many were new.
    fn sadd(&self, key: &[u8], members: &[&[u8]]) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Removes members from the set at `key`. Returns how many were present.
    fn srem(&self, key: &[u8], members: &[&[u8]]) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Returns if member is a member of the set stored at key.
    fn sismember(&self, key: &[u8], member: &[u8]) -> impl Future<Output = StoreResult<bool>> + Send;

    /// Returns all the members of the set value stored at key.
    fn smembers(&self, key: &[u8]) -> impl Future<Output = StoreResult<Vec<Vec<u8>>>> + Send;

    /// Returns the cardinality of the set at `key`.
    fn scard(&self, key: &[u8]) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Deletes `key` whatever it holds. Returns how many keys were removed.
    fn del(&self, key: &[u8]) -> impl Future<Output = StoreResult<u64>> + Send;

    fn exists(&self, key: &[u8]) -> impl Future<Output = StoreResult<bool>> + Send;

    /// Returns the members of the set resulting from the intersection of all the given sets.
    fn sinter(&self, keys: &[&[u8]]) -> impl Future<Output = StoreResult<Vec<Vec<u8>>>> + Send;

    /// Returns the members of the set resulting from the union of all the given sets.
    fn sunion(&self, keys: &[&[u8]]) -> impl Future<Output = StoreResult<Vec<Vec<u8>>>> + Send;

    /// Returns the members of the set resulting from the difference between the first set and all the successive sets.
    fn sdiff(&self, keys: &[&[u8]]) -> impl Future<Output = StoreResult<Vec<Vec<u8>>>> + Send;

    /// Like `sinter`, but stores the result at `dest` and returns its cardinality.
    fn sinterstore(&self, dest: &[u8], keys: &[&[u8]]) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Like `sunion`, but stores the result at `dest` and returns its cardinality.
    fn sunionstore(&self, dest: &[u8], keys: &[&[u8]]) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Like `sdiff`, but stores the result at `dest` and returns its cardinality.
    fn sdiffstore(&self, dest: &[u8], keys: &[&[u8]]) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Removes and returns a random member.
    fn spop(&self, key: &[u8]) -> impl Future<Output = StoreResult<Option<Vec<u8>>>> + Send;

    /// Returns a random member without removing it.
    fn srandmember(&self, key: &[u8]) -> impl Future<Output = StoreResult<Option<Vec<u8>>>> + Send;

    /// Moves `member` from `src` to `dst`. Returns false if it was not in `src`.
    fn smove(&self, src: &[u8], dst: &[u8], member: &[u8]) -> impl Future<Output = StoreResult<bool>> + Send;
}
