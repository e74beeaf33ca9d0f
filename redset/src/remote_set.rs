use crate::codec::{Codec, Raw, SetOptions};
use crate::error::Result;
use crate::operand::{KeyedSet, SetOperand, resolve};
use crate::store::SetStore;
use log::debug;
use std::collections::HashSet;
use std::fmt;

/// A named set whose members live in a remote store.
///
/// The handle holds no members. Every read goes to the store, so handles on
/// the same key always agree with each other and with other writers. Each
/// method issues exactly one store command; sequences such as "check then
/// add" are not atomic.
///
/// Read-combine methods (`intersection`, `union`, `difference`) decode the
/// resulting members. Store-combine methods (`interstore`, `unionstore`,
/// `diffstore`) leave the result in the store and only return its size.
///
/// Dropping a handle never touches the store. Use [`RemoteSet::clear`] to
/// delete the collection.
#[derive(Clone)]
pub struct RemoteSet<S, C = Raw> {
    key: String,
    store: S,
    options: SetOptions<C>,
}

impl<S, C> fmt::Debug for RemoteSet<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteSet").field("key", &self.key).finish_non_exhaustive()
    }
}

impl<S, C> KeyedSet for RemoteSet<S, C> {
    fn key(&self) -> &str {
        &self.key
    }
}

impl<'a, S, C> From<&'a RemoteSet<S, C>> for SetOperand<'a> {
    fn from(set: &'a RemoteSet<S, C>) -> Self {
        SetOperand::Ref(set)
    }
}

impl<S: SetStore, C: Codec> RemoteSet<S, C> {
    pub fn new(key: impl Into<String>, store: S, options: SetOptions<C>) -> Self {
        Self {
            key: key.into(),
            store,
            options,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn options(&self) -> &SetOptions<C> {
        &self.options
    }

    fn encode(&self, value: &C::Value) -> Result<Vec<u8>> {
        self.options.codec.encode(value)
    }

    fn decode_all(&self, wire: Vec<Vec<u8>>) -> Result<Vec<C::Value>> {
        wire.iter().map(|w| self.options.codec.decode(w)).collect()
    }

    fn decode_opt(&self, wire: Option<Vec<u8>>) -> Result<Option<C::Value>> {
        wire.map(|w| self.options.codec.decode(&w)).transpose()
    }

    /// `[self.key, operand keys..]`, the key list handed to the store.
    fn keys_with<'a, I>(&'a self, operands: I) -> Result<Vec<&'a [u8]>>
    where
        I: IntoIterator,
        I::Item: Into<SetOperand<'a>>,
    {
        let others = resolve(operands)?;
        let mut keys = Vec::with_capacity(others.len() + 1);
        keys.push(self.key.as_bytes());
        keys.extend(others.into_iter().map(str::as_bytes));
        Ok(keys)
    }

    /// Add `value`. Returns false if it was already a member.
    pub async fn add(&self, value: &C::Value) -> Result<bool> {
        let wire = self.encode(value)?;
        debug!("SADD {}", self.key);
        Ok(self.store.sadd(self.key.as_bytes(), &[&wire]).await? > 0)
    }

    /// Add every value in one command. Returns how many were new.
    pub async fn merge<'v, I>(&self, values: I) -> Result<u64>
    where
        I: IntoIterator<Item = &'v C::Value>,
        C::Value: 'v,
    {
        let wire = values
            .into_iter()
            .map(|v| self.encode(v))
            .collect::<Result<Vec<_>>>()?;
        if wire.is_empty() {
            return Ok(0);
        }
        let refs: Vec<&[u8]> = wire.iter().map(Vec::as_slice).collect();
        debug!("SADD {} ({} values)", self.key, refs.len());
        Ok(self.store.sadd(self.key.as_bytes(), &refs).await?)
    }

    pub async fn is_member(&self, value: &C::Value) -> Result<bool> {
        let wire = self.encode(value)?;
        Ok(self.store.sismember(self.key.as_bytes(), &wire).await?)
    }

    /// Remove `value`. Returns false if it was not a member.
    pub async fn delete(&self, value: &C::Value) -> Result<bool> {
        let wire = self.encode(value)?;
        debug!("SREM {}", self.key);
        Ok(self.store.srem(self.key.as_bytes(), &[&wire]).await? > 0)
    }

    /// Delete the whole collection from the store, for every handle on this key.
    pub async fn clear(&self) -> Result<()> {
        debug!("DEL {}", self.key);
        self.store.del(self.key.as_bytes()).await?;
        Ok(())
    }

    /// All members, in no particular order.
    pub async fn members(&self) -> Result<Vec<C::Value>> {
        let wire = self.store.smembers(self.key.as_bytes()).await?;
        self.decode_all(wire)
    }

    pub async fn len(&self) -> Result<u64> {
        Ok(self.store.scard(self.key.as_bytes()).await?)
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }

    /// Whether the key exists in the store at all.
    pub async fn exists(&self) -> Result<bool> {
        Ok(self.store.exists(self.key.as_bytes()).await?)
    }

    /// Remove and return a random member.
    pub async fn pop(&self) -> Result<Option<C::Value>> {
        let wire = self.store.spop(self.key.as_bytes()).await?;
        self.decode_opt(wire)
    }

    pub async fn random_member(&self) -> Result<Option<C::Value>> {
        let wire = self.store.srandmember(self.key.as_bytes()).await?;
        self.decode_opt(wire)
    }

    /// Move `value` into `destination` in one atomic store command. Returns
    /// false if `value` was not a member of this set.
    pub async fn move_to<'a>(
        &self,
        value: &C::Value,
        destination: impl Into<SetOperand<'a>>,
    ) -> Result<bool> {
        let wire = self.encode(value)?;
        let dest = destination.into().key();
        debug!("SMOVE {} -> {}", self.key, dest);
        Ok(self
            .store
            .smove(self.key.as_bytes(), dest.as_bytes(), &wire)
            .await?)
    }

    /// Members present in this set and in every operand.
    pub async fn intersection<'a, I>(&'a self, operands: I) -> Result<Vec<C::Value>>
    where
        I: IntoIterator,
        I::Item: Into<SetOperand<'a>>,
    {
        let keys = self.keys_with(operands)?;
        let wire = self.store.sinter(&keys).await?;
        self.decode_all(wire)
    }

    /// Members present in this set or in any operand.
    pub async fn union<'a, I>(&'a self, operands: I) -> Result<Vec<C::Value>>
    where
        I: IntoIterator,
        I::Item: Into<SetOperand<'a>>,
    {
        let keys = self.keys_with(operands)?;
        let wire = self.store.sunion(&keys).await?;
        self.decode_all(wire)
    }

    /// Members of this set that are in none of the operands. The operands are
    /// subtracted together by the store's multi-key diff, not pairwise.
    pub async fn difference<'a, I>(&'a self, operands: I) -> Result<Vec<C::Value>>
    where
        I: IntoIterator,
        I::Item: Into<SetOperand<'a>>,
    {
        let keys = self.keys_with(operands)?;
        let wire = self.store.sdiff(&keys).await?;
        self.decode_all(wire)
    }

    /// Store the intersection under `name`, replacing it. Returns its size.
    pub async fn interstore<'a, I>(&'a self, name: &str, operands: I) -> Result<u64>
    where
        I: IntoIterator,
        I::Item: Into<SetOperand<'a>>,
    {
        let keys = self.keys_with(operands)?;
        debug!("SINTERSTORE {} over {} keys", name, keys.len());
        Ok(self.store.sinterstore(name.as_bytes(), &keys).await?)
    }

    /// Store the union under `name`, replacing it. Returns its size.
    pub async fn unionstore<'a, I>(&'a self, name: &str, operands: I) -> Result<u64>
    where
        I: IntoIterator,
        I::Item: Into<SetOperand<'a>>,
    {
        let keys = self.keys_with(operands)?;
        debug!("SUNIONSTORE {} over {} keys", name, keys.len());
        Ok(self.store.sunionstore(name.as_bytes(), &keys).await?)
    }

    /// Store the difference under `name`, replacing it. Returns its size.
    pub async fn diffstore<'a, I>(&'a self, name: &str, operands: I) -> Result<u64>
    where
        I: IntoIterator,
        I::Item: Into<SetOperand<'a>>,
    {
        let keys = self.keys_with(operands)?;
        debug!("SDIFFSTORE {} over {} keys", name, keys.len());
        Ok(self.store.sdiffstore(name.as_bytes(), &keys).await?)
    }

    /// Compare the stored members with `expected` as sets. Fetches the whole
    /// collection; every fetched member must decode.
    pub async fn eq_members<'v, I>(&self, expected: I) -> Result<bool>
    where
        I: IntoIterator<Item = &'v C::Value>,
        C::Value: 'v,
    {
        let expected = expected
            .into_iter()
            .map(|v| self.encode(v))
            .collect::<Result<HashSet<_>>>()?;
        let stored = self.store.smembers(self.key.as_bytes()).await?;
        for wire in &stored {
            self.options.codec.decode(wire)?;
        }
        let stored: HashSet<Vec<u8>> = stored.into_iter().collect();
        Ok(stored == expected)
    }
}
