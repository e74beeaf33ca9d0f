//! Conversion between application values and the wire values kept in the store.

use crate::error::{Result, SetError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::marker::PhantomData;

/// Encodes application values to wire values and back.
///
/// `encode` must be deterministic: the store deduplicates set members by exact
/// wire equality, so two values the application considers equal but that
/// encode to different bytes are kept as two distinct members. Codecs do not
/// try to canonicalize such values.
///
/// `decode` only has to invert `encode`. Wire data written by something else
/// may fail with [`SetError::Decode`].
pub trait Codec: Clone + Send + Sync {
    type Value;

    fn encode(&self, value: &Self::Value) -> Result<Vec<u8>>;

    fn decode(&self, wire: &[u8]) -> Result<Self::Value>;
}

/// UTF-8 text stored as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Raw;

impl Codec for Raw {
    type Value = String;

    fn encode(&self, value: &String) -> Result<Vec<u8>> {
        Ok(value.as_bytes().to_vec())
    }

    fn decode(&self, wire: &[u8]) -> Result<String> {
        String::from_utf8(wire.to_vec()).map_err(|e| SetError::Decode(e.to_string()))
    }
}

/// Arbitrary bytes stored as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Binary;

impl Codec for Binary {
    type Value = Vec<u8>;

    fn encode(&self, value: &Vec<u8>) -> Result<Vec<u8>> {
        Ok(value.clone())
    }

    fn decode(&self, wire: &[u8]) -> Result<Vec<u8>> {
        Ok(wire.to_vec())
    }
}

/// Structured values marshaled with bincode's standard configuration.
pub struct Marshal<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T> Marshal<T> {
    pub fn new() -> Self {
        Self { _value: PhantomData }
    }
}

impl<T> Default for Marshal<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Marshal<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Marshal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Marshal<{}>", std::any::type_name::<T>())
    }
}

impl<T> Codec for Marshal<T>
where
    T: Serialize + DeserializeOwned,
{
    type Value = T;

    fn encode(&self, value: &T) -> Result<Vec<u8>> {
        bincode::serde::encode_to_vec(value, bincode::config::standard())
            .map_err(|e| SetError::Encode(e.to_string()))
    }

    fn decode(&self, wire: &[u8]) -> Result<T> {
        let (value, used) =
            bincode::serde::decode_from_slice::<T, _>(wire, bincode::config::standard())
                .map_err(|e| SetError::Decode(e.to_string()))?;
        if used != wire.len() {
            return Err(SetError::Decode(format!(
                "{} trailing bytes after value",
                wire.len() - used
            )));
        }
        Ok(value)
    }
}

/// Serialization settings of a `RemoteSet`.
#[derive(Debug, Clone, Default)]
pub struct SetOptions<C = Raw> {
    pub codec: C,
}

impl<C: Codec> SetOptions<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }
}

impl SetOptions<Raw> {
    /// Plain text passthrough. Same as `SetOptions::default()`.
    pub fn raw() -> Self {
        Self { codec: Raw }
    }
}

impl SetOptions<Binary> {
    pub fn binary() -> Self {
        Self { codec: Binary }
    }
}

impl<T: Serialize + DeserializeOwned> SetOptions<Marshal<T>> {
    pub fn marshal() -> Self {
        Self { codec: Marshal::new() }
    }
}
