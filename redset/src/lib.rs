//! Typed handles on sets stored in a remote RESP set store.
//!
//! [`RemoteSet`] turns set algebra into single store commands, encoding
//! values through the [`Codec`] chosen in its [`SetOptions`]. The store is
//! anything implementing [`SetStore`]: a [`RespStore`] connection or an
//! in-process [`SetDB`]. The `server` side exposes a `SetDB` over RESP2.

pub mod codec;
pub mod command;
pub mod config;
pub mod connection;
pub mod error;
pub mod gateway;
pub mod operand;
pub mod remote_set;
pub mod server;
pub mod set;
pub mod store;

pub use codec::{Binary, Codec, Marshal, Raw, SetOptions};
pub use error::{Result, SetError, StoreError, StoreResult};
pub use operand::{KeyedSet, SetOperand};
pub use remote_set::RemoteSet;
pub use setdb::SetDB;
pub use store::{RespStore, SetStore};
