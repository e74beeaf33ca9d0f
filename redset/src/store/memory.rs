use crate::error::StoreResult;
use crate::store::SetStore;
use setdb::{Combine, SetDB};

// In-process store, used directly by tests and behind the TCP server.
impl SetStore for SetDB {
    async fn sadd(&self, key: &[u8], members: &[&[u8]]) -> StoreResult<u64> {
        Ok(SetDB::sadd(self, key, members))
    }

    async fn srem(&self, key: &[u8], members: &[&[u8]]) -> StoreResult<u64> {
        Ok(SetDB::srem(self, key, members))
    }

    async fn sismember(&self, key: &[u8], member: &[u8]) -> StoreResult<bool> {
        Ok(SetDB::sismember(self, key, member))
    }

    async fn smembers(&self, key: &[u8]) -> StoreResult<Vec<Vec<u8>>> {
        Ok(SetDB::smembers(self, key))
    }

    async fn scard(&self, key: &[u8]) -> StoreResult<u64> {
        Ok(SetDB::scard(self, key))
    }

    async fn del(&self, key: &[u8]) -> StoreResult<u64> {
        Ok(SetDB::del(self, &[key]))
    }

    async fn exists(&self, key: &[u8]) -> StoreResult<bool> {
        Ok(SetDB::exists(self, key))
    }

    async fn sinter(&self, keys: &[&[u8]]) -> StoreResult<Vec<Vec<u8>>> {
        Ok(self.combine(Combine::Inter, keys))
    }

    async fn sunion(&self, keys: &[&[u8]]) -> StoreResult<Vec<Vec<u8>>> {
        Ok(self.combine(Combine::Union, keys))
    }

    async fn sdiff(&self, keys: &[&[u8]]) -> StoreResult<Vec<Vec<u8>>> {
        Ok(self.combine(Combine::Diff, keys))
    }

    async fn sinterstore(&self, dest: &[u8], keys: &[&[u8]]) -> StoreResult<u64> {
        Ok(self.combine_store(Combine::Inter, dest, keys))
    }

    async fn sunionstore(&self, dest: &[u8], keys: &[&[u8]]) -> StoreResult<u64> {
        Ok(self.combine_store(Combine::Union, dest, keys))
    }

    async fn sdiffstore(&self, dest: &[u8], keys: &[&[u8]]) -> StoreResult<u64> {
        Ok(self.combine_store(Combine::Diff, dest, keys))
    }

    async fn spop(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        Ok(SetDB::spop(self, key))
    }

    async fn srandmember(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        Ok(SetDB::srandmember(self, key))
    }

    async fn smove(&self, src: &[u8], dst: &[u8], member: &[u8]) -> StoreResult<bool> {
        Ok(SetDB::smove(self, src, dst, member))
    }
}
