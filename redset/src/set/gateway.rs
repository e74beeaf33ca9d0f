use crate::gateway::SetGateway;
use crate::set::operations::SetOperations;
use redis_protocol::resp2::types::OwnedFrame as Frame;
use setdb::{Combine, Member};

fn members_frame(members: Vec<Member>) -> Frame {
    Frame::Array(members.into_iter().map(Frame::BulkString).collect())
}

fn count_frame(n: u64) -> Frame {
    Frame::Integer(n as i64)
}

fn bool_frame(b: bool) -> Frame {
    Frame::Integer(i64::from(b))
}

fn optional_frame(member: Option<Member>) -> Frame {
    match member {
        Some(m) => Frame::BulkString(m),
        None => Frame::Null,
    }
}

impl SetOperations for SetGateway {
    async fn sadd(&self, key: &[u8], members: &[&[u8]]) -> Frame {
        count_frame(self.db.sadd(key, members))
    }

    async fn srem(&self, key: &[u8], members: &[&[u8]]) -> Frame {
        count_frame(self.db.srem(key, members))
    }

    async fn smembers(&self, key: &[u8]) -> Frame {
        members_frame(self.db.smembers(key))
    }

    async fn sismember(&self, key: &[u8], member: &[u8]) -> Frame {
        bool_frame(self.db.sismember(key, member))
    }

    async fn scard(&self, key: &[u8]) -> Frame {
        count_frame(self.db.scard(key))
    }

    async fn del(&self, keys: &[&[u8]]) -> Frame {
        count_frame(self.db.del(keys))
    }

    async fn exists(&self, keys: &[&[u8]]) -> Frame {
        count_frame(keys.iter().filter(|k| self.db.exists(k)).count() as u64)
    }

    async fn sunion(&self, keys: &[&[u8]]) -> Frame {
        members_frame(self.db.combine(Combine::Union, keys))
    }

    async fn sinter(&self, keys: &[&[u8]]) -> Frame {
        members_frame(self.db.combine(Combine::Inter, keys))
    }

    async fn sdiff(&self, keys: &[&[u8]]) -> Frame {
        members_frame(self.db.combine(Combine::Diff, keys))
    }

    async fn sunionstore(&self, dest: &[u8], keys: &[&[u8]]) -> Frame {
        count_frame(self.db.combine_store(Combine::Union, dest, keys))
    }

    async fn sinterstore(&self, dest: &[u8], keys: &[&[u8]]) -> Frame {
        count_frame(self.db.combine_store(Combine::Inter, dest, keys))
    }

    async fn sdiffstore(&self, dest: &[u8], keys: &[&[u8]]) -> Frame {
        count_frame(self.db.combine_store(Combine::Diff, dest, keys))
    }

    async fn spop(&self, key: &[u8]) -> Frame {
        optional_frame(self.db.spop(key))
    }

    async fn srandmember(&self, key: &[u8]) -> Frame {
        optional_frame(self.db.srandmember(key))
    }

    async fn smove(&self, src: &[u8], dst: &[u8], member: &[u8]) -> Frame {
        bool_frame(self.db.smove(src, dst, member))
    }
}
