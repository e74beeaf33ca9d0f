use crate::connection::operations::ConnectionOperations;
use crate::gateway::SetGateway;
use redis_protocol::resp2::types::OwnedFrame as Frame;

impl ConnectionOperations for SetGateway {
    async fn ping(&self, message: Option<&[u8]>) -> Frame {
        match message {
            Some(msg) => Frame::BulkString(msg.to_vec()),
            None => Frame::SimpleString(b"PONG".to_vec()),
        }
    }

    async fn echo(&self, message: &[u8]) -> Frame {
        Frame::BulkString(message.to_vec())
    }

    async fn quit(&self) -> Frame {
        Frame::SimpleString(b"OK".to_vec())
    }
}
