use redis_protocol::resp2::types::OwnedFrame as Frame;

pub trait ConnectionOperations {
    /// Responds to a PING command with an optional message.
    fn ping(&self, message: Option<&[u8]>) -> impl std::future::Future<Output = Frame> + Send;

    /// Returns the given message.
    fn echo(&self, message: &[u8]) -> impl std::future::Future<Output = Frame> + Send;

    /// Acknowledges a QUIT; the caller closes the connection after the reply.
    fn quit(&self) -> impl std::future::Future<Output = Frame> + Send;
}
