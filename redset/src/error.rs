use thiserror::Error;

pub type Result<T> = std::result::Result<T, SetError>;
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised by a `RemoteSet`.
#[derive(Debug, Error)]
pub enum SetError {
    /// The call was malformed before anything was sent, e.g. a set algebra
    /// operation with no operands.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The store failed. Carried through untouched.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A value could not be encoded by the configured codec.
    #[error("encode error: {0}")]
    Encode(String),

    /// A fetched element could not be decoded by the configured codec.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Errors reported by a `SetStore`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Connecting, reading or writing the socket failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte stream was not valid RESP.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// The server answered with an error reply.
    #[error("{0}")]
    Server(String),

    /// A well-formed reply of the wrong shape for the command sent, e.g.
    /// `+OK` where an integer count was expected.
    #[error("unexpected reply to {command}: {reply}")]
    UnexpectedReply { command: String, reply: String },

    /// The peer hung up, or an earlier failure already ended the connection.
    #[error("connection closed by peer")]
    ConnectionClosed,
}
