use crate::error::{StoreError, StoreResult};
use crate::store::SetStore;
use log::{debug, warn};
use redis_protocol::resp2::{
    decode::decode,
    encode::encode,
    types::{OwnedFrame as Frame, Resp2Frame},
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::sync::{mpsc, oneshot};

const READ_BUF_SIZE: usize = 4096;
const QUEUE_DEPTH: usize = 64;

type Request = (Frame, oneshot::Sender<StoreResult<Frame>>);

/// A `SetStore` speaking RESP2 to a Redis-compatible server.
///
/// All clones share one connection, owned by a background task that handles
/// queued requests one at a time. A request that reached the queue is always
/// written and its reply always read, even if the caller stopped waiting, so
/// replies never drift onto later requests. After an I/O or protocol failure
/// the task stops and every later call fails with
/// [`StoreError::ConnectionClosed`]; nothing is retried.
#[derive(Clone)]
pub struct RespStore {
    addr: String,
    requests: mpsc::Sender<Request>,
}

struct Connection {
    stream: TcpStream,
    buf: Vec<u8>,
    filled: usize,
}

impl Connection {
    fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            buf: vec![0u8; READ_BUF_SIZE],
            filled: 0,
        }
    }

    async fn run(mut self, addr: String, mut requests: mpsc::Receiver<Request>) {
        while let Some((request, reply_to)) = requests.recv().await {
            let reply = self.exchange(&request).await;
            let broken = reply.is_err();
            if let Err(e) = &reply {
                warn!("connection to {} failed: {}", addr, e);
            }
            // the caller may have given up; the reply is consumed either way
            let _ = reply_to.send(reply);
            if broken {
                break;
            }
        }
        debug!("connection to {} closed", addr);
    }

    async fn exchange(&mut self, request: &Frame) -> StoreResult<Frame> {
        self.write_frame(request).await?;
        self.read_frame().await
    }

    async fn write_frame(&mut self, frame: &Frame) -> StoreResult<()> {
        let mut out = vec![0u8; frame.encode_len(false)];
        encode(&mut out, frame, false).map_err(|e| StoreError::Protocol(e.to_string()))?;
        self.stream.write_all(&out).await?;
        Ok(())
    }

    async fn read_frame(&mut self) -> StoreResult<Frame> {
        loop {
            if self.filled > 0 {
                match decode(&self.buf[..self.filled]) {
                    Ok(Some((frame, used))) => {
                        self.buf.copy_within(used..self.filled, 0);
                        self.filled -= used;
                        return Ok(frame);
                    }
                    Ok(None) => {}
                    Err(e) => return Err(StoreError::Protocol(e.to_string())),
                }
            }

            if self.filled == self.buf.len() {
                let grown = self.buf.len() * 2;
                self.buf.resize(grown, 0);
            }

            let n = self.stream.read(&mut self.buf[self.filled..]).await?;
            if n == 0 {
                return Err(StoreError::ConnectionClosed);
            }
            self.filled += n;
        }
    }
}

impl RespStore {
    /// Connect and spawn the connection task on the current tokio runtime.
    pub async fn connect(addr: impl Into<String>) -> StoreResult<Self> {
        let addr = addr.into();
        let stream = TcpStream::connect(&addr).await?;
        stream.set_nodelay(true)?;
        debug!("connected to {}", addr);

        let (requests, queue) = mpsc::channel(QUEUE_DEPTH);
        tokio::spawn(Connection::new(stream).run(addr.clone(), queue));
        Ok(Self { addr, requests })
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Send one command and wait for its reply. Error replies become
    /// [`StoreError::Server`] with the server's message unchanged.
    pub async fn call(&self, name: &str, args: &[&[u8]]) -> StoreResult<Frame> {
        let request = Frame::Array(
            std::iter::once(name.as_bytes())
                .chain(args.iter().copied())
                .map(|a| Frame::BulkString(a.to_vec()))
                .collect(),
        );

        let (reply_to, reply) = oneshot::channel();
        self.requests
            .send((request, reply_to))
            .await
            .map_err(|_| StoreError::ConnectionClosed)?;
        let reply = reply.await.map_err(|_| StoreError::ConnectionClosed)??;

        match reply {
            Frame::Error(msg) => {
                warn!("{} on {} failed: {}", name, self.addr, msg);
                Err(StoreError::Server(msg))
            }
            other => Ok(other),
        }
    }

    async fn count(&self, name: &str, args: &[&[u8]]) -> StoreResult<u64> {
        match self.call(name, args).await? {
            Frame::Integer(n) if n >= 0 => Ok(n as u64),
            other => Err(unexpected(name, &other)),
        }
    }

    async fn flag(&self, name: &str, args: &[&[u8]]) -> StoreResult<bool> {
        match self.call(name, args).await? {
            Frame::Integer(0) => Ok(false),
            Frame::Integer(1) => Ok(true),
            other => Err(unexpected(name, &other)),
        }
    }

    async fn members(&self, name: &str, args: &[&[u8]]) -> StoreResult<Vec<Vec<u8>>> {
        match self.call(name, args).await? {
            Frame::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Frame::BulkString(b) | Frame::SimpleString(b) => Ok(b),
                    other => Err(unexpected(name, &other)),
                })
                .collect(),
            Frame::Null => Ok(Vec::new()),
            other => Err(unexpected(name, &other)),
        }
    }

    async fn optional(&self, name: &str, args: &[&[u8]]) -> StoreResult<Option<Vec<u8>>> {
        match self.call(name, args).await? {
            Frame::BulkString(b) | Frame::SimpleString(b) => Ok(Some(b)),
            Frame::Null => Ok(None),
            other => Err(unexpected(name, &other)),
        }
    }
}

fn unexpected(command: &str, reply: &Frame) -> StoreError {
    StoreError::UnexpectedReply {
        command: command.to_string(),
        reply: format!("{:?}", reply),
    }
}

impl SetStore for RespStore {
    async fn sadd(&self, key: &[u8], members: &[&[u8]]) -> StoreResult<u64> {
        self.count("SADD", &[&[key][..], members].concat()).await
    }

    async fn srem(&self, key: &[u8], members: &[&[u8]]) -> StoreResult<u64> {
        self.count("SREM", &[&[key][..], members].concat()).await
    }

    async fn sismember(&self, key: &[u8], member: &[u8]) -> StoreResult<bool> {
        self.flag("SISMEMBER", &[key, member]).await
    }

    async fn smembers(&self, key: &[u8]) -> StoreResult<Vec<Vec<u8>>> {
        self.members("SMEMBERS", &[key]).await
    }

    async fn scard(&self, key: &[u8]) -> StoreResult<u64> {
        self.count("SCARD", &[key]).await
    }

    async fn del(&self, key: &[u8]) -> StoreResult<u64> {
        self.count("DEL", &[key]).await
    }

    async fn exists(&self, key: &[u8]) -> StoreResult<bool> {
        Ok(self.count("EXISTS", &[key]).await? > 0)
    }

    async fn sinter(&self, keys: &[&[u8]]) -> StoreResult<Vec<Vec<u8>>> {
        self.members("SINTER", keys).await
    }

    async fn sunion(&self, keys: &[&[u8]]) -> StoreResult<Vec<Vec<u8>>> {
        self.members("SUNION", keys).await
    }

    async fn sdiff(&self, keys: &[&[u8]]) -> StoreResult<Vec<Vec<u8>>> {
        self.members("SDIFF", keys).await
    }

    async fn sinterstore(&self, dest: &[u8], keys: &[&[u8]]) -> StoreResult<u64> {
        self.count("SINTERSTORE", &[&[dest][..], keys].concat()).await
    }

    async fn sunionstore(&self, dest: &[u8], keys: &[&[u8]]) -> StoreResult<u64> {
        self.count("SUNIONSTORE", &[&[dest][..], keys].concat()).await
    }

    async fn sdiffstore(&self, dest: &[u8], keys: &[&[u8]]) -> StoreResult<u64> {
        self.count("SDIFFSTORE", &[&[dest][..], keys].concat()).await
    }

    async fn spop(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        self.optional("SPOP", &[key]).await
    }

    async fn srandmember(&self, key: &[u8]) -> StoreResult<Option<Vec<u8>>> {
        self.optional("SRANDMEMBER", &[key]).await
    }

    async fn smove(&self, src: &[u8], dst: &[u8], member: &[u8]) -> StoreResult<bool> {
        self.flag("SMOVE", &[src, dst, member]).await
    }
}
