use crate::command::{CommandHandler, Reply};
use crate::gateway::SetGateway;
use log::{debug, info, warn};
use redis_protocol::resp2::{
    decode::decode,
    encode::encode,
    types::{OwnedFrame as Frame, Resp2Frame},
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub struct Server {
    addr: String,
    handler: CommandHandler,
}

impl Server {
    pub fn new(addr: impl Into<String>, gateway: SetGateway) -> Self {
        Self {
            addr: addr.into(),
            handler: CommandHandler::new(gateway),
        }
    }

    pub async fn start(&self) -> std::io::Result<()> {
        let listener = TcpListener::bind(&self.addr).await?;
        self.serve(listener).await
    }

    /// Accept connections on an already bound listener until accept fails.
    pub async fn serve(&self, listener: TcpListener) -> std::io::Result<()> {
        info!("Listening on {}", listener.local_addr()?);

        loop {
            let (socket, peer) = listener.accept().await?;
            debug!("accepted connection from {}", peer);
            tokio::spawn(Self::handle_connection(socket, self.handler.clone()));
        }
    }

    async fn handle_connection(mut socket: TcpStream, handler: CommandHandler) {
        let mut buf = vec![0u8; 4096];
        let mut offset = 0;

        loop {
            if offset == buf.len() {
                let grown = buf.len() * 2;
                buf.resize(grown, 0);
            }

            let n = match socket.read(&mut buf[offset..]).await {
                Ok(0) => return, // connection closed
                Ok(n) => n,
                Err(e) => {
                    debug!("read failed: {}", e);
                    return;
                }
            };

            let mut consumed = 0;
            let mut frames = Vec::new();

            // Parse all complete frames from the buffer
            loop {
                match decode(&buf[consumed..offset + n]) {
                    Ok(Some((frame, used))) => {
                        frames.push(frame);
                        consumed += used;
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!("dropping connection on malformed request: {}", e);
                        return;
                    }
                }
            }

            // Move any leftover bytes to the front of the buffer
            if consumed < offset + n {
                buf.copy_within(consumed..offset + n, 0);
                offset = offset + n - consumed;
            } else {
                offset = 0;
            }

            for frame in frames {
                let reply = Self::process_command(frame, &handler).await;
                let mut out = vec![0u8; reply.frame.encode_len(false)];
                if let Err(e) = encode(&mut out, &reply.frame, false) {
                    warn!("failed to encode reply: {}", e);
                    return;
                }
                if socket.write_all(&out).await.is_err() || reply.close {
                    return;
                }
            }
        }
    }

    async fn process_command(frame: Frame, handler: &CommandHandler) -> Reply {
        let Frame::Array(parts) = frame else {
            return protocol_error("expected array");
        };

        let mut args = Vec::with_capacity(parts.len());
        for part in parts {
            match part {
                Frame::BulkString(arg) => args.push(arg),
                _ => return protocol_error("expected bulk string"),
            }
        }
        if args.is_empty() {
            return protocol_error("empty command");
        }

        let name = String::from_utf8_lossy(&args.remove(0)).into_owned();
        handler.handle(&name, args).await
    }
}

fn protocol_error(detail: &str) -> Reply {
    Frame::Error(format!("ERR Protocol error: {}", detail)).into()
}
