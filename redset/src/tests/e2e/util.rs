use crate::gateway::SetGateway;
use crate::server::Server;
use redis_protocol::resp2::{
    decode::decode,
    encode::encode,
    types::{OwnedFrame as Frame, Resp2Frame},
};
use setdb::SetDB;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// Spawn a set server over a fresh, empty `SetDB` on an ephemeral port.
/// Returns (bind_addr, server_handle).
pub async fn spawn_test_server() -> (String, tokio::task::JoinHandle<()>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let bind_addr = listener.local_addr().expect("local_addr").to_string();

    let server = Server::new(bind_addr.clone(), SetGateway::new(SetDB::new()));
    let srv = tokio::spawn(async move {
        let _ = server.serve(listener).await;
    });

    (bind_addr, srv)
}

/// Send one command as a RESP array of bulk strings and read back one reply.
pub async fn roundtrip(stream: &mut TcpStream, args: &[&[u8]]) -> Frame {
    let req = Frame::Array(args.iter().map(|a| Frame::BulkString(a.to_vec())).collect());
    send_frame(stream, &req).await
}

/// Write an arbitrary frame and read back one reply.
pub async fn send_frame(stream: &mut TcpStream, req: &Frame) -> Frame {
    let mut out = vec![0u8; req.encode_len(false)];
    let _ = encode(&mut out, req, false);
    stream.write_all(&out).await.expect("write");

    let mut buf = Vec::new();
    let mut chunk = vec![0u8; 1024];
    loop {
        let n = stream.read(&mut chunk).await.expect("read");
        assert!(n > 0, "server closed the connection");
        buf.extend_from_slice(&chunk[..n]);
        if let Some((frame, _used)) = decode(&buf).expect("decode") {
            return frame;
        }
    }
}
