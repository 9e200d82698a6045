//! Local HTTP server for download tests.
//!
//! Serves a fixed list of replies, one per connection, and hands back the
//! request heads and bodies it received.

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One canned HTTP response.
pub struct Reply {
    status: u16,
    body: Vec<u8>,
    /// Bytes promised in `Content-Length` but never sent.
    missing: usize,
}

impl Reply {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
            missing: 0,
        }
    }

    /// A 200 response whose connection closes `missing` bytes early.
    pub fn truncated(body: impl Into<Vec<u8>>, missing: usize) -> Self {
        Self {
            status: 200,
            body: body.into(),
            missing,
        }
    }
}

/// A request as seen by the server.
#[derive(Debug)]
pub struct Received {
    pub head: String,
    pub body: String,
}

pub struct TestServer {
    listener: TcpListener,
    addr: SocketAddr,
}

impl TestServer {
    pub async fn bind() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        Self { listener, addr }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Answer one connection per reply, in order.
    pub fn serve(self, replies: Vec<Reply>) -> JoinHandle<Vec<Received>> {
        tokio::spawn(async move {
            let mut received = Vec::new();
            for reply in replies {
                let (mut socket, _) = self.listener.accept().await.unwrap();
                received.push(read_request(&mut socket).await);
                write_reply(&mut socket, &reply).await;
            }
            received
        })
    }
}

async fn read_request(socket: &mut TcpStream) -> Received {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < head_end + content_length {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    Received {
        head,
        body: String::from_utf8_lossy(&buf[head_end..]).into_owned(),
    }
}

async fn write_reply(socket: &mut TcpStream, reply: &Reply) {
    let head = format!(
        "HTTP/1.1 {} Test\r\nContent-Length: {}\r\nContent-Type: application/octet-stream\r\nConnection: close\r\n\r\n",
        reply.status,
        reply.body.len() + reply.missing
    );
    socket.write_all(head.as_bytes()).await.unwrap();
    socket.write_all(&reply.body).await.unwrap();
    socket.flush().await.unwrap();
    let _ = socket.shutdown().await;
}
