//! Shared test utilities
//!
//! A scripted HTTP responder built directly on a TCP listener: it answers
//! every request with a fixed status and body (optionally after a delay),
//! or echoes the request path back as the body. Enough HTTP for a client
//! that only ever issues GETs.

use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Spawn a responder that answers every request with `status` and `body`
pub async fn spawn_responder(status: u16, body: &'static str, delay: Duration) -> SocketAddr {
    spawn(move |_path| (status, body.to_string()), delay).await
}

/// Spawn a responder that answers 200 with the request path as the body
pub async fn spawn_echo_responder(delay: Duration) -> SocketAddr {
    spawn(|path| (200, path), delay).await
}

/// Reserve a 127.0.0.1 port with nothing listening on it
pub async fn unreachable_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

async fn spawn<F>(respond: F, delay: Duration) -> SocketAddr
where
    F: Fn(String) -> (u16, String) + Clone + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let respond = respond.clone();

            tokio::spawn(async move {
                // A GET request head fits in one read on loopback.
                let mut buf = [0u8; 2048];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let head = String::from_utf8_lossy(&buf[..n]);
                let path = head
                    .lines()
                    .next()
                    .and_then(|line| line.split_whitespace().nth(1))
                    .unwrap_or("/")
                    .to_string();

                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }

                let (status, body) = respond(path);
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}
