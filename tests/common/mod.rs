//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use movievault_proxy::config::schema::AppConfig;
use movievault_proxy::http::HttpServer;
use movievault_proxy::tmdb::TmdbClient;

/// Build a config pointing at the given upstream base URL, with test
/// secrets filled in.
pub fn test_config(upstream_base: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.base_url = upstream_base.to_string();
    config.upstream.api_key = "test-api-key".to_string();
    config
}

/// Start the proxy on an ephemeral port and return its address.
pub async fn spawn_app(config: AppConfig) -> SocketAddr {
    let tmdb = TmdbClient::new(&config.upstream).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config, tmdb);

    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    addr
}

/// Start a mock metadata upstream on an ephemeral port.
///
/// Returns the bound address and a log of every request target the mock
/// has seen, so tests can assert what actually went out on the wire.
#[allow(dead_code)]
pub async fn start_mock_tmdb<F>(respond: F) -> (SocketAddr, Arc<Mutex<Vec<String>>>)
where
    F: Fn(&str) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let seen_log = seen.clone();
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let seen_log = seen_log.clone();
                    let respond = respond.clone();
                    tokio::spawn(async move {
                        let mut buf = vec![0u8; 16 * 1024];
                        let mut read = 0;
                        loop {
                            match socket.read(&mut buf[read..]).await {
                                Ok(0) => break,
                                Ok(n) => {
                                    read += n;
                                    if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                                        break;
                                    }
                                    if read == buf.len() {
                                        break;
                                    }
                                }
                                Err(_) => return,
                            }
                        }

                        let head = String::from_utf8_lossy(&buf[..read]).to_string();
                        let target = head
                            .lines()
                            .next()
                            .and_then(|line| line.split_whitespace().nth(1))
                            .unwrap_or_default()
                            .to_string();
                        seen_log.lock().unwrap().push(target.clone());

                        let (status, body) = respond(&target);
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            429 => "429 Too Many Requests",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    (addr, seen)
}
