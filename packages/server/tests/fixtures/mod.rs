//! Test fixtures for integration tests.

use std::time::Duration;

use parlor_server::ServerConfig;

/// A relay server over the in-memory store, bound to a fixed local port.
pub struct TestServer {
    port: u16,
}

impl TestServer {
    /// Spawn the server and wait until it accepts connections.
    pub async fn start(port: u16) -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port,
            database_url: None,
            max_db_connections: 5,
            allowed_origins: Vec::new(),
        };

        tokio::spawn(async move {
            if let Err(e) = parlor_server::run(config).await {
                panic!("Test server error: {e}");
            }
        });

        for _ in 0..100 {
            if tokio::net::TcpStream::connect(("127.0.0.1", port)).await.is_ok() {
                return Self { port };
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("Test server did not come up on port {port}");
    }

    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/chat", self.port)
    }
}
