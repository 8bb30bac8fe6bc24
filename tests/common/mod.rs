//! Shared helpers for integration tests.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use hello_api::config::ApiConfig;
use hello_api::http::HttpServer;
use hello_api::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// A server running on an ephemeral port, stopped on drop.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
    shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Config whose sheets land in `dir`.
pub fn config_in(dir: &Path) -> ApiConfig {
    let mut config = ApiConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.sheet.output_dir = dir.to_string_lossy().into_owned();
    config
}

/// Start the server with `config` and wait until it accepts connections.
pub async fn start_server(config: ApiConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.clone();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    TestServer {
        addr,
        client,
        shutdown,
    }
}
