use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use uuid::Uuid;

use folio::config::Config;
use folio::store::JsonFileStore;

/// A running test server instance with a dedicated backing file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub store_path: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Submit a contact payload, return (body, status).
    pub async fn submit(&self, payload: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/contact"))
            .json(payload)
            .send()
            .await
            .expect("submit request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Parse the backing file as a JSON array; empty if the file is absent.
    pub async fn stored(&self) -> Vec<Value> {
        match tokio::fs::read_to_string(&self.store_path).await {
            Ok(content) => {
                serde_json::from_str(&content).expect("backing file is not a JSON array")
            }
            Err(_) => Vec::new(),
        }
    }

    /// Raw bytes of the backing file, if it exists.
    pub async fn stored_raw(&self) -> Option<Vec<u8>> {
        tokio::fs::read(&self.store_path).await.ok()
    }
}

/// Spawn a test app backed by a fresh temporary file.
pub async fn spawn_app() -> TestApp {
    let store_path = std::env::temp_dir()
        .join(format!("folio_test_{}", Uuid::now_v7()))
        .join("contact.json");

    let config = Config {
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to a random port
        contact_path: store_path.clone(),
        max_body_size: 65_536,
        log_level: "warn".to_string(),
    };

    let store = Arc::new(JsonFileStore::new(store_path.clone()));
    let app = folio::build_app(store, config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    let client = Client::new();

    TestApp {
        addr,
        client,
        store_path,
    }
}

/// Remove the test backing file after tests complete.
pub async fn cleanup(app: TestApp) {
    if let Some(dir) = app.store_path.parent() {
        let _ = tokio::fs::remove_dir_all(dir).await;
    }
}
