//! Integration tests for Diverse Capital.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p diverse-capital-integration-tests
//! ```
//!
//! Each test boots its own admin server on an ephemeral localhost port with
//! a fresh in-memory store, so tests are independent and need no external
//! services.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;

use reqwest::Client;
use tokio::task::JoinHandle;

use diverse_capital_admin::config::AdminConfig;
use diverse_capital_admin::db::Store;
use diverse_capital_admin::state::AppState;

/// A running admin server plus an HTTP client pointed at it.
pub struct TestServer {
    pub client: Client,
    pub addr: SocketAddr,
    /// Handle onto the server's store, for assertions that bypass HTTP.
    pub store: Store,
    task: JoinHandle<()>,
}

impl TestServer {
    /// Start a server over the seeded fixtures with default configuration.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn seeded() -> Self {
        Self::start(AdminConfig::default(), Store::seeded()).await
    }

    /// Start a server over an empty store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn empty() -> Self {
        Self::start(AdminConfig::default(), Store::empty()).await
    }

    /// Start a server with the given configuration and store.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound.
    pub async fn start(config: AdminConfig, store: Store) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no address");

        let app = diverse_capital_admin::app(AppState::new(config, store.clone()));
        let task = tokio::spawn(async move {
            // Serve errors only surface as failed requests in the tests
            let _ = axum::serve(listener, app).await;
        });

        Self {
            client: Client::new(),
            addr,
            store,
            task,
        }
    }

    /// Absolute URL for a path on this server.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.task.abort();
    }
}
