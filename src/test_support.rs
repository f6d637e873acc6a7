//! Helpers shared by the unit tests.

use std::sync::Once;

use mockito::{Mock, Server, ServerGuard};
use reqwest::blocking::Client;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

pub fn init_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,mppraha_opendata=debug")),
            )
            .with_test_writer()
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

/// Client that ignores proxy settings of the test environment.
pub fn client() -> Client {
    Client::builder()
        .no_proxy()
        .build()
        .expect("building test HTTP client")
}

/// Mock server answering GETs of one JSON document.
pub struct JsonServer {
    mock: Mock,
    server: ServerGuard,
}

impl JsonServer {
    pub fn start(status: usize, body: &str) -> Self {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/2024OR.json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create();
        Self { mock, server }
    }

    pub fn url(&self) -> String {
        format!("{}/2024OR.json", self.server.url())
    }

    /// Panics unless the document was requested exactly once.
    pub fn assert_requested(&self) {
        self.mock.assert();
    }
}
