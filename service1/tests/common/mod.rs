use axum::{http::HeaderMap, http::StatusCode, routing::get, Router};
use service1::config::{Service1Config, Service2Settings};
use service1::startup::Application;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    /// Spawn service1 pointed at `service2_hello_url`.
    pub async fn spawn(service2_hello_url: String) -> Self {
        let mut config = Service1Config::default();
        config.common.port = 0; // Random port for testing
        config.service2 = Service2Settings {
            hello_url: service2_hello_url,
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        let client = reqwest::Client::new();
        wait_until_ready(&client, &format!("{}/health", address)).await;

        TestApp { address, client }
    }

    pub async fn hello(&self) -> reqwest::Response {
        self.client
            .get(format!("{}/service1/hello", self.address))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

async fn wait_until_ready(client: &reqwest::Client, health_url: &str) {
    for _ in 0..50 {
        if client.get(health_url).send().await.is_ok() {
            break;
        }
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
    }
}

/// Run a real service2 in-process and return its hello URL.
pub async fn spawn_service2() -> String {
    let mut config = service2::config::Service2Config::default();
    config.common.port = 0;

    let app = service2::startup::Application::build(config)
        .await
        .expect("Failed to build service2");
    let address = format!("http://127.0.0.1:{}", app.port());

    tokio::spawn(async move {
        app.run_until_stopped().await.ok();
    });

    wait_until_ready(&reqwest::Client::new(), &format!("{}/health", address)).await;

    format!("{}/service2/hello", address)
}

/// A hello URL on a port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/service2/hello", port)
}

/// Stand-in for service2 that answers every hello with `status` and `body`,
/// remembering the last `x-request-id` it saw.
pub struct StubService2 {
    pub hello_url: String,
    pub last_request_id: Arc<Mutex<Option<String>>>,
}

impl StubService2 {
    pub async fn spawn(status: StatusCode, body: &'static str) -> Self {
        let last_request_id = Arc::new(Mutex::new(None));
        let seen = last_request_id.clone();

        let router = Router::new().route(
            "/service2/hello",
            get(move |headers: HeaderMap| {
                let seen = seen.clone();
                async move {
                    let id = headers
                        .get("x-request-id")
                        .and_then(|v| v.to_str().ok())
                        .map(|s| s.to_string());
                    *seen.lock().unwrap() = id;
                    (status, body)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        StubService2 {
            hello_url: format!("http://127.0.0.1:{}/service2/hello", port),
            last_request_id,
        }
    }
}
