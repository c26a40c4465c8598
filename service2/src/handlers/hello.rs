pub const HELLO_SERVICE_2: &str = "Hello Service 2";

pub async fn hello() -> &'static str {
    tracing::info!("Service2 hello called");
    HELLO_SERVICE_2
}
