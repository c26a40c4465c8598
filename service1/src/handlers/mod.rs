pub mod health;
pub mod hello;
pub mod metrics;

pub use health::health_check;
pub use hello::{hello, DOWNSTREAM_ERROR, HELLO_SERVICE_1};
pub use self::metrics::metrics;
