pub mod health;
pub mod hello;
pub mod metrics;

pub use health::health_check;
pub use hello::{hello, HELLO_SERVICE_2};
pub use self::metrics::metrics;
