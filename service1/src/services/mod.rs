pub mod service2_client;

pub use service2_client::{DownstreamError, Service2Client};
