pub mod api;
pub mod config;
pub mod errors;
pub mod gate;

pub use self::api::ApiClient;
pub use self::config::ClientConfig;
pub use self::errors::ClientError;
pub use self::gate::{MutationGate, MutationPermit};
