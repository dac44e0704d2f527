pub mod client;
pub mod forms;
pub mod types;

pub use self::client::AuthClient;
pub use self::forms::{submit_login, submit_register, LoginForm, RegisterForm};
pub use self::types::{LoginRequest, RegisterRequest};
