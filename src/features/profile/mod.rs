pub mod client;
pub mod forms;
pub mod types;

pub use self::client::ProfileClient;
pub use self::forms::ProfileForm;
pub use self::types::{ProfileUpdate, Role, UserProfile};
