//! # Expense Tracker (client)
//!
//! `expense-tracker` talks to the expense-tracking backend on behalf of a single
//! user. It covers sign-in and sign-up, the user's own profile, and read/write
//! access to their expenses.
//!
//! ## Session
//!
//! The client is authenticated when, and only when, a bearer token is present in
//! the session store. The store keeps two string keys (`authToken` and `username`)
//! in a small JSON file so the session survives between invocations. Nothing else
//! may write the token: every write goes through
//! [`session::SessionStore::record_authentication`] or
//! [`session::SessionStore::clear_session`].
//!
//! ## Transport
//!
//! All feature clients share one [`client::ApiClient`]. It attaches the stored
//! token as `Authorization: Bearer`, applies a request timeout, and allows at most
//! one mutating request in flight; a second submit while one is pending fails with
//! [`client::ClientError::Pending`] instead of reaching the network.

pub mod cli;
pub mod client;
pub mod features;
pub mod session;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
