//! Session authentication service
//!
//! Verifies credentials, issues time-limited bearer tokens, resolves tokens on
//! incoming requests and revokes tokens through a blacklist.
//!
//! The domain core (`domain::auth`) depends only on the [`CredentialStore`]
//! port; `outbound` provides Postgres and in-memory stores and `inbound`
//! exposes the core over HTTP.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::auth::ports::AuthServicePort;
pub use domain::auth::ports::CredentialStore;
pub use domain::user;
pub use outbound::repositories;
