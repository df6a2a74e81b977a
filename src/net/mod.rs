//! Network layer: wire types, the REST client, error taxonomy, and the
//! authentication/session lifecycle.

pub mod api;
pub mod auth_client;
pub mod error;
pub mod types;
