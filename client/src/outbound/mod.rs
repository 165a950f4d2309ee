//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed content API transport
//! - **session**: in-process session holding a configured bearer token
//!
//! Adapters are thin translators between domain types and the wire. They
//! contain no business logic.

pub mod http;
pub mod session;
