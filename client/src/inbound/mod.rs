//! Inbound adapters driving the domain.
//!
//! - **cli**: `clap` command surface of the `content-admin` binary

pub mod cli;
