//! HTTP outbound adapters.
//!
//! This module provides the reqwest implementation of the `ApiTransport`
//! port together with the response normalisation it relies on.

mod reqwest_transport;
mod response;

pub use reqwest_transport::ReqwestApiTransport;
