//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod api_transport;
mod session_provider;
mod tag_directory;

#[cfg(test)]
pub use api_transport::MockApiTransport;
pub use api_transport::{
    ApiRequest, ApiTransport, ClientError, FilePart, FormValue, HttpMethod, MultipartForm,
    RequestBody,
};
#[cfg(test)]
pub use session_provider::MockSessionProvider;
pub use session_provider::{AnonymousSession, SessionProvider};
#[cfg(test)]
pub use tag_directory::MockTagDirectory;
pub use tag_directory::TagDirectory;
