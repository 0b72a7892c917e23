pub mod endpoints;
pub mod http_client;
mod transport;

// Re-export endpoint resolution and path builders
pub use endpoints::*;
// Re-export HTTP client utilities
pub use http_client::*;
pub use transport::HttpTransport;
