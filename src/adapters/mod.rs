// Adapters layer: concrete implementations for external systems (wiki over HTTP, local disk).

pub mod http;
pub mod storage;

pub use http::WikiClient;
pub use storage::FilesystemWriter;
