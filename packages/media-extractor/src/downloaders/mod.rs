//! Downloader implementations.

pub mod http;
pub mod mock;

pub use http::HttpDownloader;
pub use mock::{MockDownloader, MockFailure};
