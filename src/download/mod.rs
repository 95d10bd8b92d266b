//! Installer retrieval.
//!
//! - [`filename`] - Destination names derived from source URLs
//! - [`http`] - Blocking HTTP downloader with per-chunk progress

pub mod filename;
pub mod http;

pub use filename::filename_from_url;
pub use http::{ChunkProgress, Downloader, CHUNK_SIZE, DEFAULT_TIMEOUT};
