//! Installer downloads over HTTP/HTTPS.
//!
//! Transfers are blocking and stream straight to disk. The body is written to
//! a `.part` file that is renamed into place once the transfer completes, so a
//! file with the final name always holds a complete download.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;

use super::filename::filename_from_url;
use crate::error::{BootstrapError, Result};
use crate::requirements::{Dependency, SourceTable};

/// Bytes requested from the response per read.
pub const CHUNK_SIZE: usize = 8192;

/// Default whole-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

/// Progress reported after each chunk is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkProgress {
    /// Chunks received so far, including this one.
    pub chunks: u64,
    /// Size of this chunk in bytes.
    pub chunk_size: usize,
    /// Bytes received so far.
    pub bytes: u64,
    /// Total size announced by the server, if any.
    pub total: Option<u64>,
}

impl ChunkProgress {
    /// Completion percentage, when the total size is known.
    pub fn percent(&self) -> Option<u8> {
        match self.total {
            Some(0) => Some(100),
            Some(total) => Some((self.bytes.min(total) * 100 / total) as u8),
            None => None,
        }
    }
}

/// Fetches installers for dependencies into a download directory.
pub struct Downloader {
    client: Client,
    download_dir: PathBuf,
    sources: SourceTable,
    timeout: Duration,
}

impl Downloader {
    /// Create a downloader with the default timeout.
    pub fn new(download_dir: impl Into<PathBuf>, sources: SourceTable) -> Result<Self> {
        Self::with_timeout(download_dir, sources, DEFAULT_TIMEOUT)
    }

    /// Create a downloader with a custom timeout.
    pub fn with_timeout(
        download_dir: impl Into<PathBuf>,
        sources: SourceTable,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("tidal-bootstrap/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            download_dir: download_dir.into(),
            sources,
            timeout,
        })
    }

    /// Directory installers are written to.
    pub fn download_dir(&self) -> &Path {
        &self.download_dir
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The source table URLs are resolved from.
    pub fn sources(&self) -> &SourceTable {
        &self.sources
    }

    /// Where the installer for `dependency` will be written.
    pub fn destination(&self, dependency: Dependency) -> Result<PathBuf> {
        let url = self.source_url(dependency)?;
        Ok(self.download_dir.join(filename_from_url(url)?))
    }

    fn source_url(&self, dependency: Dependency) -> Result<&str> {
        self.sources
            .url(dependency)
            .ok_or(BootstrapError::UnknownSource(dependency))
    }

    /// Download the installer for `dependency`.
    ///
    /// `on_progress` is called once per chunk written. Returns the path of the
    /// completed file. Failures are not retried.
    pub fn download(
        &self,
        dependency: Dependency,
        on_progress: &mut dyn FnMut(ChunkProgress),
    ) -> Result<PathBuf> {
        let url = self.source_url(dependency)?;
        let destination = self.download_dir.join(filename_from_url(url)?);

        fs::create_dir_all(&self.download_dir)?;

        debug!("fetching {} from {}", dependency, url);
        let mut response = self.client.get(url).send()?;
        if !response.status().is_success() {
            return Err(BootstrapError::HttpStatus {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        let total = response.content_length();

        let partial = partial_path(&destination);
        let result = stream_to_file(&mut response, &partial, total, on_progress);
        match result {
            Ok(bytes) => {
                fs::rename(&partial, &destination)?;
                debug!(
                    "downloaded {} ({} bytes) to {}",
                    dependency,
                    bytes,
                    destination.display()
                );
                Ok(destination)
            }
            Err(e) => {
                let _ = fs::remove_file(&partial);
                Err(e)
            }
        }
    }
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    destination.with_file_name(name)
}

fn stream_to_file(
    body: &mut dyn Read,
    path: &Path,
    total: Option<u64>,
    on_progress: &mut dyn FnMut(ChunkProgress),
) -> Result<u64> {
    let mut writer = BufWriter::new(File::create(path)?);
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut chunks = 0u64;
    let mut bytes = 0u64;

    loop {
        let n = body.read(&mut buf)?;
        if n == 0 {
            break;
        }
        writer.write_all(&buf[..n])?;
        chunks += 1;
        bytes += n as u64;
        on_progress(ChunkProgress {
            chunks,
            chunk_size: n,
            bytes,
            total,
        });
    }

    writer.flush()?;
    Ok(bytes)
}
