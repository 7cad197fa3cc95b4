//! Requests, responses and the network seam used by the asset worker

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the page issued a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    /// Top-level document navigation
    Navigate,
    /// Any subresource (script, style, manifest...)
    #[default]
    Subresource,
}

/// A GET request for a static asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Absolute path of the asset, e.g. `/price-checker/main.js`
    pub url: String,
    /// Request mode
    pub mode: RequestMode,
}

impl Request {
    /// Subresource request
    #[must_use]
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Subresource,
        }
    }

    /// Navigation request
    #[must_use]
    pub fn navigate(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            mode: RequestMode::Navigate,
        }
    }

    /// Returns true for navigation requests
    #[must_use]
    pub fn is_navigation(&self) -> bool {
        self.mode == RequestMode::Navigate
    }
}

/// A stored or fetched response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// HTTP status code
    pub status: u16,
    /// `Content-Type` value
    pub content_type: String,
    /// Body bytes
    pub body: Vec<u8>,
}

impl Response {
    /// 200 response
    #[must_use]
    pub fn ok(content_type: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type: content_type.into(),
            body: body.into(),
        }
    }

    /// Returns true for 2xx statuses
    #[must_use]
    pub fn is_ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Why a network fetch failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// No connectivity
    #[error("network unavailable")]
    Offline,
    /// The server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    Status {
        /// Requested url
        url: String,
        /// Returned status
        status: u16,
    },
    /// Reading the asset failed
    #[error("{0}")]
    Io(String),
}

impl FetchError {
    /// Returns true if no response was received at all
    #[must_use]
    pub fn is_transport(&self) -> bool {
        !matches!(self, Self::Status { .. })
    }
}

/// Source of fresh responses
pub trait Network {
    /// Fetches `request` from the origin
    fn fetch(&self, request: &Request) -> Result<Response, FetchError>;
}

/// Serves files from a local directory mounted under a URL prefix
///
/// `/price-checker/main.js` with prefix `/price-checker/` maps to
/// `<root>/main.js`; a request for a directory serves its `index.html`.
#[derive(Debug, Clone)]
pub struct DirectoryNetwork {
    root: PathBuf,
    prefix: String,
}

impl DirectoryNetwork {
    /// Creates a network rooted at `root`, answering urls under `prefix`
    #[must_use]
    pub fn new(root: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            prefix: prefix.into(),
        }
    }

    /// Directory being served
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = url.strip_prefix(&self.prefix)?;
        if relative.split('/').any(|part| part == "..") {
            return None;
        }
        let path = self.root.join(relative);
        if relative.is_empty() || path.is_dir() {
            return Some(path.join("index.html"));
        }
        Some(path)
    }
}

impl Network for DirectoryNetwork {
    fn fetch(&self, request: &Request) -> Result<Response, FetchError> {
        let not_found = || FetchError::Status {
            url: request.url.clone(),
            status: 404,
        };
        let path = self.resolve(&request.url).ok_or_else(not_found)?;
        match std::fs::read(&path) {
            Ok(body) => Ok(Response::ok(content_type_for(&path), body)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(not_found()),
            Err(e) => Err(FetchError::Io(e.to_string())),
        }
    }
}

/// A network with no connectivity; every fetch fails with [`FetchError::Offline`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Disconnected;

impl Network for Disconnected {
    fn fetch(&self, _request: &Request) -> Result<Response, FetchError> {
        Err(FetchError::Offline)
    }
}

/// Content type for a file path
#[must_use]
pub fn content_type_for(path: &Path) -> String {
    match path.extension().and_then(|e| e.to_str()) {
        Some("js" | "mjs") => "text/javascript".to_string(),
        Some("webmanifest") => "application/manifest+json".to_string(),
        _ => mime_guess::from_path(path)
            .first_or_octet_stream()
            .to_string(),
    }
}
