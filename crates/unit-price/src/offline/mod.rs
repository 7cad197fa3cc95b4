//! Offline asset cache
//!
//! Probar: Poka-Yoke - a failed precache never breaks the page, it only
//! loses offline support.
//!
//! The cache name carries a version; bumping it is the only way to
//! invalidate previously cached assets.

pub mod network;
pub mod storage;
pub mod worker;

pub use network::{
    content_type_for, Disconnected, DirectoryNetwork, FetchError, Network, Request, RequestMode,
    Response,
};
pub use storage::{Cache, CacheStorage};
pub use worker::{AssetWorker, WorkerState};

/// Versioned cache name
pub const CACHE_NAME: &str = "unit-price-app-v5";

/// URL scope the worker controls
pub const SCOPE: &str = "/price-checker/";

/// Document served for navigations while offline
pub const OFFLINE_FALLBACK: &str = "/price-checker/index.html";

/// Assets precached on install
pub const PRECACHE_ASSETS: [&str; 5] = [
    "/price-checker/",
    "/price-checker/index.html",
    "/price-checker/style.css",
    "/price-checker/main.js",
    "/price-checker/manifest.json",
];
