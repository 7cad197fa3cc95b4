//! Cache-first asset worker
//!
//! Lifecycle mirrors a browser service worker: `install` precaches the
//! versioned asset list, `activate` drops every cache with another name, and
//! `fetch` answers from the cache before going to the network.

use tracing::{debug, info, warn};

use super::network::{FetchError, Network, Request, Response};
use super::storage::CacheStorage;
use crate::config::CacheConfig;
use crate::error::{Result, UnitPriceError};

/// Where the worker is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerState {
    /// Created, nothing cached yet
    Parsed,
    /// Precache complete
    Installed,
    /// Old caches removed, serving requests
    Activated,
    /// Install failed; requests go straight to the network, bypassing storage
    NetworkOnly,
}

/// Offline asset cache for the comparator page
#[derive(Debug, Clone)]
pub struct AssetWorker {
    config: CacheConfig,
    storage: CacheStorage,
    state: WorkerState,
}

impl AssetWorker {
    /// Creates a worker over empty storage
    #[must_use]
    pub fn new(config: CacheConfig) -> Self {
        Self::with_storage(config, CacheStorage::new())
    }

    /// Creates a worker over existing storage (e.g. caches left by an older version)
    #[must_use]
    pub fn with_storage(config: CacheConfig, storage: CacheStorage) -> Self {
        Self {
            config,
            storage,
            state: WorkerState::Parsed,
        }
    }

    /// Installs and activates a worker, degrading to network-only on failure
    ///
    /// Failures are logged, never returned.
    pub fn register<N: Network + ?Sized>(
        config: CacheConfig,
        storage: CacheStorage,
        network: &N,
    ) -> Self {
        let mut worker = Self::with_storage(config, storage);
        match worker.install(network) {
            Ok(count) => {
                worker.activate();
                info!(
                    scope = %worker.config.scope,
                    cached = count,
                    "asset worker registration successful"
                );
            }
            Err(e) => warn!(error = %e, "asset worker registration failed"),
        }
        worker
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> WorkerState {
        self.state
    }

    /// Cache configuration in use
    #[must_use]
    pub fn config(&self) -> &CacheConfig {
        &self.config
    }

    /// Underlying cache storage
    #[must_use]
    pub fn storage(&self) -> &CacheStorage {
        &self.storage
    }

    /// Precaches every configured asset into the current cache
    ///
    /// All-or-nothing: if any asset fails, nothing is stored and the worker
    /// switches to network-only.
    pub fn install<N: Network + ?Sized>(&mut self, network: &N) -> Result<usize> {
        let cache = self.storage.open(&self.config.name);
        match cache.add_all(network, &self.config.assets) {
            Ok(count) => {
                self.state = WorkerState::Installed;
                info!(cache = %self.config.name, count, "precached assets");
                Ok(count)
            }
            Err((url, source)) => {
                self.state = WorkerState::NetworkOnly;
                warn!(cache = %self.config.name, %url, error = %source, "precache failed");
                Err(UnitPriceError::CacheInstall { url, source })
            }
        }
    }

    /// Deletes every cache except the current one, returning the deleted names
    pub fn activate(&mut self) -> Vec<String> {
        let stale: Vec<String> = self
            .storage
            .keys()
            .into_iter()
            .filter(|name| *name != self.config.name)
            .collect();
        for name in &stale {
            self.storage.delete(name);
            info!(cache = %name, "deleted stale cache");
        }
        if self.state != WorkerState::NetworkOnly {
            self.state = WorkerState::Activated;
        }
        stale
    }

    /// Answers a request: cache first, then network, then the offline
    /// fallback document for failed navigations
    ///
    /// A network-only worker never reads storage, so caches left by an
    /// older version are not served.
    pub fn fetch<N: Network + ?Sized>(
        &self,
        request: &Request,
        network: &N,
    ) -> std::result::Result<Response, FetchError> {
        if self.state == WorkerState::NetworkOnly {
            return network.fetch(request);
        }
        if let Some(hit) = self.storage.match_url(&request.url) {
            debug!(url = %request.url, "cache hit");
            return Ok(hit.clone());
        }
        match network.fetch(request) {
            Ok(response) => Ok(response),
            Err(e) if request.is_navigation() && e.is_transport() => {
                match self.storage.match_url(&self.config.fallback) {
                    Some(fallback) => {
                        debug!(url = %request.url, "serving offline fallback");
                        Ok(fallback.clone())
                    }
                    None => Err(e),
                }
            }
            Err(e) => Err(e),
        }
    }
}
