//! Named response caches

use std::collections::BTreeMap;

use super::network::{FetchError, Network, Request, Response};

/// One named cache: url -> stored response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cache {
    entries: BTreeMap<String, Response>,
}

impl Cache {
    /// Stored response for `url`
    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Response> {
        self.entries.get(url)
    }

    /// Stores a response
    pub fn put(&mut self, url: impl Into<String>, response: Response) {
        self.entries.insert(url.into(), response);
    }

    /// Fetches every url and stores them only if all succeed
    ///
    /// On failure the cache is left exactly as it was and the failing url is
    /// returned with its error.
    pub fn add_all<N: Network + ?Sized>(
        &mut self,
        network: &N,
        urls: &[String],
    ) -> Result<usize, (String, FetchError)> {
        let mut fetched = Vec::with_capacity(urls.len());
        for url in urls {
            let response = network
                .fetch(&Request::get(url.clone()))
                .map_err(|e| (url.clone(), e))?;
            if !response.is_ok() {
                return Err((
                    url.clone(),
                    FetchError::Status {
                        url: url.clone(),
                        status: response.status,
                    },
                ));
            }
            fetched.push((url.clone(), response));
        }
        let count = fetched.len();
        self.entries.extend(fetched);
        Ok(count)
    }

    /// Cached urls
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// All caches known to the worker, keyed by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStorage {
    caches: BTreeMap<String, Cache>,
}

impl CacheStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens (creating if needed) the cache called `name`
    pub fn open(&mut self, name: &str) -> &mut Cache {
        self.caches.entry(name.to_string()).or_default()
    }

    /// The cache called `name`, if it exists
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Cache> {
        self.caches.get(name)
    }

    /// Deletes a cache, returning true if it existed
    pub fn delete(&mut self, name: &str) -> bool {
        self.caches.remove(name).is_some()
    }

    /// Names of all caches
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.caches.keys().cloned().collect()
    }

    /// First stored response for `url` across every cache
    #[must_use]
    pub fn match_url(&self, url: &str) -> Option<&Response> {
        self.caches.values().find_map(|cache| cache.get(url))
    }
}
