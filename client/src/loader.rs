//! Async page loader with a per-page module cache.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lazy routes ask the loader for their page module. The first visit misses
//! the cache, so the caller shows the loading fallback and awaits
//! [`PageLoader::load`]; later visits hit the cache and render synchronously.
//!
//! ERROR HANDLING
//! ==============
//! Each fetch attempt races a timeout. A failed attempt is retried up to
//! `retries` times; the last error is returned and nothing is cached, so a
//! later visit starts over.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::future::{Either, select};

use crate::config::ClientConfig;
use crate::routes::PageId;

/// Why a page module could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("loading {page:?} timed out after {after:?}")]
    TimedOut { page: PageId, after: Duration },
    #[error("loading {page:?} failed: {reason}")]
    Failed { page: PageId, reason: String },
}

/// Timeout and retry settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadPolicy {
    pub timeout: Duration,
    pub retries: u32,
}

impl From<&ClientConfig> for LoadPolicy {
    fn from(config: &ClientConfig) -> Self {
        Self { timeout: config.page_load_timeout, retries: config.page_load_retries }
    }
}

/// Where page modules come from.
pub trait PageSource {
    type Module: Clone;

    fn fetch(&self, page: PageId) -> impl Future<Output = Result<Self::Module, LoadError>>;
}

/// Produces the timeout future for one attempt.
pub type Timer = fn(Duration) -> Pin<Box<dyn Future<Output = ()>>>;

/// Result of asking for a page without awaiting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Visit<M> {
    /// Cached; render now.
    Ready(M),
    /// Not loaded yet; show the fallback and call [`PageLoader::load`].
    Pending,
}

/// Caching loader over a [`PageSource`].
pub struct PageLoader<S: PageSource> {
    source: S,
    policy: LoadPolicy,
    timer: Timer,
    cache: Arc<Mutex<HashMap<PageId, S::Module>>>,
}

impl<S: PageSource + Clone> Clone for PageLoader<S> {
    fn clone(&self) -> Self {
        Self { source: self.source.clone(), policy: self.policy, timer: self.timer, cache: Arc::clone(&self.cache) }
    }
}

impl<S: PageSource> PageLoader<S> {
    pub fn new(source: S, policy: LoadPolicy, timer: Timer) -> Self {
        Self { source, policy, timer, cache: Arc::new(Mutex::new(HashMap::new())) }
    }

    /// Cached module for `page`, without loading.
    pub fn visit(&self, page: PageId) -> Visit<S::Module> {
        match self.cached(page) {
            Some(module) => Visit::Ready(module),
            None => Visit::Pending,
        }
    }

    pub fn is_cached(&self, page: PageId) -> bool {
        self.cache.lock().map_or(false, |c| c.contains_key(&page))
    }

    /// Return the module for `page`, fetching it on a cache miss.
    ///
    /// # Errors
    ///
    /// The last [`LoadError`] once every attempt has failed or timed out.
    pub async fn load(&self, page: PageId) -> Result<S::Module, LoadError> {
        if let Some(module) = self.cached(page) {
            return Ok(module);
        }
        let mut attempt = 0;
        loop {
            match self.attempt(page).await {
                Ok(module) => {
                    if let Ok(mut cache) = self.cache.lock() {
                        cache.insert(page, module.clone());
                    }
                    log::debug!("loaded page {page:?}");
                    return Ok(module);
                }
                Err(e) if attempt < self.policy.retries => {
                    attempt += 1;
                    log::warn!("{e}; retry {attempt}/{}", self.policy.retries);
                }
                Err(e) => {
                    log::error!("{e}");
                    return Err(e);
                }
            }
        }
    }

    fn cached(&self, page: PageId) -> Option<S::Module> {
        self.cache.lock().ok().and_then(|c| c.get(&page).cloned())
    }

    async fn attempt(&self, page: PageId) -> Result<S::Module, LoadError> {
        let fetch = self.source.fetch(page);
        let timeout = (self.timer)(self.policy.timeout);
        futures::pin_mut!(fetch);
        match select(fetch, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(LoadError::TimedOut { page, after: self.policy.timeout }),
        }
    }
}

/// Timer backed by the browser event loop; never fires off-browser.
pub fn browser_timer(after: Duration) -> Pin<Box<dyn Future<Output = ()>>> {
    #[cfg(feature = "hydrate")]
    {
        Box::pin(gloo_timers::future::sleep(after))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = after;
        Box::pin(futures::future::pending())
    }
}
