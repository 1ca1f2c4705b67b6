//! Active-language tracking for the client.
//!
//! The resolver keeps the displayed language in step with the route's
//! language segment. A mismatch starts an asynchronous bundle fetch; callers
//! render `LoadState::Loading` until it resolves. Each change bumps a
//! generation counter and aborts the previous fetch, so only the most recent
//! navigation can publish a result.

use crate::error::FetchError;
use crate::i18n::TranslationBundle;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Where bundles come from.
#[async_trait]
pub trait TranslationSource: Send + Sync + 'static {
    async fn fetch(&self, lang: &str) -> Result<TranslationBundle, FetchError>;
}

/// What the UI should render for the requested language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    /// No language requested yet
    Idle,
    /// Bundle fetch in flight; render the loading fallback
    Loading { lang: String },
    Ready {
        lang: String,
        bundle: Arc<TranslationBundle>,
    },
    Failed { lang: String, error: String },
}

impl LoadState {
    pub fn language(&self) -> Option<&str> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading { lang }
            | LoadState::Ready { lang, .. }
            | LoadState::Failed { lang, .. } => Some(lang),
        }
    }

    pub fn bundle(&self) -> Option<&Arc<TranslationBundle>> {
        match self {
            LoadState::Ready { bundle, .. } => Some(bundle),
            _ => None,
        }
    }
}

#[derive(Debug)]
struct Inner {
    requested: Option<String>,
    generation: u64,
    state: LoadState,
    cache: HashMap<String, Arc<TranslationBundle>>,
    in_flight: Option<JoinHandle<()>>,
}

fn lock(inner: &Mutex<Inner>) -> MutexGuard<'_, Inner> {
    inner.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Record a finished fetch, unless a newer language change superseded it.
fn publish(
    inner: &Mutex<Inner>,
    generation: u64,
    lang: String,
    result: Result<TranslationBundle, FetchError>,
) {
    let mut inner = lock(inner);
    if inner.generation != generation {
        debug!("Discarding superseded translations for '{}'", lang);
        return;
    }

    inner.state = match result {
        Ok(bundle) => {
            let bundle = Arc::new(bundle);
            inner.cache.insert(lang.clone(), Arc::clone(&bundle));
            info!("Language changed to '{}' ({} keys)", lang, bundle.len());
            LoadState::Ready { lang, bundle }
        }
        Err(e) => {
            warn!("Failed to load translations for '{}': {}", lang, e);
            LoadState::Failed {
                lang,
                error: e.to_string(),
            }
        }
    };
    inner.in_flight = None;
}

/// Keeps the active language synchronized with the route segment.
pub struct LanguageResolver<S> {
    source: Arc<S>,
    inner: Arc<Mutex<Inner>>,
}

impl<S: TranslationSource> LanguageResolver<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            inner: Arc::new(Mutex::new(Inner {
                requested: None,
                generation: 0,
                state: LoadState::Idle,
                cache: HashMap::new(),
                in_flight: None,
            })),
        }
    }

    /// The most recently requested language.
    pub fn active_language(&self) -> Option<String> {
        lock(&self.inner).requested.clone()
    }

    /// Snapshot of the current load state.
    pub fn state(&self) -> LoadState {
        lock(&self.inner).state.clone()
    }

    /// React to the route's language segment.
    ///
    /// Does nothing when `route_param` is empty or already requested.
    /// Otherwise switches immediately to a cached bundle, or spawns a fetch
    /// and moves to `Loading`. Must be called within a tokio runtime.
    pub fn resolve_active_language(&self, route_param: &str) {
        if route_param.is_empty() {
            return;
        }

        let mut inner = lock(&self.inner);
        if inner.requested.as_deref() == Some(route_param) {
            return;
        }

        inner.generation += 1;
        let generation = inner.generation;
        inner.requested = Some(route_param.to_string());

        if let Some(previous) = inner.in_flight.take() {
            debug!("Cancelling superseded translation fetch");
            previous.abort();
        }

        let lang = route_param.to_string();
        if let Some(bundle) = inner.cache.get(&lang).cloned() {
            debug!("Using cached translations for '{}'", lang);
            inner.state = LoadState::Ready { lang, bundle };
            return;
        }

        debug!("Language mismatch, loading translations for '{}'", lang);
        inner.state = LoadState::Loading { lang: lang.clone() };

        let source = Arc::clone(&self.source);
        let shared = Arc::clone(&self.inner);
        inner.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch(&lang).await;
            publish(&shared, generation, lang, result);
        }));
    }

    /// Wait for the in-flight fetch, if any, and return the resulting state.
    pub async fn settled(&self) -> LoadState {
        loop {
            let handle = lock(&self.inner).in_flight.take();
            match handle {
                Some(handle) => {
                    // Aborted tasks resolve to a cancellation error; the newer one is picked up next loop
                    let _ = handle.await;
                }
                None => return self.state(),
            }
        }
    }
}

impl<S> Drop for LanguageResolver<S> {
    fn drop(&mut self) {
        if let Some(handle) = lock(&self.inner).in_flight.take() {
            handle.abort();
        }
    }
}
