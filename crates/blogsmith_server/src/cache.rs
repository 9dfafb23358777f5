//! Process-wide model handle with an explicit lifecycle.

use crate::{LocalModel, ModelSpec};
use blogsmith_error::ModelLoadError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

/// Lazily loaded, shared model handle.
///
/// The first [`ModelCache::get`] loads the artifact and later calls reuse
/// it. A failed load leaves the slot empty, so the next call tries again.
/// With `reload_per_request` set, every call loads afresh and nothing is
/// kept.
#[derive(Debug)]
pub struct ModelCache {
    spec: ModelSpec,
    reload_per_request: bool,
    slot: Mutex<Option<Arc<LocalModel>>>,
}

impl ModelCache {
    /// Cache that loads once and keeps the handle.
    pub fn new(spec: ModelSpec) -> Self {
        Self {
            spec,
            reload_per_request: false,
            slot: Mutex::new(None),
        }
    }

    /// Cache that reloads the artifact on every call.
    pub fn reloading(spec: ModelSpec) -> Self {
        Self {
            reload_per_request: true,
            ..Self::new(spec)
        }
    }

    /// The artifact this cache serves.
    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    /// Whether each call reloads the artifact.
    pub fn reload_per_request(&self) -> bool {
        self.reload_per_request
    }

    /// Return the model handle, loading it if needed.
    #[instrument(skip(self), fields(path = %self.spec.path().display()))]
    pub async fn get(&self) -> Result<Arc<LocalModel>, ModelLoadError> {
        if self.reload_per_request {
            debug!("Reloading model for this request");
            return LocalModel::load(&self.spec).await.map(Arc::new);
        }

        let mut slot = self.slot.lock().await;
        if let Some(model) = slot.as_ref() {
            return Ok(Arc::clone(model));
        }

        let model = Arc::new(LocalModel::load(&self.spec).await?);
        *slot = Some(Arc::clone(&model));
        Ok(model)
    }

    /// Load the model now, at process start.
    pub async fn warm_up(&self) -> Result<(), ModelLoadError> {
        info!("Warming up model cache");
        self.get().await.map(|_| ())
    }

    /// Whether a handle is currently held.
    pub async fn is_loaded(&self) -> bool {
        self.slot.lock().await.is_some()
    }

    /// Drop the cached handle. Returns true if one was held.
    #[instrument(skip(self))]
    pub async fn release(&self) -> bool {
        let released = self.slot.lock().await.take().is_some();
        if released {
            info!("Released model handle");
        }
        released
    }
}
