// src/presentation/http/state.rs
use crate::application::{error::ApplicationError, services::ApplicationServices};
use crate::presentation::http::error::{HttpError, HttpResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
}

impl HttpState {
    /// Repository calls do file I/O under a writer lock, so they run on the
    /// blocking pool instead of an async worker.
    pub async fn blocking<T, F>(&self, f: F) -> HttpResult<T>
    where
        F: FnOnce(&ApplicationServices) -> T + Send + 'static,
        T: Send + 'static,
    {
        on_blocking_pool(&self.services, f).await
    }
}

async fn on_blocking_pool<S, T, F>(shared: &Arc<S>, f: F) -> HttpResult<T>
where
    S: Send + Sync + 'static,
    F: FnOnce(&S) -> T + Send + 'static,
    T: Send + 'static,
{
    let shared = Arc::clone(shared);
    tokio::task::spawn_blocking(move || f(&shared))
        .await
        .map_err(|err| {
            tracing::error!(error = %err, "blocking service call failed");
            HttpError::from_error(ApplicationError::infrastructure(err.to_string()))
        })
}
