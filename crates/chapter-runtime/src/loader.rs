//! Named-resource loading with last-request-wins semantics.
//!
//! Each `load` call takes a new generation number while holding the state
//! lock and flips the state to `Pending`. When the fetch resolves, its result
//! is committed only if no newer request has started in the meantime, so a
//! slow response for an old resource never replaces a newer one.

use chapter_types::Resource;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::error::LoadError;
use crate::transport::Transport;

/// Tri-state view of a resource load
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum LoadState<T> {
    Pending,
    Ready {
        data: T,
    },
    #[serde(rename = "error")]
    Failed {
        message: String,
    },
}

impl<T> LoadState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadState::Ready { data } => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            LoadState::Ready { data } => Ok(data),
            LoadState::Failed { message } => Err(message),
            LoadState::Pending => Err("still loading".to_string()),
        }
    }
}

impl<T> From<Result<T, LoadError>> for LoadState<T> {
    fn from(result: Result<T, LoadError>) -> Self {
        match result {
            Ok(data) => LoadState::Ready { data },
            Err(err) => LoadState::Failed {
                message: err.to_string(),
            },
        }
    }
}

/// What observers see: the state plus the request it belongs to
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<T> {
    pub generation: u64,
    pub resource: Option<Resource>,
    pub state: LoadState<T>,
}

/// Fetch and decode one resource without any request tracking.
pub async fn fetch_json<T>(transport: &dyn Transport, resource: Resource) -> Result<T, LoadError>
where
    T: DeserializeOwned,
{
    debug!(resource = %resource, source = %transport.describe(), "fetching content");

    let fetched = transport
        .fetch(resource)
        .await
        .map_err(|e| LoadError::Transport {
            resource,
            message: e.to_string(),
        })?;

    if !fetched.is_success() {
        return Err(LoadError::Status {
            resource,
            status: fetched.status,
        });
    }

    serde_json::from_slice(&fetched.body).map_err(|e| LoadError::Parse {
        resource,
        message: e.to_string(),
    })
}

/// Loads a resource of type `T`, publishing state changes to subscribers.
pub struct ContentLoader<T> {
    transport: Arc<dyn Transport>,
    state: watch::Sender<Snapshot<T>>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ContentLoader<T>
where
    T: DeserializeOwned + Clone + Send + Sync,
{
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let (state, _) = watch::channel(Snapshot {
            generation: 0,
            resource: None,
            state: LoadState::Pending,
        });
        Self {
            transport,
            state,
            _marker: PhantomData,
        }
    }

    /// Current committed state
    pub fn snapshot(&self) -> Snapshot<T> {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot<T>> {
        self.state.subscribe()
    }

    /// Request `resource`.
    ///
    /// Returns the committed state, or `None` when a newer request started
    /// before this one resolved and the response was discarded.
    pub async fn load(&self, resource: Resource) -> Option<LoadState<T>> {
        let mut generation = 0;
        self.state.send_modify(|snapshot| {
            snapshot.generation += 1;
            snapshot.resource = Some(resource);
            snapshot.state = LoadState::Pending;
            generation = snapshot.generation;
        });

        let result = fetch_json::<T>(self.transport.as_ref(), resource).await;
        if let Err(err) = &result {
            warn!(resource = %resource, error = %err, "content load failed");
        }
        let state = LoadState::from(result);

        let committed = self.state.send_if_modified(|snapshot| {
            if snapshot.generation != generation {
                return false;
            }
            snapshot.state = state.clone();
            true
        });

        if committed {
            Some(state)
        } else {
            debug!(resource = %resource, generation, "discarding stale response");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{Fetched, TransportError};
    use futures::future::BoxFuture;

    struct Fixed(Result<Fetched, TransportError>);

    impl Transport for Fixed {
        fn fetch(&self, _resource: Resource) -> BoxFuture<'_, Result<Fetched, TransportError>> {
            let answer = self.0.clone();
            Box::pin(async move { answer })
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn loader(answer: Result<Fetched, TransportError>) -> ContentLoader<Vec<u32>> {
        ContentLoader::new(Arc::new(Fixed(answer)))
    }

    #[tokio::test]
    async fn test_ready_state() {
        let loader = loader(Ok(Fetched::ok("[1,2,3]")));
        let state = loader.load(Resource::Events).await.unwrap();
        assert_eq!(state.data(), Some(&vec![1, 2, 3]));
        assert_eq!(loader.snapshot().generation, 1);
        assert_eq!(loader.snapshot().resource, Some(Resource::Events));
    }

    #[tokio::test]
    async fn test_not_found_yields_error_without_data() {
        let loader = loader(Ok(Fetched::status(404)));
        let state = loader.load(Resource::Events).await.unwrap();
        assert!(state.data().is_none());
        assert_eq!(state.error(), Some("Failed to load events (status 404)"));
    }

    #[tokio::test]
    async fn test_parse_error_is_surfaced() {
        let loader = loader(Ok(Fetched::ok("{not json")));
        let state = loader.load(Resource::Faq).await.unwrap();
        assert!(
            state
                .error()
                .is_some_and(|m| m.starts_with("Failed to parse faq"))
        );
    }

    #[tokio::test]
    async fn test_transport_error_is_surfaced() {
        let loader = loader(Err(TransportError("connection refused".to_string())));
        let state = loader.load(Resource::Team).await.unwrap();
        assert_eq!(
            state.error(),
            Some("Failed to load team: connection refused")
        );
    }

    #[test]
    fn test_state_serializes_with_status_tag() {
        let ready: LoadState<Vec<u32>> = LoadState::Ready { data: vec![1] };
        assert_eq!(
            serde_json::to_value(&ready).unwrap(),
            serde_json::json!({"status": "ready", "data": [1]})
        );

        let failed: LoadState<Vec<u32>> = LoadState::Failed {
            message: "boom".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            serde_json::json!({"status": "error", "message": "boom"})
        );

        let pending: LoadState<Vec<u32>> = LoadState::Pending;
        assert_eq!(
            serde_json::to_value(&pending).unwrap(),
            serde_json::json!({"status": "pending"})
        );
    }
}
