// web_app/service.rs - Addiction data service
//
// Three read operations over an abstract backend. Input is validated before
// anything is sent, every failure is logged, and failures that pass the
// notification policy are handed to the injected Notifier.

use crate::web_app::error::ApiError;
use crate::web_app::model::{Addiction, AddictionSummary, AddictionTypes};
use crate::web_app::notify::{Notice, NotificationPolicy, Notifier};

/// Transport used by the service
///
/// In the app this is the set of server functions; tests plug in fakes.
#[allow(async_fn_in_trait)]
pub trait AddictionBackend {
    async fn fetch_types(&self) -> Result<AddictionTypes, ApiError>;
    async fn fetch_addiction(&self, id: &str) -> Result<Addiction, ApiError>;
    async fn fetch_search(&self, query: &str) -> Result<Vec<AddictionSummary>, ApiError>;
}

/// `.` and `..` are normalised away by URL parsers, encoded or not, so
/// they can never travel as a single path segment.
pub fn is_dot_segment(segment: &str) -> bool {
    segment == "." || segment == ".."
}

/// Reject blank identifiers
pub fn validate_id(id: &str) -> Result<&str, ApiError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(ApiError::Validation("Addiction ID is required".to_string()));
    }
    if is_dot_segment(id) {
        return Err(ApiError::Validation("Invalid addiction ID".to_string()));
    }
    Ok(id)
}

/// Reject blank queries; returns the trimmed query
pub fn validate_query(query: &str) -> Result<&str, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::Validation("Search query is required".to_string()));
    }
    if is_dot_segment(query) {
        return Err(ApiError::Validation("Invalid search query".to_string()));
    }
    Ok(query)
}

#[derive(Clone)]
pub struct AddictionService<B, N> {
    backend: B,
    notifier: N,
    policy: NotificationPolicy,
}

impl<B: AddictionBackend, N: Notifier> AddictionService<B, N> {
    pub fn new(backend: B, notifier: N) -> Self {
        Self::with_policy(backend, notifier, NotificationPolicy::default())
    }

    pub fn with_policy(backend: B, notifier: N, policy: NotificationPolicy) -> Self {
        Self {
            backend,
            notifier,
            policy,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn policy(&self) -> &NotificationPolicy {
        &self.policy
    }

    /// List every addiction grouped by category
    pub async fn list_types(&self) -> Result<AddictionTypes, ApiError> {
        let result = self.backend.fetch_types().await;
        if let Err(e) = &result {
            tracing::error!("Error fetching addiction types: {}", e);
        }
        self.report(result)
    }

    /// Fetch one addiction with its tab content
    pub async fn get_addiction(&self, id: &str) -> Result<Addiction, ApiError> {
        let id = match validate_id(id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("Rejected addiction lookup: {}", e);
                return self.report(Err(e));
            }
        };

        let result = self.backend.fetch_addiction(id).await;
        if let Err(e) = &result {
            tracing::error!("Error fetching addiction {}: {}", id, e);
        }
        self.report(result)
    }

    /// Search addictions by name
    pub async fn search(&self, query: &str) -> Result<Vec<AddictionSummary>, ApiError> {
        let query = match validate_query(query) {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!("Rejected search: {}", e);
                return self.report(Err(e));
            }
        };

        let result = self.backend.fetch_search(query).await;
        match &result {
            Ok(found) => tracing::debug!("Search '{}' returned {} results", query, found.len()),
            Err(e) => tracing::error!("Error searching for \"{}\": {}", query, e),
        }
        self.report(result)
    }

    fn report<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(e) = &result {
            if self.policy.should_notify(e) {
                self.notifier.notify(Notice::error(e.user_message()));
            } else {
                tracing::debug!("Notification suppressed for status {:?}", e.status());
            }
        }
        result
    }
}

/// Backend that calls this site's server functions
#[cfg(any(feature = "ssr", feature = "hydrate"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerFnBackend;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
impl AddictionBackend for ServerFnBackend {
    async fn fetch_types(&self) -> Result<AddictionTypes, ApiError> {
        crate::web_app::server_fns::list_addiction_types().await
    }

    async fn fetch_addiction(&self, id: &str) -> Result<Addiction, ApiError> {
        crate::web_app::server_fns::get_addiction(id.to_string()).await
    }

    async fn fetch_search(&self, query: &str) -> Result<Vec<AddictionSummary>, ApiError> {
        crate::web_app::server_fns::search_addictions(query.to_string()).await
    }
}
