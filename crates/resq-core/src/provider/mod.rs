//! Module: provider
//! Responsibility: answer predicate queries against an equality-only backend.
//! Does not own: backend storage or property mapping.
//! Boundary: simplify → request → fetch → union → post-filter.

mod memory;


pub use memory::MemoryBackend;

use crate::{
    config::QueryConfig,
    error::{BackendError, QueryError},
    obs::sink::{self, MetricsEvent},
    predicate::{Predicate, Simplifier, SupportedProperties, eval},
    request::{PropertyRequest, request_maps},
    resource::Resource,
};
use std::collections::HashSet;
use tracing::debug;

///
/// ResourceBackend
///
/// Source of resources that can only filter by property equality.
/// `fetch` must return at least every resource matching all constraints of
/// `request`; returning extra resources is allowed.
///

pub trait ResourceBackend {
    fn fetch(&self, request: &PropertyRequest) -> Result<Vec<Resource>, BackendError>;
}

impl<B: ResourceBackend + ?Sized> ResourceBackend for &B {
    fn fetch(&self, request: &PropertyRequest) -> Result<Vec<Resource>, BackendError> {
        (**self).fetch(request)
    }
}

///
/// ResourceQuery
///
/// Query dispatcher binding a backend to the properties it can filter on.
///

pub struct ResourceQuery<'a, B: ?Sized, S: ?Sized> {
    backend: &'a B,
    supported: &'a S,
    config: QueryConfig,
}

impl<'a, B, S> ResourceQuery<'a, B, S>
where
    B: ResourceBackend + ?Sized,
    S: SupportedProperties + ?Sized,
{
    #[must_use]
    pub fn new(backend: &'a B, supported: &'a S) -> Self {
        Self {
            backend,
            supported,
            config: QueryConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Backend requests that `predicate` resolves to, in issue order.
    #[must_use]
    pub fn plan(&self, predicate: &Predicate) -> Vec<PropertyRequest> {
        let simplified = Simplifier::new(self.supported)
            .with_config(self.config.clone())
            .simplify(predicate);

        request_maps(&simplified)
    }

    /// Run a query.
    ///
    /// `None` fetches everything without filtering. Otherwise one backend
    /// request is issued per planned request, results are unioned, and the
    /// original predicate is re-applied as the exact filter.
    pub fn execute(&self, predicate: Option<&Predicate>) -> Result<Vec<Resource>, QueryError> {
        sink::record(MetricsEvent::QueryStart);

        let Some(predicate) = predicate else {
            return self.fetch(&PropertyRequest::new()).map_err(QueryError::from);
        };

        let requests = self.plan(predicate);
        debug!(predicate = %predicate, requests = requests.len(), "dispatching resource query");

        let mut seen = HashSet::new();
        let mut fetched = Vec::new();
        for request in &requests {
            for resource in self.fetch(request)? {
                if seen.insert(resource.clone()) {
                    fetched.push(resource);
                }
            }
        }

        let fetched_count = fetched.len();
        let kept: Vec<Resource> = fetched
            .into_iter()
            .filter(|resource| eval(resource, predicate))
            .collect();

        sink::record(MetricsEvent::PostFilter {
            fetched: u64::try_from(fetched_count).unwrap_or(u64::MAX),
            kept: u64::try_from(kept.len()).unwrap_or(u64::MAX),
        });
        debug!(fetched = fetched_count, kept = kept.len(), "post-filtered resources");

        Ok(kept)
    }

    fn fetch(&self, request: &PropertyRequest) -> Result<Vec<Resource>, BackendError> {
        let resources = self.backend.fetch(request)?;

        sink::record(MetricsEvent::BackendRequest {
            resources: u64::try_from(resources.len()).unwrap_or(u64::MAX),
        });

        Ok(resources)
    }
}
