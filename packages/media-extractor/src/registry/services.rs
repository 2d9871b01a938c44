//! Service registry: resolves ids, names and URLs to streaming services.

use std::sync::Arc;
use tracing::info;

use crate::error::{ExtractionError, Result};
use crate::traits::service::{LinkType, StreamingService};

/// All services known to the process, in registration order.
///
/// Built once at startup, then shared read-only (e.g. behind an `Arc`).
#[derive(Default)]
pub struct ServiceList {
    services: Vec<Arc<dyn StreamingService>>,
}

impl ServiceList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a service. A duplicate service id is rejected and leaves the list unchanged.
    pub fn register(&mut self, service: Arc<dyn StreamingService>) -> Result<()> {
        let id = service.service_id();
        if self.services.iter().any(|s| s.service_id() == id) {
            return Err(ExtractionError::ServiceAlreadyExists { id });
        }

        info!(service_id = id, name = service.name(), "Registered streaming service");
        self.services.push(service);
        Ok(())
    }

    /// Builder-style [`register`](Self::register).
    pub fn with_service(mut self, service: Arc<dyn StreamingService>) -> Result<Self> {
        self.register(service)?;
        Ok(self)
    }

    pub fn service_by_id(&self, id: u32) -> Result<&Arc<dyn StreamingService>> {
        self.services
            .iter()
            .find(|s| s.service_id() == id)
            .ok_or_else(|| ExtractionError::UnknownService { id: id.to_string() })
    }

    /// Case-insensitive lookup by display name.
    pub fn service_by_name(&self, name: &str) -> Result<&Arc<dyn StreamingService>> {
        self.services
            .iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ExtractionError::UnknownService { id: name.to_string() })
    }

    /// First service whose stream, channel, playlist or kiosk handlers accept `url`.
    pub fn service_by_url(&self, url: &str) -> Result<&Arc<dyn StreamingService>> {
        self.services
            .iter()
            .find(|s| s.link_type(url) != LinkType::None || s.kiosk_list().accepts_url(url))
            .ok_or_else(|| ExtractionError::NoMatchingExtractor {
                url: url.to_string(),
            })
    }

    pub fn services(&self) -> &[Arc<dyn StreamingService>] {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl std::fmt::Debug for ServiceList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.services.iter().map(|s| (s.service_id(), s.name().to_string())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixtureService;

    #[test]
    fn test_lookup_by_id_name_and_url() {
        let services = ServiceList::new()
            .with_service(Arc::new(FixtureService::new(0, "Alpha", "alpha.example.com").unwrap()))
            .unwrap()
            .with_service(Arc::new(FixtureService::new(1, "Beta", "beta.example.com").unwrap()))
            .unwrap();

        assert_eq!(services.service_by_id(1).unwrap().name(), "Beta");
        assert_eq!(services.service_by_name("alpha").unwrap().service_id(), 0);

        let by_url = services
            .service_by_url("https://beta.example.com/watch?v=abc")
            .unwrap();
        assert_eq!(by_url.service_id(), 1);

        let kiosk = services.service_by_url("https://alpha.example.com/feed/trending").unwrap();
        assert_eq!(kiosk.service_id(), 0);
    }

    #[test]
    fn test_unknown_lookups() {
        let services = ServiceList::new()
            .with_service(Arc::new(FixtureService::new(0, "Alpha", "alpha.example.com").unwrap()))
            .unwrap();

        assert!(matches!(
            services.service_by_id(9),
            Err(ExtractionError::UnknownService { .. })
        ));
        assert!(matches!(
            services.service_by_url("https://elsewhere.example.org/watch?v=abc"),
            Err(ExtractionError::NoMatchingExtractor { .. })
        ));
    }

    #[test]
    fn test_duplicate_service_rejected() {
        let mut services = ServiceList::new();
        services
            .register(Arc::new(FixtureService::new(0, "Alpha", "alpha.example.com").unwrap()))
            .unwrap();

        let err = services
            .register(Arc::new(FixtureService::new(0, "Again", "again.example.com").unwrap()))
            .unwrap_err();

        assert!(matches!(err, ExtractionError::ServiceAlreadyExists { id: 0 }));
        assert_eq!(services.len(), 1);
        assert_eq!(services.services()[0].name(), "Alpha");
    }
}
