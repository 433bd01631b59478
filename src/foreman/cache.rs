//! Memoized reference lookups
//!
//! Every `(kind, id)` pair is fetched at most once per run. Failed lookups are
//! remembered as unresolvable so a broken reference shared by many hosts costs
//! a single request.

use log::{debug, warn};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Display;

use crate::foreman::client::ForemanClient;
use crate::foreman::reference::ReferenceKind;

/// Lookup cache keyed by reference kind and identifier
#[derive(Debug, Default)]
pub struct ReferenceCache {
    entries: HashMap<(ReferenceKind, String), Option<Value>>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a reference, fetching it on first use.
    ///
    /// An absent `id` returns `None` without touching the network. Lookups
    /// that fail (not found, API or transport errors) are logged, cached as
    /// unresolvable and also return `None`.
    pub async fn resolve<I: Display>(
        &mut self,
        client: &ForemanClient,
        kind: ReferenceKind,
        id: Option<I>,
    ) -> Option<&Value> {
        let key = (kind, id?.to_string());

        if self.entries.contains_key(&key) {
            debug!("Cache hit for {} '{}'", kind, key.1);
        } else {
            let resolved = match client.show(kind, &key.1).await {
                Ok(Some(record)) => Some(record),
                Ok(None) => {
                    warn!("{} '{}' not found", kind, key.1);
                    None
                }
                Err(e) => {
                    warn!("Could not resolve {} '{}': {}", kind, key.1, e);
                    None
                }
            };
            self.entries.insert(key.clone(), resolved);
        }

        self.entries.get(&key).and_then(Option::as_ref)
    }

    /// Resolve a reference and extract its human-readable label
    pub async fn label<I: Display>(
        &mut self,
        client: &ForemanClient,
        kind: ReferenceKind,
        id: Option<I>,
    ) -> Option<String> {
        self.resolve(client, kind, id)
            .await
            .and_then(|record| kind.label_of(record))
    }

    /// Whether `(kind, id)` has been looked up, successfully or not
    pub fn contains(&self, kind: ReferenceKind, id: &str) -> bool {
        self.entries.contains_key(&(kind, id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_absent_id_makes_no_request() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = ForemanClient::test_client(&mock_server.uri());
        let mut cache = ReferenceCache::new();

        let result = cache
            .resolve(&client, ReferenceKind::Domain, None::<u64>)
            .await;
        assert!(result.is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_each_reference_fetched_once() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/hostgroups/1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "hostgroup": {"id": 1, "name": "web", "label": "web"}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ForemanClient::test_client(&mock_server.uri());
        let mut cache = ReferenceCache::new();

        for _ in 0..5 {
            let label = cache
                .label(&client, ReferenceKind::Hostgroup, Some(1u64))
                .await;
            assert_eq!(label.as_deref(), Some("web"));
        }
        assert_eq!(cache.len(), 1);
        assert!(cache.contains(ReferenceKind::Hostgroup, "1"));
    }

    #[tokio::test]
    async fn test_same_id_different_kinds_are_distinct() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/domains/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "example.com"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/subnets/1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "lan"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ForemanClient::test_client(&mock_server.uri());
        let mut cache = ReferenceCache::new();

        let domain = cache.label(&client, ReferenceKind::Domain, Some(1u64)).await;
        let subnet = cache.label(&client, ReferenceKind::Subnet, Some(1u64)).await;

        assert_eq!(domain.as_deref(), Some("example.com"));
        assert_eq!(subnet.as_deref(), Some("lan"));
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_unresolvable_reference_cached_as_none() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/models/9"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ForemanClient::test_client(&mock_server.uri());
        let mut cache = ReferenceCache::new();

        assert!(cache
            .resolve(&client, ReferenceKind::Model, Some(9u64))
            .await
            .is_none());
        assert!(cache
            .resolve(&client, ReferenceKind::Model, Some(9u64))
            .await
            .is_none());
        assert!(cache.contains(ReferenceKind::Model, "9"));
    }

    #[tokio::test]
    async fn test_not_found_reference_is_none() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/architectures/3"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = ForemanClient::test_client(&mock_server.uri());
        let mut cache = ReferenceCache::new();

        let label = cache
            .label(&client, ReferenceKind::Architecture, Some(3u64))
            .await;
        assert!(label.is_none());
    }
}
