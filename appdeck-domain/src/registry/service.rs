//! Application registry service.
//!
//! Holds the set of registered applications and serves the ordered listing
//! that the interaction layer renders as cards.

use crate::registry::errors::RegistryError;
use crate::registry::types::Application;
use appdeck_core::config::RegistryConfig;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One page of the application listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ApplicationPage {
    /// Applications on this page, in listing order.
    pub applications: Vec<Application>,
    /// Zero-based page index.
    pub index: usize,
    /// Total number of pages (at least 1, even when empty).
    pub total_pages: usize,
    /// Total number of registered applications.
    pub total_applications: usize,
}

/// Interface for the application registry.
#[async_trait]
pub trait ApplicationRegistry: Send + Sync {
    /// Registers an application.
    async fn register(&self, application: Application) -> Result<Application, RegistryError>;

    /// Gets an application by id.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] when no such application exists.
    async fn get(&self, id: Uuid) -> Result<Application, RegistryError>;

    /// Lists all applications ordered by protocol, host, and port.
    async fn list(&self) -> Vec<Application>;

    /// Returns the total number of registered applications.
    async fn count(&self) -> usize;

    /// Returns one page of the ordered listing.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::PageOutOfRange`] when `index` is past the
    /// last page.
    async fn page(&self, index: usize) -> Result<ApplicationPage, RegistryError>;
}

/// In-memory implementation of [`ApplicationRegistry`].
///
/// State lives for the lifetime of the process; nothing is persisted. The
/// registry is rebuilt from configuration at startup, mirroring how the
/// rendered page is rebuilt from scratch on every load.
pub struct InMemoryApplicationRegistry {
    applications: Arc<RwLock<Vec<Application>>>,
    page_size: usize,
}

impl InMemoryApplicationRegistry {
    /// Creates an empty registry with the given page size.
    ///
    /// A zero `page_size` is coerced to 1; the configuration layer already
    /// rejects it, so this is a belt for direct constructor calls.
    pub fn new(page_size: usize) -> Self {
        Self {
            applications: Arc::new(RwLock::new(Vec::new())),
            page_size: page_size.max(1),
        }
    }

    /// Creates a registry seeded from configuration.
    ///
    /// Invalid seed entries are skipped with a warning rather than aborting
    /// startup; the registry serves whatever validated cleanly.
    pub async fn from_config(config: &RegistryConfig) -> Self {
        let registry = Self::new(config.page_size);
        for seed in &config.applications {
            match Application::from_seed(seed) {
                Ok(application) => {
                    // Seeding cannot fail beyond validation.
                    let _ = registry.register(application).await;
                }
                Err(e) => {
                    warn!(label = %seed.label, error = %e, "Skipping invalid application seed");
                }
            }
        }
        registry
    }
}

#[async_trait]
impl ApplicationRegistry for InMemoryApplicationRegistry {
    async fn register(&self, application: Application) -> Result<Application, RegistryError> {
        let mut applications = self.applications.write().await;
        applications.push(application.clone());
        applications.sort_by_key(|a| a.sort_key());
        info!(
            id = %application.id,
            address = %application.full_address(),
            "Registered application"
        );
        Ok(application)
    }

    async fn get(&self, id: Uuid) -> Result<Application, RegistryError> {
        let applications = self.applications.read().await;
        applications
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or(RegistryError::NotFound { id })
    }

    async fn list(&self) -> Vec<Application> {
        self.applications.read().await.clone()
    }

    async fn count(&self) -> usize {
        self.applications.read().await.len()
    }

    async fn page(&self, index: usize) -> Result<ApplicationPage, RegistryError> {
        let applications = self.applications.read().await;
        let total_applications = applications.len();
        let total_pages = total_applications.div_ceil(self.page_size).max(1);
        if index >= total_pages {
            return Err(RegistryError::PageOutOfRange { index, total_pages });
        }
        let start = index * self.page_size;
        let end = (start + self.page_size).min(total_applications);
        debug!(index, total_pages, "Serving application page");
        Ok(ApplicationPage {
            applications: applications[start..end].to_vec(),
            index,
            total_pages,
            total_applications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::types::{Port, Protocol};
    use appdeck_core::config::ApplicationSeed;
    use appdeck_core::types::AppLabel;
    use pretty_assertions::assert_eq;

    fn app(label: &str, protocol: Protocol, host: &str, port: u32) -> Application {
        Application::new(
            AppLabel::new(label).unwrap(),
            protocol,
            host,
            Port::new(port).unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn register_and_get_round_trip() {
        let registry = InMemoryApplicationRegistry::new(20);
        let application = app("Wiki", Protocol::Http, "wiki.corp", 8080);
        let id = application.id;

        registry.register(application.clone()).await.unwrap();
        let fetched = registry.get(id).await.unwrap();
        assert_eq!(fetched, application);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let registry = InMemoryApplicationRegistry::new(20);
        let id = Uuid::new_v4();
        assert!(matches!(
            registry.get(id).await,
            Err(RegistryError::NotFound { id: missing }) if missing == id
        ));
    }

    #[tokio::test]
    async fn list_orders_by_protocol_host_port() {
        let registry = InMemoryApplicationRegistry::new(20);
        registry
            .register(app("B", Protocol::Udp, "stream.corp", 9090))
            .await
            .unwrap();
        registry
            .register(app("C", Protocol::Http, "zz.corp", 80))
            .await
            .unwrap();
        registry
            .register(app("D", Protocol::Http, "aa.corp", 443))
            .await
            .unwrap();
        registry
            .register(app("E", Protocol::Http, "aa.corp", 80))
            .await
            .unwrap();
        registry
            .register(app("F", Protocol::Ftp, "files.corp", 21))
            .await
            .unwrap();

        let listed = registry.list().await;
        let addresses: Vec<String> = listed.iter().map(Application::full_address).collect();
        assert_eq!(
            addresses,
            vec![
                "ftp://files.corp:21",
                "http://aa.corp:80",
                "http://aa.corp:443",
                "http://zz.corp:80",
                "udp://stream.corp:9090",
            ]
        );
    }

    #[tokio::test]
    async fn count_tracks_registrations() {
        let registry = InMemoryApplicationRegistry::new(20);
        assert_eq!(registry.count().await, 0);
        registry
            .register(app("A", Protocol::Http, "a.corp", 80))
            .await
            .unwrap();
        registry
            .register(app("B", Protocol::Http, "b.corp", 80))
            .await
            .unwrap();
        assert_eq!(registry.count().await, 2);
    }

    #[tokio::test]
    async fn page_splits_listing_by_page_size() {
        let registry = InMemoryApplicationRegistry::new(2);
        for (host, port) in [("a.corp", 80), ("b.corp", 80), ("c.corp", 80)] {
            registry
                .register(app("App", Protocol::Http, host, port))
                .await
                .unwrap();
        }

        let first = registry.page(0).await.unwrap();
        assert_eq!(first.applications.len(), 2);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.total_applications, 3);

        let second = registry.page(1).await.unwrap();
        assert_eq!(second.applications.len(), 1);
        assert_eq!(second.applications[0].host, "c.corp");
    }

    #[tokio::test]
    async fn page_out_of_range_is_an_error() {
        let registry = InMemoryApplicationRegistry::new(2);
        assert!(matches!(
            registry.page(1).await,
            Err(RegistryError::PageOutOfRange { index: 1, total_pages: 1 })
        ));
    }

    #[tokio::test]
    async fn empty_registry_has_one_empty_page() {
        let registry = InMemoryApplicationRegistry::new(20);
        let page = registry.page(0).await.unwrap();
        assert!(page.applications.is_empty());
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_applications, 0);
    }

    #[tokio::test]
    async fn from_config_seeds_valid_entries_and_skips_invalid() {
        let config = RegistryConfig {
            page_size: 20,
            applications: vec![
                ApplicationSeed {
                    label: "Metrics".to_string(),
                    protocol: "https".to_string(),
                    host: "metrics.corp".to_string(),
                    port: 443,
                },
                ApplicationSeed {
                    label: "Broken".to_string(),
                    protocol: "gopher".to_string(),
                    host: "old.corp".to_string(),
                    port: 70,
                },
                ApplicationSeed {
                    label: "Also Broken".to_string(),
                    protocol: "http".to_string(),
                    host: "x.corp".to_string(),
                    port: 0,
                },
            ],
        };

        let registry = InMemoryApplicationRegistry::from_config(&config).await;
        assert_eq!(registry.count().await, 1);
        assert_eq!(
            registry.list().await[0].full_address(),
            "https://metrics.corp:443"
        );
    }
}
