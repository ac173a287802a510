// lib/src/loader/reference_loader.rs

use std::sync::Arc;

use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use intake_models::{
    City, Doctor, IntakeResult, ReferenceCollection, ReferenceData, Speciality,
};

use crate::caching::{open_cache, ReferenceCache};
use crate::config::IntakeConfig;
use crate::loader::fetcher::{HttpFetcher, ReferenceFetcher};

/// Loads the three reference collections, cache first.
///
/// A loader is one session: the first [`ReferenceLoader::load`] resolves all
/// three collections concurrently and every later call returns the same data
/// without touching the cache or the network. A failed fetch is logged and
/// leaves that collection empty; it is not retried within the session.
pub struct ReferenceLoader {
    fetcher: Arc<dyn ReferenceFetcher>,
    cache: Arc<dyn ReferenceCache>,
    session: OnceCell<Arc<ReferenceData>>,
}

impl ReferenceLoader {
    pub fn new(fetcher: Arc<dyn ReferenceFetcher>, cache: Arc<dyn ReferenceCache>) -> Self {
        ReferenceLoader {
            fetcher,
            cache,
            session: OnceCell::new(),
        }
    }

    pub fn from_config(config: &IntakeConfig) -> IntakeResult<Self> {
        let fetcher = HttpFetcher::new(config.endpoints.clone(), &config.http)?;
        let cache = open_cache(&config.cache);
        Ok(Self::new(Arc::new(fetcher), cache))
    }

    pub async fn load(&self) -> Arc<ReferenceData> {
        self.session
            .get_or_init(|| async {
                let (cities, specialities, doctors) = tokio::join!(
                    self.load_collection::<City>(ReferenceCollection::Cities),
                    self.load_collection::<Speciality>(ReferenceCollection::Specialities),
                    self.load_collection::<Doctor>(ReferenceCollection::Doctors),
                );
                Arc::new(ReferenceData {
                    cities,
                    specialities,
                    doctors,
                })
            })
            .await
            .clone()
    }

    /// Drops every cached collection so the next session fetches afresh.
    /// The current session keeps the data it already loaded.
    pub fn invalidate(&self) -> IntakeResult<()> {
        for collection in ReferenceCollection::ALL {
            self.cache.remove(collection.key())?;
        }
        info!("Reference cache invalidated");
        Ok(())
    }

    async fn load_collection<T: DeserializeOwned>(&self, collection: ReferenceCollection) -> Vec<T> {
        if let Some(items) = self.from_cache::<T>(collection) {
            return items;
        }

        match self.fetch_and_store::<T>(collection).await {
            Ok(items) => items,
            Err(e) => {
                error!("Error fetching {}: {}", collection, e);
                Vec::new()
            }
        }
    }

    fn from_cache<T: DeserializeOwned>(&self, collection: ReferenceCollection) -> Option<Vec<T>> {
        let key = collection.key();
        let raw = match self.cache.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("Cache miss for {}", key);
                return None;
            }
            Err(e) => {
                warn!("Could not read cached {}: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => {
                debug!("Cache hit for {} ({} entries)", key, items.len());
                Some(items)
            }
            Err(e) => {
                // A corrupt entry would otherwise shadow the endpoint forever.
                warn!("Discarding malformed cached {}: {}", key, e);
                if let Err(e) = self.cache.remove(key) {
                    warn!("Could not evict cached {}: {}", key, e);
                }
                None
            }
        }
    }

    async fn fetch_and_store<T: DeserializeOwned>(
        &self,
        collection: ReferenceCollection,
    ) -> IntakeResult<Vec<T>> {
        let raw = self.fetcher.fetch(collection).await?;
        let items: Vec<T> = serde_json::from_str(&raw)?;

        if let Err(e) = self.cache.set(collection.key(), &raw) {
            warn!("Could not cache {}: {}", collection, e);
        }
        info!("Loaded {} {} from endpoint", items.len(), collection);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::caching::MemoryCache;
    use crate::loader::MockReferenceFetcher;
    use intake_models::{IntakeError, ReferenceId, Sex};

    const CITIES: &str = r#"[{"id":1,"name":"Warsaw"},{"id":2,"name":"Krakow"}]"#;
    const SPECIALITIES: &str = r#"[
        {"id":1,"name":"Gynecologist","params":{"gender":"Female"}},
        {"id":2,"name":"Cardiologist"}
    ]"#;
    const DOCTORS: &str = r#"[
        {"id":1,"name":"Anna","surname":"Nowak","cityId":1,"specialityId":1,"isPediatrician":false},
        {"id":2,"name":"Piotr","surname":"Zielinski","cityId":"2","specialityId":"2","isPediatrician":true}
    ]"#;

    fn payload(collection: ReferenceCollection) -> IntakeResult<String> {
        Ok(match collection {
            ReferenceCollection::Cities => CITIES,
            ReferenceCollection::Specialities => SPECIALITIES,
            ReferenceCollection::Doctors => DOCTORS,
        }
        .to_string())
    }

    #[tokio::test]
    async fn should_fetch_and_cache_on_cold_start() {
        let mut fetcher = MockReferenceFetcher::new();
        fetcher.expect_fetch().times(3).returning(payload);
        let cache = Arc::new(MemoryCache::new());

        let loader = ReferenceLoader::new(Arc::new(fetcher), cache.clone());
        let data = loader.load().await;

        assert_eq!(data.cities.len(), 2);
        assert_eq!(data.specialities[0].gender_restriction, Some(Sex::Female));
        assert_eq!(data.doctors[1].city_id, ReferenceId(2));
        assert_eq!(cache.get("cities").unwrap().as_deref(), Some(CITIES));
        assert!(cache.get("specialities").unwrap().is_some());
        assert!(cache.get("doctors").unwrap().is_some());
    }

    #[tokio::test]
    async fn warm_cache_skips_the_network() {
        let cache = Arc::new(MemoryCache::new());
        cache.set("cities", CITIES).unwrap();
        cache.set("specialities", SPECIALITIES).unwrap();
        cache.set("doctors", DOCTORS).unwrap();

        let mut fetcher = MockReferenceFetcher::new();
        fetcher.expect_fetch().times(0);

        let loader = ReferenceLoader::new(Arc::new(fetcher), cache);
        let data = loader.load().await;
        assert_eq!(data.doctors.len(), 2);
    }

    #[tokio::test]
    async fn second_mount_reads_what_the_first_cached() {
        let cache: Arc<MemoryCache> = Arc::new(MemoryCache::new());

        let mut first = MockReferenceFetcher::new();
        first.expect_fetch().times(3).returning(payload);
        let first_data = ReferenceLoader::new(Arc::new(first), cache.clone()).load().await;

        let mut second = MockReferenceFetcher::new();
        second.expect_fetch().times(0);
        let second_data = ReferenceLoader::new(Arc::new(second), cache).load().await;

        assert_eq!(first_data, second_data);
    }

    #[tokio::test]
    async fn session_loads_only_once() {
        let mut fetcher = MockReferenceFetcher::new();
        fetcher.expect_fetch().times(3).returning(payload);
        let loader = ReferenceLoader::new(Arc::new(fetcher), Arc::new(MemoryCache::new()));

        let first = loader.load().await;
        let second = loader.load().await;
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn failed_fetch_leaves_list_empty_and_uncached() {
        let mut fetcher = MockReferenceFetcher::new();
        fetcher.expect_fetch().times(3).returning(|collection| match collection {
            ReferenceCollection::Doctors => Err(IntakeError::Fetch {
                collection: "doctors".to_string(),
                message: "503 Service Unavailable".to_string(),
            }),
            other => payload(other),
        });
        let cache = Arc::new(MemoryCache::new());

        let data = ReferenceLoader::new(Arc::new(fetcher), cache.clone()).load().await;
        assert!(data.doctors.is_empty());
        assert_eq!(data.cities.len(), 2);
        assert!(cache.get("doctors").unwrap().is_none());
    }

    #[tokio::test]
    async fn unexpected_payload_is_not_cached() {
        let mut fetcher = MockReferenceFetcher::new();
        fetcher.expect_fetch().times(3).returning(|collection| match collection {
            ReferenceCollection::Cities => Ok(r#"{"error":"not found"}"#.to_string()),
            other => payload(other),
        });
        let cache = Arc::new(MemoryCache::new());

        let data = ReferenceLoader::new(Arc::new(fetcher), cache.clone()).load().await;
        assert!(data.cities.is_empty());
        assert!(cache.get("cities").unwrap().is_none());
    }

    #[tokio::test]
    async fn malformed_cache_entry_is_evicted_and_refetched() {
        let cache = Arc::new(MemoryCache::new());
        cache.set("cities", "[{broken").unwrap();
        cache.set("specialities", SPECIALITIES).unwrap();
        cache.set("doctors", DOCTORS).unwrap();

        let mut fetcher = MockReferenceFetcher::new();
        fetcher
            .expect_fetch()
            .withf(|collection| *collection == ReferenceCollection::Cities)
            .times(1)
            .returning(payload);

        let data = ReferenceLoader::new(Arc::new(fetcher), cache.clone()).load().await;
        assert_eq!(data.cities.len(), 2);
        assert_eq!(cache.get("cities").unwrap().as_deref(), Some(CITIES));
    }

    #[tokio::test]
    async fn invalidate_clears_every_key() {
        let cache = Arc::new(MemoryCache::new());
        cache.set("cities", CITIES).unwrap();
        cache.set("doctors", DOCTORS).unwrap();

        let loader = ReferenceLoader::new(Arc::new(MockReferenceFetcher::new()), cache.clone());
        loader.invalidate().unwrap();
        assert!(cache.is_empty());
    }
}
