//! Public, unauthenticated site configuration reads.
//!
//! These back the brochure pages, so responses are cached in-process with
//! a 5-minute TTL. Mutations elsewhere do not invalidate the cache; the
//! TTL bounds staleness, matching the read-through behavior of the public
//! surface.

use std::time::Duration;

use moka::future::Cache;

use crate::models::{PublicConfigMap, SiteInfo};
use crate::outcome::Outcome;
use crate::transport::Transport;

/// Cache TTL for public reads.
const CACHE_TTL: Duration = Duration::from_secs(300);

const CONFIGURATIONS_KEY: &str = "configurations";
const SITE_INFO_KEY: &str = "site_info";

/// Cached value types for the public surface.
#[derive(Debug, Clone)]
enum CacheValue {
    Configurations(PublicConfigMap),
    SiteInfo(SiteInfo),
}

/// In-process cache shared by all [`PublicClient`] borrows.
pub(crate) struct PublicCache {
    cache: Cache<&'static str, CacheValue>,
}

impl PublicCache {
    pub(crate) fn new() -> Self {
        Self {
            cache: Cache::builder()
                .max_capacity(8)
                .time_to_live(CACHE_TTL)
                .build(),
        }
    }
}

/// Client for the public read-only surface.
pub struct PublicClient<'a> {
    transport: &'a Transport,
    cache: &'a PublicCache,
}

impl<'a> PublicClient<'a> {
    pub(crate) const fn new(transport: &'a Transport, cache: &'a PublicCache) -> Self {
        Self { transport, cache }
    }

    /// Public configuration values, keyed by configuration key and typed
    /// per each configuration's declared type.
    pub async fn configurations(&self) -> Outcome<PublicConfigMap> {
        if let Some(CacheValue::Configurations(map)) =
            self.cache.cache.get(CONFIGURATIONS_KEY).await
        {
            return Outcome::success(map);
        }

        let outcome: Outcome<PublicConfigMap> = self
            .transport
            .run(
                self.transport.get("/api/public/configurations/"),
                "Could not load public configurations",
            )
            .await;

        if let Outcome::Success { data, .. } = &outcome {
            self.cache
                .cache
                .insert(CONFIGURATIONS_KEY, CacheValue::Configurations(data.clone()))
                .await;
        }
        outcome
    }

    /// Aggregated public site information (site, SEO, and social groups).
    pub async fn site_info(&self) -> Outcome<SiteInfo> {
        if let Some(CacheValue::SiteInfo(info)) = self.cache.cache.get(SITE_INFO_KEY).await {
            return Outcome::success(info);
        }

        let outcome: Outcome<SiteInfo> = self
            .transport
            .run(
                self.transport.get("/api/public/site-info/"),
                "Could not load site info",
            )
            .await;

        if let Outcome::Success { data, .. } = &outcome {
            self.cache
                .cache
                .insert(SITE_INFO_KEY, CacheValue::SiteInfo(data.clone()))
                .await;
        }
        outcome
    }
}
