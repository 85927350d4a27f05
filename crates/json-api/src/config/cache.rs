//! Cache Config

use clap::Args;
use jiff::SignedDuration;
use storefront_app::context::CacheSettings;

/// Cache lifetimes, in seconds.
#[derive(Debug, Args)]
pub struct CacheConfig {
    /// Lifetime of cached cart summaries
    #[arg(long, env = "CART_CACHE_TTL_SECONDS", default_value_t = 1_800_i64)]
    pub cart_cache_ttl_seconds: i64,

    /// Lifetime of cached product reads
    #[arg(long, env = "PRODUCT_CACHE_TTL_SECONDS", default_value_t = 3_600_i64)]
    pub product_cache_ttl_seconds: i64,
}

impl CacheConfig {
    #[must_use]
    pub fn settings(&self) -> CacheSettings {
        CacheSettings {
            cart_summary_ttl: SignedDuration::from_secs(self.cart_cache_ttl_seconds),
            product_ttl: SignedDuration::from_secs(self.product_cache_ttl_seconds),
        }
    }
}
