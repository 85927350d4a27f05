//! App Context

use std::sync::Arc;

use jiff::SignedDuration;
use thiserror::Error;

use crate::{
    cache::{CacheStore, MemoryCache},
    database::{self, Db, PoolSettings},
    domain::{
        carts::{CartsService, PgCartsService},
        products::{PgProductsService, ProductsService},
        wishlists::{PgWishlistsService, WishlistsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

/// Cache lifetimes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheSettings {
    /// Lifetime of per-user cart summaries.
    pub cart_summary_ttl: SignedDuration,

    /// Lifetime of cached product reads.
    pub product_ttl: SignedDuration,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            cart_summary_ttl: SignedDuration::from_secs(1800),
            product_ttl: SignedDuration::from_secs(3600),
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub carts: Arc<dyn CartsService>,
    pub wishlists: Arc<dyn WishlistsService>,
    pub products: Arc<dyn ProductsService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or migrating fails.
    pub async fn from_database_url(
        url: &str,
        pool: PoolSettings,
        cache: CacheSettings,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url, pool)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrate)?;

        Ok(Self::from_db(&Db::new(pool), cache))
    }

    /// Wire the services over an existing pool, sharing one process-local cache.
    #[must_use]
    pub fn from_db(db: &Db, settings: CacheSettings) -> Self {
        let cache: Arc<dyn CacheStore> = Arc::new(MemoryCache::new());

        let carts: Arc<dyn CartsService> = Arc::new(PgCartsService::new(
            db,
            cache.clone(),
            settings.cart_summary_ttl,
        ));

        Self {
            wishlists: Arc::new(PgWishlistsService::new(db, carts.clone())),
            products: Arc::new(PgProductsService::new(db, cache, settings.product_ttl)),
            carts,
        }
    }
}
