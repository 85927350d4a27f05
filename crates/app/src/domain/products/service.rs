//! Products service.

use std::{fmt, sync::Arc};

use async_trait::async_trait;
use jiff::SignedDuration;
use mockall::automock;
use storefront::tables::ProductTable;
use tracing::debug;

use crate::{
    cache::{self, CacheStore, keys},
    database::Db,
    domain::products::{
        errors::ProductsServiceError,
        records::{ProductId, ProductRecord},
        repository::{PgProductsRepository, ProductsRepository},
    },
};

pub struct PgProductsService {
    repository: Arc<dyn ProductsRepository>,
    cache: Arc<dyn CacheStore>,
    ttl: SignedDuration,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: &Db, cache: Arc<dyn CacheStore>, ttl: SignedDuration) -> Self {
        Self::with_repository(
            Arc::new(PgProductsRepository::new(db.pool().clone())),
            cache,
            ttl,
        )
    }

    pub(crate) fn with_repository(
        repository: Arc<dyn ProductsRepository>,
        cache: Arc<dyn CacheStore>,
        ttl: SignedDuration,
    ) -> Self {
        Self {
            repository,
            cache,
            ttl,
        }
    }
}

impl fmt::Debug for PgProductsService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PgProductsService")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn get_product(
        &self,
        table: ProductTable,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError> {
        let key = keys::product(table, product);

        if let Some(cached) = cache::get_json::<ProductRecord>(self.cache.as_ref(), &key) {
            debug!(%table, product_id = %product, "product cache hit");

            return Ok(cached);
        }

        let record = self
            .repository
            .find_product(table, product)
            .await?
            .ok_or(ProductsServiceError::NotFound)?;

        cache::put_json(self.cache.as_ref(), &key, &record, self.ttl);

        Ok(record)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// Retrieve a product for display. May be served from cache.
    async fn get_product(
        &self,
        table: ProductTable,
        product: ProductId,
    ) -> Result<ProductRecord, ProductsServiceError>;
}
