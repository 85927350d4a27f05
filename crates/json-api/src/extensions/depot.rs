//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::Depot;

use storefront_app::domain::users::UserId;

use crate::errors::ApiError;

const USER_ID_DEPOT_KEY: &str = "user_id";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError>;

    fn insert_user_id(&mut self, user: UserId);

    fn user_id_or_401(&self) -> Result<UserId, ApiError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, ApiError> {
        self.obtain::<T>().map_err(|_ignored| {
            ApiError::internal("missing depot value", std::any::type_name::<T>())
        })
    }

    fn insert_user_id(&mut self, user: UserId) {
        self.insert(USER_ID_DEPOT_KEY, user);
    }

    fn user_id_or_401(&self) -> Result<UserId, ApiError> {
        self.get::<UserId>(USER_ID_DEPOT_KEY)
            .copied()
            .map_err(|_ignored| ApiError::unauthorized("Unauthenticated"))
    }
}
