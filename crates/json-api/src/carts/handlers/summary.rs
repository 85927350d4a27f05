//! Cart Summary Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    carts::{errors::into_api_error, models::CartSummaryResponse},
    errors::ApiError,
    extensions::*,
    state::State,
};

/// Cart Summary Handler
///
/// Line count, unit count and subtotal. Served from cache when warm.
#[endpoint(
    tags("carts"),
    summary = "Get Cart Summary",
    responses(
        (status_code = StatusCode::OK, description = "Cart totals"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartSummaryResponse>, ApiError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let user = depot.user_id_or_401()?;

    let summary = state
        .app
        .carts
        .summary(user)
        .await
        .map_err(into_api_error)?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::carts::{MockCartsService, models::CartSummary};

    use crate::test_helpers::{TEST_USER_ID, carts_service};

    use super::*;

    #[tokio::test]
    async fn test_summary_returns_totals() -> TestResult {
        let mut carts = MockCartsService::new();

        carts
            .expect_summary()
            .once()
            .withf(|user| *user == TEST_USER_ID)
            .return_once(|_| {
                Ok(CartSummary {
                    lines: 2,
                    total_quantity: 5,
                    subtotal: 12_500,
                })
            });

        let mut res = TestClient::get("http://example.com/cart/summary")
            .send(&carts_service(
                carts,
                Router::with_path("cart/summary").get(handler),
            ))
            .await;

        let body: CartSummaryResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.lines, 2);
        assert_eq!(body.total_quantity, 5);
        assert_eq!(body.subtotal, 12_500);

        Ok(())
    }
}
