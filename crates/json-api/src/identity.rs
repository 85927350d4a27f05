//! User identity middleware.
//!
//! Authentication happens upstream; the gateway forwards the caller's id in
//! `X-User-Id`.

use salvo::prelude::*;
use tracing::Span;

use storefront_app::domain::users::UserId;

use crate::{errors::ApiError, extensions::*};

pub(crate) const USER_ID_HEADER: &str = "x-user-id";

#[salvo::handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let Some(user) = extract_user_id(req) else {
        res.render(ApiError::unauthorized("Unauthenticated"));
        ctrl.skip_rest();

        return;
    };

    Span::current().record("user_id", user.into_i64());

    depot.insert_user_id(user);

    ctrl.call_next(req, depot, res).await;
}

fn extract_user_id(req: &Request) -> Option<UserId> {
    let value = req.headers().get(USER_ID_HEADER)?.to_str().ok()?;

    value
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .map(UserId::from_i64)
}
