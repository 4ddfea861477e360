use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/v1/shops", get(handlers::shop::list_shops))
        .route("/api/v1/shops/:id", get(handlers::shop::get_shop))
}
