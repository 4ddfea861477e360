use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/v1/bookings", get(handlers::booking::list_bookings))
        .route("/api/v1/bookings/:id", get(handlers::booking::get_booking))
        .route("/api/v1/bookings/:id", put(handlers::booking::update_booking))
        .route(
            "/api/v1/bookings/:id",
            delete(handlers::booking::delete_booking),
        )
        .route(
            "/api/v1/shops/:shop_id/bookings",
            post(handlers::booking::create_booking),
        )
}
