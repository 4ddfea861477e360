use axum::{
    extract::{Path, State},
    Json,
};
use shopbook_core::{
    errors::BookingError,
    models::shop::{GetShopResponse, Shop, ShopListResponse},
};
use shopbook_db::models::DbShop;
use std::sync::Arc;
use uuid::Uuid;

use crate::{middleware::error_handling::AppError, ApiState};

fn shop(row: DbShop) -> Shop {
    Shop {
        id: row.id,
        name: row.name,
        address: row.address,
        tel: row.tel,
        created_at: row.created_at,
    }
}

#[axum::debug_handler]
pub async fn list_shops(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<ShopListResponse>, AppError> {
    let shops = shopbook_db::repositories::shop::list_shops(&state.db_pool)
        .await
        .map_err(|e| BookingError::database("Cannot find Shop", e))?;

    let data: Vec<Shop> = shops.into_iter().map(shop).collect();

    Ok(Json(ShopListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

#[axum::debug_handler]
pub async fn get_shop(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<GetShopResponse>, AppError> {
    let row = shopbook_db::repositories::shop::get_shop_by_id(&state.db_pool, id)
        .await
        .map_err(|e| BookingError::database("Cannot find Shop", e))?
        .ok_or(BookingError::ShopNotFound(id))?;

    Ok(Json(GetShopResponse {
        success: true,
        data: shop(row),
    }))
}
