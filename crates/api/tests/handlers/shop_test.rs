use axum::Json;
use mockall::predicate;
use shopbook_api::middleware::error_handling::AppError;
use shopbook_core::{
    errors::BookingError,
    models::shop::{GetShopResponse, Shop, ShopListResponse},
};
use shopbook_db::models::DbShop;
use uuid::Uuid;

use crate::test_utils::{shop_row, TestContext};

fn shop(row: DbShop) -> Shop {
    Shop {
        id: row.id,
        name: row.name,
        address: row.address,
        tel: row.tel,
        created_at: row.created_at,
    }
}

async fn list_shops_wrapper(ctx: &TestContext) -> Result<Json<ShopListResponse>, AppError> {
    let rows = ctx
        .shop_repo
        .list_shops()
        .await
        .map_err(|e| BookingError::database("Cannot find Shop", e))?;

    let data: Vec<Shop> = rows.into_iter().map(shop).collect();

    Ok(Json(ShopListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

async fn get_shop_wrapper(ctx: &TestContext, id: Uuid) -> Result<Json<GetShopResponse>, AppError> {
    let row = ctx
        .shop_repo
        .get_shop_by_id(id)
        .await
        .map_err(|e| BookingError::database("Cannot find Shop", e))?
        .ok_or(BookingError::ShopNotFound(id))?;

    Ok(Json(GetShopResponse {
        success: true,
        data: shop(row),
    }))
}

#[tokio::test]
async fn test_list_shops() {
    let mut ctx = TestContext::new();

    ctx.shop_repo
        .expect_list_shops()
        .returning(|| Ok(vec![shop_row(Uuid::new_v4()), shop_row(Uuid::new_v4())]));

    let response = list_shops_wrapper(&ctx).await.unwrap();

    assert!(response.0.success);
    assert_eq!(response.0.count, 2);
}

#[tokio::test]
async fn test_get_shop_not_found() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.shop_repo
        .expect_get_shop_by_id()
        .with(predicate::eq(id))
        .returning(|_| Ok(None));

    let err = get_shop_wrapper(&ctx, id).await.unwrap_err();
    assert_eq!(err.0.to_string(), format!("No shop with the id of {}", id));
}

#[tokio::test]
async fn test_get_shop_success() {
    let mut ctx = TestContext::new();
    let id = Uuid::new_v4();

    ctx.shop_repo
        .expect_get_shop_by_id()
        .with(predicate::eq(id))
        .returning(move |_| Ok(Some(shop_row(id))));

    let response = get_shop_wrapper(&ctx, id).await.unwrap();

    assert!(response.0.success);
    assert_eq!(response.0.data.id, id);
    assert_eq!(response.0.data.name, "Clean Cuts");
}
