use crate::models::DbShop;
use eyre::Result;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_shops(pool: &Pool<Postgres>) -> Result<Vec<DbShop>> {
    let shops = sqlx::query_as::<_, DbShop>(
        r#"
        SELECT id, name, address, tel, created_at
        FROM shops
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(shops)
}

pub async fn get_shop_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbShop>> {
    let shop = sqlx::query_as::<_, DbShop>(
        r#"
        SELECT id, name, address, tel, created_at
        FROM shops
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(shop)
}
