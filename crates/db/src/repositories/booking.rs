use crate::models::{DbBooking, DbBookingWithShop};
use chrono::{DateTime, Utc};
use eyre::{eyre, Result};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn list_bookings(
    pool: &Pool<Postgres>,
    user_id: Option<Uuid>,
    shop_id: Option<Uuid>,
) -> Result<Vec<DbBookingWithShop>> {
    tracing::debug!(
        "Listing bookings: user_filter={:?}, shop_filter={:?}",
        user_id,
        shop_id
    );

    let bookings = sqlx::query_as::<_, DbBookingWithShop>(
        r#"
        SELECT b.id, b.user_id, b.shop_id, b.apt_date, b.status, b.created_at,
               s.name AS shop_name, s.address AS shop_address, s.tel AS shop_tel
        FROM bookings b
        JOIN shops s ON s.id = b.shop_id
        WHERE ($1::uuid IS NULL OR b.user_id = $1)
          AND ($2::uuid IS NULL OR b.shop_id = $2)
        ORDER BY b.apt_date ASC
        "#,
    )
    .bind(user_id)
    .bind(shop_id)
    .fetch_all(pool)
    .await?;

    Ok(bookings)
}

pub async fn get_booking_by_id(pool: &Pool<Postgres>, id: Uuid) -> Result<Option<DbBooking>> {
    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        SELECT id, user_id, shop_id, apt_date, status, created_at
        FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(booking)
}

pub async fn get_booking_with_shop_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<DbBookingWithShop>> {
    tracing::debug!("Getting booking by id: {}", id);

    let booking = sqlx::query_as::<_, DbBookingWithShop>(
        r#"
        SELECT b.id, b.user_id, b.shop_id, b.apt_date, b.status, b.created_at,
               s.name AS shop_name, s.address AS shop_address, s.tel AS shop_tel
        FROM bookings b
        JOIN shops s ON s.id = b.shop_id
        WHERE b.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if booking.is_none() {
        tracing::debug!("Booking not found: id={}", id);
    }

    Ok(booking)
}

pub async fn count_bookings_by_user_id(pool: &Pool<Postgres>, user_id: Uuid) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM bookings WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}

pub async fn create_booking(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    shop_id: Uuid,
    apt_date: DateTime<Utc>,
    status: &str,
) -> Result<DbBooking> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    tracing::debug!(
        "Creating booking: id={}, user_id={}, shop_id={}",
        id,
        user_id,
        shop_id
    );

    let booking = sqlx::query_as::<_, DbBooking>(
        r#"
        INSERT INTO bookings (id, user_id, shop_id, apt_date, status, created_at)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING id, user_id, shop_id, apt_date, status, created_at
        "#,
    )
    .bind(id)
    .bind(user_id)
    .bind(shop_id)
    .bind(apt_date)
    .bind(status)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(booking)
}

pub async fn update_booking(
    pool: &Pool<Postgres>,
    id: Uuid,
    apt_date: Option<DateTime<Utc>>,
    status: Option<&str>,
) -> Result<DbBooking> {
    let booking = get_booking_by_id(pool, id)
        .await?
        .ok_or_else(|| eyre!("Booking not found"))?;

    let apt_date = apt_date.unwrap_or(booking.apt_date);
    let status = status.unwrap_or(&booking.status);

    let updated_booking = sqlx::query_as::<_, DbBooking>(
        r#"
        UPDATE bookings
        SET apt_date = $2, status = $3
        WHERE id = $1
        RETURNING id, user_id, shop_id, apt_date, status, created_at
        "#,
    )
    .bind(id)
    .bind(apt_date)
    .bind(status)
    .fetch_one(pool)
    .await?;

    Ok(updated_booking)
}

pub async fn delete_booking(pool: &Pool<Postgres>, id: Uuid) -> Result<()> {
    sqlx::query(
        r#"
        DELETE FROM bookings
        WHERE id = $1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?;

    Ok(())
}
