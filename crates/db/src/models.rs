use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbShop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub tel: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBooking {
    pub id: Uuid,
    pub user_id: Uuid,
    pub shop_id: Uuid,
    pub apt_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Booking row joined with the selected columns of its shop. Backs the
/// list and single-get queries so shop expansion costs one round trip.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbBookingWithShop {
    pub id: Uuid,
    pub user_id: Uuid,
    pub shop_id: Uuid,
    pub apt_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub shop_name: String,
    pub shop_address: String,
    pub shop_tel: String,
}
