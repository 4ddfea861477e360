use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::shop::ShopSummary;

/// Most bookings a single user may hold at once. Checked at creation
/// only; updates never re-count.
pub const MAX_BOOKINGS_PER_USER: i64 = 3;

/// Status persisted when a creation payload omits one.
pub const DEFAULT_BOOKING_STATUS: &str = "booked";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub user: Uuid,
    pub shop: Uuid,
    pub apt_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A booking with its shop reference expanded, as returned by the list
/// and single-get endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingWithShop {
    pub id: Uuid,
    pub user: Uuid,
    pub shop: ShopSummary,
    pub apt_date: DateTime<Utc>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub apt_date: DateTime<Utc>,
    pub status: Option<String>,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingRequest {
    pub apt_date: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<BookingWithShop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetBookingResponse {
    pub success: bool,
    pub data: BookingWithShop,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    pub success: bool,
    pub data: Booking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingResponse {
    pub success: bool,
    pub data: Booking,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteBookingResponse {
    pub success: bool,
    pub data: EmptyData,
}

/// Serializes to the literal `{}` the delete contract returns.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyData {}
