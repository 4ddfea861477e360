use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use shopbook_core::{
    errors::BookingError,
    models::{
        booking::{
            Booking, BookingListResponse, BookingWithShop, CreateBookingRequest,
            CreateBookingResponse, DeleteBookingResponse, EmptyData, GetBookingResponse,
            UpdateBookingRequest, UpdateBookingResponse, DEFAULT_BOOKING_STATUS,
            MAX_BOOKINGS_PER_USER,
        },
        shop::ShopSummary,
        user::Identity,
    },
};
use shopbook_db::models::{DbBooking, DbBookingWithShop};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    middleware::{auth::AuthUser, error_handling::AppError},
    ApiState,
};

/// Query parameters for the booking list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// Narrows the listing to a single shop
    #[serde(rename = "shopId")]
    pub shop_id: Option<Uuid>,
}

/// Rejects callers that are neither the booking's owner nor an admin.
///
/// `action` names the attempted operation ("view", "update", "delete")
/// and is spliced into the client-facing message.
pub fn ensure_booking_access(
    identity: &Identity,
    owner_id: Uuid,
    action: &'static str,
) -> Result<(), BookingError> {
    if owner_id != identity.user_id && !identity.is_admin() {
        return Err(BookingError::Unauthorized {
            user_id: identity.user_id,
            action,
        });
    }
    Ok(())
}

fn expand(row: DbBookingWithShop) -> BookingWithShop {
    BookingWithShop {
        id: row.id,
        user: row.user_id,
        shop: ShopSummary {
            id: row.shop_id,
            name: row.shop_name,
            address: row.shop_address,
            tel: row.shop_tel,
        },
        apt_date: row.apt_date,
        status: row.status,
        created_at: row.created_at,
    }
}

fn record(booking: DbBooking) -> Booking {
    Booking {
        id: booking.id,
        user: booking.user_id,
        shop: booking.shop_id,
        apt_date: booking.apt_date,
        status: booking.status,
        created_at: booking.created_at,
    }
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<BookingListResponse>, AppError> {
    // Admins see every booking; everyone else only their own
    let user_filter = if identity.is_admin() {
        None
    } else {
        Some(identity.user_id)
    };

    let bookings = shopbook_db::repositories::booking::list_bookings(
        &state.db_pool,
        user_filter,
        query.shop_id,
    )
    .await
    .map_err(|e| BookingError::database("Cannot find Booking", e))?;

    let data: Vec<BookingWithShop> = bookings.into_iter().map(expand).collect();

    Ok(Json(BookingListResponse {
        success: true,
        count: data.len(),
        data,
    }))
}

#[axum::debug_handler]
pub async fn get_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<GetBookingResponse>, AppError> {
    let booking =
        shopbook_db::repositories::booking::get_booking_with_shop_by_id(&state.db_pool, id)
            .await
            .map_err(|e| BookingError::database("Cannot find Booking", e))?
            .ok_or(BookingError::BookingNotFound(id))?;

    ensure_booking_access(&identity, booking.user_id, "view")?;

    Ok(Json(GetBookingResponse {
        success: true,
        data: expand(booking),
    }))
}

#[axum::debug_handler]
pub async fn create_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(shop_id): Path<Uuid>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    // The booking is attached to the shop from the path, which has to exist
    shopbook_db::repositories::shop::get_shop_by_id(&state.db_pool, shop_id)
        .await
        .map_err(|e| BookingError::database("Cannot create Booking", e))?
        .ok_or(BookingError::ShopNotFound(shop_id))?;

    // Quota check and insert are separate statements; two concurrent
    // creations by the same user can slip past the limit
    let existing = shopbook_db::repositories::booking::count_bookings_by_user_id(
        &state.db_pool,
        identity.user_id,
    )
    .await
    .map_err(|e| BookingError::database("Cannot create Booking", e))?;

    if existing >= MAX_BOOKINGS_PER_USER {
        return Err(AppError(BookingError::QuotaExceeded(identity.user_id)));
    }

    let status = payload.status.as_deref().unwrap_or(DEFAULT_BOOKING_STATUS);
    let booking = shopbook_db::repositories::booking::create_booking(
        &state.db_pool,
        identity.user_id,
        shop_id,
        payload.apt_date,
        status,
    )
    .await
    .map_err(|e| BookingError::database("Cannot create Booking", e))?;

    // Existing clients expect 200 on creation, not 201
    Ok(Json(CreateBookingResponse {
        success: true,
        data: record(booking),
    }))
}

#[axum::debug_handler]
pub async fn update_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateBookingRequest>,
) -> Result<Json<UpdateBookingResponse>, AppError> {
    let booking = shopbook_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(|e| BookingError::database("Cannot update Booking", e))?
        .ok_or(BookingError::BookingNotFound(id))?;

    ensure_booking_access(&identity, booking.user_id, "update")?;

    let updated = shopbook_db::repositories::booking::update_booking(
        &state.db_pool,
        id,
        payload.apt_date,
        payload.status.as_deref(),
    )
    .await
    .map_err(|e| BookingError::database("Cannot update Booking", e))?;

    Ok(Json(UpdateBookingResponse {
        success: true,
        data: record(updated),
    }))
}

#[axum::debug_handler]
pub async fn delete_booking(
    State(state): State<Arc<ApiState>>,
    AuthUser(identity): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteBookingResponse>, AppError> {
    let booking = shopbook_db::repositories::booking::get_booking_by_id(&state.db_pool, id)
        .await
        .map_err(|e| BookingError::database("Cannot delete Booking", e))?
        .ok_or(BookingError::BookingNotFound(id))?;

    ensure_booking_access(&identity, booking.user_id, "delete")?;

    shopbook_db::repositories::booking::delete_booking(&state.db_pool, id)
        .await
        .map_err(|e| BookingError::database("Cannot delete Booking", e))?;

    Ok(Json(DeleteBookingResponse {
        success: true,
        data: EmptyData {},
    }))
}
