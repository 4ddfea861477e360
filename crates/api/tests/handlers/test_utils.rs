use chrono::Utc;
use shopbook_core::models::user::{Identity, Role};
use shopbook_db::mock::repositories::{MockBookingRepo, MockShopRepo, MockUserRepo};
use shopbook_db::models::{DbBooking, DbBookingWithShop, DbShop};
use uuid::Uuid;

pub struct TestContext {
    // Mocks for each repository the handlers touch
    pub booking_repo: MockBookingRepo,
    pub shop_repo: MockShopRepo,
    pub user_repo: MockUserRepo,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            booking_repo: MockBookingRepo::new(),
            shop_repo: MockShopRepo::new(),
            user_repo: MockUserRepo::new(),
        }
    }
}

pub fn admin_identity() -> Identity {
    Identity::new(Uuid::new_v4(), Role::Admin)
}

pub fn user_identity(user_id: Uuid) -> Identity {
    Identity::new(user_id, Role::User)
}

pub fn booking_row(id: Uuid, user_id: Uuid, shop_id: Uuid) -> DbBookingWithShop {
    DbBookingWithShop {
        id,
        user_id,
        shop_id,
        apt_date: Utc::now(),
        status: "booked".to_string(),
        created_at: Utc::now(),
        shop_name: "Clean Cuts".to_string(),
        shop_address: "12 High Street".to_string(),
        shop_tel: "02-111-2222".to_string(),
    }
}

pub fn plain_booking_row(id: Uuid, user_id: Uuid, shop_id: Uuid) -> DbBooking {
    DbBooking {
        id,
        user_id,
        shop_id,
        apt_date: Utc::now(),
        status: "booked".to_string(),
        created_at: Utc::now(),
    }
}

pub fn shop_row(id: Uuid) -> DbShop {
    DbShop {
        id,
        name: "Clean Cuts".to_string(),
        address: "12 High Street".to_string(),
        tel: "02-111-2222".to_string(),
        created_at: Utc::now(),
    }
}
