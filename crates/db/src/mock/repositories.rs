use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{DbBooking, DbBookingWithShop, DbShop, DbUser};

// Mock repositories for testing
mock! {
    pub BookingRepo {
        pub async fn list_bookings(
            &self,
            user_id: Option<Uuid>,
            shop_id: Option<Uuid>,
        ) -> eyre::Result<Vec<DbBookingWithShop>>;

        pub async fn get_booking_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBooking>>;

        pub async fn get_booking_with_shop_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbBookingWithShop>>;

        pub async fn count_bookings_by_user_id(
            &self,
            user_id: Uuid,
        ) -> eyre::Result<i64>;

        pub async fn create_booking(
            &self,
            user_id: Uuid,
            shop_id: Uuid,
            apt_date: DateTime<Utc>,
            status: &'static str,
        ) -> eyre::Result<DbBooking>;

        pub async fn update_booking(
            &self,
            id: Uuid,
            apt_date: Option<DateTime<Utc>>,
            status: Option<&'static str>,
        ) -> eyre::Result<DbBooking>;

        pub async fn delete_booking(
            &self,
            id: Uuid,
        ) -> eyre::Result<()>;
    }
}

mock! {
    pub ShopRepo {
        pub async fn list_shops(&self) -> eyre::Result<Vec<DbShop>>;

        pub async fn get_shop_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbShop>>;
    }
}

mock! {
    pub UserRepo {
        pub async fn get_user_by_id(
            &self,
            id: Uuid,
        ) -> eyre::Result<Option<DbUser>>;
    }
}
