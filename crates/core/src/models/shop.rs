use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shop {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub tel: String,
    pub created_at: DateTime<Utc>,
}

/// The selected shop fields expanded onto a booking in place of the
/// bare shop id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopSummary {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub tel: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopListResponse {
    pub success: bool,
    pub count: usize,
    pub data: Vec<Shop>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetShopResponse {
    pub success: bool,
    pub data: Shop,
}
