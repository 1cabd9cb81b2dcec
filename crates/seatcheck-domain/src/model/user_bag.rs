//! Bags saved by a user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::bag::Bag;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBag {
    pub id: String,
    pub user_id: String,
    pub bag_id: String,
    #[serde(default)]
    pub custom_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserBag {
    pub user_id: String,
    pub bag_id: String,
    #[serde(default)]
    pub custom_name: Option<String>,
}

/// A saved bag joined with its catalogue entry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBagWithBag {
    #[serde(flatten)]
    pub user_bag: UserBag,
    pub bag: Bag,
}
