use chrono::{DateTime, FixedOffset};
use database::entities::users;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Profile shape returned by the `/users` endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
    pub user_id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email_address: String,
    pub contact_number: Option<String>,
    pub avatar_url: Option<String>,
    pub status: Option<String>,
}

impl From<users::Model> for UserResponse {
    fn from(user: users::Model) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            middle_name: user.middle_name,
            last_name: user.last_name,
            email_address: user.email_address,
            contact_number: user.contact_number,
            avatar_url: user.avatar_url,
            status: user.status,
        }
    }
}

/// Administrative shape returned by the `/accounts` endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub id: i32,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub middle_name: Option<String>,
    pub email_address: String,
    pub contact_number: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<DateTime<FixedOffset>>,
    pub avatar_url: Option<String>,
    pub full_name: String,
}

impl From<users::Model> for AccountResponse {
    fn from(user: users::Model) -> Self {
        let full_name = user.full_name();
        Self {
            id: user.user_id,
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            middle_name: user.middle_name,
            email_address: user.email_address,
            contact_number: user.contact_number,
            status: user.status,
            created_at: user.created_at,
            avatar_url: user.avatar_url,
            full_name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AccountCreate {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub middle_name: Option<String>,
    pub email_address: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UserUpdate {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub middle_name: Option<String>,
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
