use crate::dtos::users::UserResponse;
use chrono::NaiveDate;
use database::entities::{availabilities, users};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailabilityResponse {
    pub availability_id: i32,
    pub day: NaiveDate,
    pub time_slot: String,
    pub status: String,
    pub remarks: Option<String>,
    pub user: Option<UserResponse>,
}

impl AvailabilityResponse {
    pub fn from_models(row: availabilities::Model, user: Option<users::Model>) -> Self {
        Self {
            availability_id: row.availability_id,
            day: row.day,
            time_slot: row.time_slot,
            status: row.status,
            remarks: row.remarks,
            user: user.map(UserResponse::from),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AvailabilityCreate {
    pub day: NaiveDate,
    pub time_slot: String,
    pub status: String,
    #[serde(default)]
    pub remarks: Option<String>,
    pub user_id: i32,
}

/// Proctors submit either a single slot or a whole week at once.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum AvailabilityPayload {
    One(AvailabilityCreate),
    Many(Vec<AvailabilityCreate>),
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AvailabilityUpdate {
    #[serde(default)]
    pub day: Option<NaiveDate>,
    #[serde(default)]
    pub time_slot: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub user_id: Option<i32>,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct AvailabilityQuery {
    pub user_id: Option<i32>,
}
