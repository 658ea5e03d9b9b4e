use database::entities::{buildings, rooms};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct BuildingResponse {
    pub building_id: String,
    pub building_name: String,
}

impl From<buildings::Model> for BuildingResponse {
    fn from(building: buildings::Model) -> Self {
        Self {
            building_id: building.building_id,
            building_name: building.building_name,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BuildingCreate {
    pub building_id: String,
    pub building_name: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct BuildingUpdate {
    #[serde(default)]
    pub building_name: Option<String>,
}

/// Rooms carry their building's name alongside the id.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub room_id: String,
    pub room_name: String,
    pub room_type: String,
    pub room_capacity: i32,
    pub building_id: String,
    pub building_name: Option<String>,
}

impl RoomResponse {
    pub fn from_models(room: rooms::Model, building: Option<buildings::Model>) -> Self {
        Self {
            room_id: room.room_id,
            room_name: room.room_name,
            room_type: room.room_type,
            room_capacity: room.room_capacity,
            building_id: room.building_id,
            building_name: building.map(|b| b.building_name),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomCreate {
    pub room_id: String,
    pub room_name: String,
    pub room_type: String,
    pub room_capacity: i32,
    pub building_id: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RoomUpdate {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub room_type: Option<String>,
    #[serde(default)]
    pub room_capacity: Option<i32>,
    #[serde(default)]
    pub building_id: Option<String>,
}
