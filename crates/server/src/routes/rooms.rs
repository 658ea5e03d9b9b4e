use crate::dtos::rooms::{
    BuildingCreate, BuildingResponse, BuildingUpdate, RoomCreate, RoomResponse, RoomUpdate,
};
use crate::error::ApiError;
use crate::pagination::{PageParams, fetch_page};
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::entities::{buildings, rooms};
use sea_orm::{ActiveValue::Set, EntityTrait};

/// List buildings
#[utoipa::path(
    get,
    path = "/api/buildings",
    params(PageParams),
    responses(
        (status = 200, description = "List of buildings", body = [BuildingResponse])
    ),
    tag = "Rooms"
)]
pub async fn list_buildings(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<BuildingResponse>>, ApiError> {
    let rows = fetch_page(&state.db, buildings::Entity::find(), &params).await?;
    Ok(Json(rows.into_iter().map(BuildingResponse::from).collect()))
}

/// Create a building
#[utoipa::path(
    post,
    path = "/api/buildings",
    request_body = BuildingCreate,
    responses(
        (status = 201, description = "Building created", body = BuildingResponse)
    ),
    tag = "Rooms"
)]
pub async fn create_building(
    State(state): State<SharedState>,
    Json(payload): Json<BuildingCreate>,
) -> Result<(StatusCode, Json<BuildingResponse>), ApiError> {
    let row = buildings::ActiveModel {
        building_id: Set(payload.building_id),
        building_name: Set(payload.building_name),
    };
    let building = buildings::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((StatusCode::CREATED, Json(BuildingResponse::from(building))))
}

/// Get a building by id
#[utoipa::path(
    get,
    path = "/api/buildings/{building_id}",
    responses(
        (status = 200, body = BuildingResponse),
        (status = 404, description = "Building not found")
    ),
    tag = "Rooms"
)]
pub async fn get_building(
    State(state): State<SharedState>,
    Path(building_id): Path<String>,
) -> Result<Json<BuildingResponse>, ApiError> {
    let building = buildings::Entity::find_by_id(&building_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Building not found"))?;
    Ok(Json(BuildingResponse::from(building)))
}

/// Update a building
#[utoipa::path(
    put,
    path = "/api/buildings/{building_id}",
    request_body = BuildingUpdate,
    responses(
        (status = 200, body = BuildingResponse),
        (status = 404, description = "Building not found")
    ),
    tag = "Rooms"
)]
pub async fn update_building(
    State(state): State<SharedState>,
    Path(building_id): Path<String>,
    Json(payload): Json<BuildingUpdate>,
) -> Result<Json<BuildingResponse>, ApiError> {
    let building = buildings::Entity::find_by_id(&building_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Building not found"))?;

    let mut active: buildings::ActiveModel = building.into();
    if let Some(building_name) = payload.building_name {
        active.building_name = Set(building_name);
    }
    let updated = buildings::Entity::update(active).exec(&state.db).await?;
    Ok(Json(BuildingResponse::from(updated)))
}

/// Delete a building
#[utoipa::path(
    delete,
    path = "/api/buildings/{building_id}",
    responses(
        (status = 204, description = "Building deleted"),
        (status = 404, description = "Building not found")
    ),
    tag = "Rooms"
)]
pub async fn delete_building(
    State(state): State<SharedState>,
    Path(building_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    buildings::Entity::find_by_id(&building_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Building not found"))?;
    buildings::Entity::delete_by_id(&building_id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List rooms with building names
#[utoipa::path(
    get,
    path = "/api/rooms",
    params(PageParams),
    responses(
        (status = 200, description = "List of rooms", body = [RoomResponse])
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<RoomResponse>>, ApiError> {
    let rows = fetch_page(&state.db, rooms::Entity::find(), &params).await?;
    let room_ids: Vec<String> = rows.iter().map(|r| r.room_id.clone()).collect();
    let hydrated =
        database::services::exam_schedule::rooms_with_buildings(&state.db, room_ids).await?;

    let responses = rows
        .into_iter()
        .map(|room| {
            let building = hydrated
                .get(&room.room_id)
                .and_then(|(_, building)| building.clone());
            RoomResponse::from_models(room, building)
        })
        .collect();
    Ok(Json(responses))
}

/// Create a room
#[utoipa::path(
    post,
    path = "/api/rooms",
    request_body = RoomCreate,
    responses(
        (status = 201, description = "Room created", body = RoomResponse),
        (status = 400, description = "Building not found")
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(state): State<SharedState>,
    Json(payload): Json<RoomCreate>,
) -> Result<(StatusCode, Json<RoomResponse>), ApiError> {
    let building = buildings::Entity::find_by_id(&payload.building_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Building not found"))?;

    let row = rooms::ActiveModel {
        room_id: Set(payload.room_id),
        room_name: Set(payload.room_name),
        room_type: Set(payload.room_type),
        room_capacity: Set(payload.room_capacity),
        building_id: Set(building.building_id.clone()),
    };
    let room = rooms::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RoomResponse::from_models(room, Some(building))),
    ))
}

/// Get a room by id
#[utoipa::path(
    get,
    path = "/api/rooms/{room_id}",
    responses(
        (status = 200, body = RoomResponse),
        (status = 404, description = "Room not found")
    ),
    tag = "Rooms"
)]
pub async fn get_room(
    State(state): State<SharedState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomResponse>, ApiError> {
    let (room, building) = rooms::Entity::find_by_id(&room_id)
        .find_also_related(buildings::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Room not found"))?;
    Ok(Json(RoomResponse::from_models(room, building)))
}

/// Update a room
#[utoipa::path(
    put,
    path = "/api/rooms/{room_id}",
    request_body = RoomUpdate,
    responses(
        (status = 200, body = RoomResponse),
        (status = 404, description = "Room not found")
    ),
    tag = "Rooms"
)]
pub async fn update_room(
    State(state): State<SharedState>,
    Path(room_id): Path<String>,
    Json(payload): Json<RoomUpdate>,
) -> Result<Json<RoomResponse>, ApiError> {
    let room = rooms::Entity::find_by_id(&room_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Room not found"))?;

    let mut active: rooms::ActiveModel = room.into();
    if let Some(building_id) = payload.building_id {
        let building = buildings::Entity::find_by_id(&building_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Building not found"))?;
        active.building_id = Set(building.building_id);
    }
    if let Some(room_name) = payload.room_name {
        active.room_name = Set(room_name);
    }
    if let Some(room_type) = payload.room_type {
        active.room_type = Set(room_type);
    }
    if let Some(room_capacity) = payload.room_capacity {
        active.room_capacity = Set(room_capacity);
    }
    let updated = rooms::Entity::update(active).exec(&state.db).await?;

    let building = buildings::Entity::find_by_id(&updated.building_id)
        .one(&state.db)
        .await?;
    Ok(Json(RoomResponse::from_models(updated, building)))
}

/// Delete a room
#[utoipa::path(
    delete,
    path = "/api/rooms/{room_id}",
    responses(
        (status = 204, description = "Room deleted"),
        (status = 404, description = "Room not found")
    ),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(state): State<SharedState>,
    Path(room_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    rooms::Entity::find_by_id(&room_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Room not found"))?;
    rooms::Entity::delete_by_id(&room_id).exec(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}
