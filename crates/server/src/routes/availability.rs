use crate::dtos::availability::{
    AvailabilityCreate, AvailabilityPayload, AvailabilityQuery, AvailabilityResponse,
    AvailabilityUpdate,
};
use crate::error::ApiError;
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use database::entities::{availabilities, users};
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};
use std::collections::HashMap;

async fn user_for(state: &SharedState, user_id: i32) -> Result<users::Model, ApiError> {
    users::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("User not found"))
}

async fn insert_one(
    state: &SharedState,
    payload: AvailabilityCreate,
) -> Result<AvailabilityResponse, ApiError> {
    let user = user_for(state, payload.user_id).await?;
    let row = availabilities::ActiveModel {
        availability_id: sea_orm::ActiveValue::NotSet,
        day: Set(payload.day),
        time_slot: Set(payload.time_slot),
        status: Set(payload.status),
        remarks: Set(payload.remarks),
        user_id: Set(payload.user_id),
    };
    let created = availabilities::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok(AvailabilityResponse::from_models(created, Some(user)))
}

/// List availability submissions, optionally for one user
#[utoipa::path(
    get,
    path = "/api/availabilities",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "List of availability rows", body = [AvailabilityResponse])
    ),
    tag = "Availability"
)]
pub async fn list_availabilities(
    State(state): State<SharedState>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<Vec<AvailabilityResponse>>, ApiError> {
    let mut select = availabilities::Entity::find();
    if let Some(user_id) = query.user_id {
        select = select.filter(availabilities::Column::UserId.eq(user_id));
    }
    let rows = select.all(&state.db).await?;

    let user_ids: Vec<i32> = rows.iter().map(|a| a.user_id).collect();
    let users_by_id: HashMap<i32, users::Model> = users::Entity::find()
        .filter(users::Column::UserId.is_in(user_ids))
        .all(&state.db)
        .await?
        .into_iter()
        .map(|u| (u.user_id, u))
        .collect();

    let responses = rows
        .into_iter()
        .map(|row| {
            let user = users_by_id.get(&row.user_id).cloned();
            AvailabilityResponse::from_models(row, user)
        })
        .collect();
    Ok(Json(responses))
}

/// Create one availability row, or a whole batch when the body is a list
#[utoipa::path(
    post,
    path = "/api/availabilities",
    request_body = AvailabilityPayload,
    responses(
        (status = 201, description = "Availability recorded", body = AvailabilityResponse),
        (status = 400, description = "Unknown user")
    ),
    tag = "Availability"
)]
pub async fn create_availability(
    State(state): State<SharedState>,
    Json(payload): Json<AvailabilityPayload>,
) -> Result<Response, ApiError> {
    match payload {
        AvailabilityPayload::One(item) => {
            let response = insert_one(&state, item).await?;
            Ok((StatusCode::CREATED, Json(response)).into_response())
        }
        AvailabilityPayload::Many(items) => {
            let mut responses = Vec::with_capacity(items.len());
            for item in items {
                responses.push(insert_one(&state, item).await?);
            }
            Ok((StatusCode::CREATED, Json(responses)).into_response())
        }
    }
}

/// Get an availability row by id
#[utoipa::path(
    get,
    path = "/api/availabilities/{availability_id}",
    responses(
        (status = 200, body = AvailabilityResponse),
        (status = 404, description = "Availability not found")
    ),
    tag = "Availability"
)]
pub async fn get_availability(
    State(state): State<SharedState>,
    Path(availability_id): Path<i32>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let (row, user) = availabilities::Entity::find_by_id(availability_id)
        .find_also_related(users::Entity)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Availability not found"))?;
    Ok(Json(AvailabilityResponse::from_models(row, user)))
}

/// Update an availability row
#[utoipa::path(
    put,
    path = "/api/availabilities/{availability_id}",
    request_body = AvailabilityUpdate,
    responses(
        (status = 200, body = AvailabilityResponse),
        (status = 404, description = "Availability not found")
    ),
    tag = "Availability"
)]
pub async fn update_availability(
    State(state): State<SharedState>,
    Path(availability_id): Path<i32>,
    Json(payload): Json<AvailabilityUpdate>,
) -> Result<Json<AvailabilityResponse>, ApiError> {
    let row = availabilities::Entity::find_by_id(availability_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Availability not found"))?;

    let mut active: availabilities::ActiveModel = row.into();
    if let Some(user_id) = payload.user_id {
        user_for(&state, user_id).await?;
        active.user_id = Set(user_id);
    }
    if let Some(day) = payload.day {
        active.day = Set(day);
    }
    if let Some(time_slot) = payload.time_slot {
        active.time_slot = Set(time_slot);
    }
    if let Some(status) = payload.status {
        active.status = Set(status);
    }
    if let Some(remarks) = payload.remarks {
        active.remarks = Set(Some(remarks));
    }
    let updated = availabilities::Entity::update(active).exec(&state.db).await?;

    let user = users::Entity::find_by_id(updated.user_id)
        .one(&state.db)
        .await?;
    Ok(Json(AvailabilityResponse::from_models(updated, user)))
}

/// Delete an availability row
#[utoipa::path(
    delete,
    path = "/api/availabilities/{availability_id}",
    responses(
        (status = 204, description = "Availability deleted"),
        (status = 404, description = "Availability not found")
    ),
    tag = "Availability"
)]
pub async fn delete_availability(
    State(state): State<SharedState>,
    Path(availability_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    availabilities::Entity::find_by_id(availability_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Availability not found"))?;
    availabilities::Entity::delete_by_id(availability_id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
