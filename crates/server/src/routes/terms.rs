use crate::dtos::terms::{TermResponse, TermWrite};
use crate::error::ApiError;
use crate::pagination::{PageParams, fetch_page};
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use database::entities::terms;
use sea_orm::{ActiveValue::Set, EntityTrait, QueryOrder};

fn validated_name(payload: &TermWrite) -> Result<String, ApiError> {
    match payload.term_name.as_deref().map(str::trim) {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err(ApiError::validation(
            "term_name",
            "Term name cannot be empty.",
        )),
    }
}

/// List terms ordered by id
#[utoipa::path(
    get,
    path = "/api/terms",
    params(PageParams),
    responses(
        (status = 200, description = "List of terms", body = [TermResponse])
    ),
    tag = "Terms"
)]
pub async fn list_terms(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<TermResponse>>, ApiError> {
    let query = terms::Entity::find().order_by_asc(terms::Column::TermId);
    let rows = fetch_page(&state.db, query, &params).await?;
    Ok(Json(rows.into_iter().map(TermResponse::from).collect()))
}

/// Create a term; blank names are rejected
#[utoipa::path(
    post,
    path = "/api/terms",
    request_body = TermWrite,
    responses(
        (status = 201, description = "Term created", body = TermResponse),
        (status = 400, description = "Blank term name")
    ),
    tag = "Terms"
)]
pub async fn create_term(
    State(state): State<SharedState>,
    Json(payload): Json<TermWrite>,
) -> Result<(StatusCode, Json<TermResponse>), ApiError> {
    let term_name = validated_name(&payload)?;
    let row = terms::ActiveModel {
        term_id: sea_orm::ActiveValue::NotSet,
        term_name: Set(term_name),
    };
    let term = terms::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((StatusCode::CREATED, Json(TermResponse::from(term))))
}

/// Get a term by id
#[utoipa::path(
    get,
    path = "/api/terms/{term_id}",
    responses(
        (status = 200, body = TermResponse),
        (status = 404, description = "Term not found")
    ),
    tag = "Terms"
)]
pub async fn get_term(
    State(state): State<SharedState>,
    Path(term_id): Path<i32>,
) -> Result<Json<TermResponse>, ApiError> {
    let term = terms::Entity::find_by_id(term_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Term not found"))?;
    Ok(Json(TermResponse::from(term)))
}

/// Rename a term
#[utoipa::path(
    put,
    path = "/api/terms/{term_id}",
    request_body = TermWrite,
    responses(
        (status = 200, body = TermResponse),
        (status = 404, description = "Term not found")
    ),
    tag = "Terms"
)]
pub async fn update_term(
    State(state): State<SharedState>,
    Path(term_id): Path<i32>,
    Json(payload): Json<TermWrite>,
) -> Result<Json<TermResponse>, ApiError> {
    let term = terms::Entity::find_by_id(term_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Term not found"))?;

    let mut active: terms::ActiveModel = term.into();
    if payload.term_name.is_some() {
        active.term_name = Set(validated_name(&payload)?);
    }
    let updated = terms::Entity::update(active).exec(&state.db).await?;
    Ok(Json(TermResponse::from(updated)))
}

/// Delete a term
#[utoipa::path(
    delete,
    path = "/api/terms/{term_id}",
    responses(
        (status = 204, description = "Term deleted"),
        (status = 404, description = "Term not found")
    ),
    tag = "Terms"
)]
pub async fn delete_term(
    State(state): State<SharedState>,
    Path(term_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    terms::Entity::find_by_id(term_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Term not found"))?;
    terms::Entity::delete_by_id(term_id).exec(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}
