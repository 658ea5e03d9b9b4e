use crate::dtos::roles::UserRoleSummary;
use crate::dtos::users::{AccountCreate, AccountResponse, UserResponse, UserUpdate};
use crate::error::ApiError;
use crate::pagination::{PageParams, fetch_page};
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use database::entities::users;
use database::services::user_role::UserRoleService;
use sea_orm::{ActiveValue::Set, EntityTrait, QueryOrder};

async fn user_or_404(state: &SharedState, user_id: i32) -> Result<users::Model, ApiError> {
    users::Entity::find_by_id(user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))
}

fn apply_update(active: &mut users::ActiveModel, payload: UserUpdate) {
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(middle_name) = payload.middle_name {
        active.middle_name = Set(Some(middle_name));
    }
    if let Some(email_address) = payload.email_address {
        active.email_address = Set(email_address);
    }
    if let Some(contact_number) = payload.contact_number {
        active.contact_number = Set(Some(contact_number));
    }
    if let Some(avatar_url) = payload.avatar_url {
        active.avatar_url = Set(Some(avatar_url));
    }
    if let Some(status) = payload.status {
        active.status = Set(Some(status));
    }
}

/// List users (profile shape)
#[utoipa::path(
    get,
    path = "/api/users",
    params(PageParams),
    responses(
        (status = 200, description = "List of users", body = [UserResponse])
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let rows = fetch_page(&state.db, users::Entity::find(), &params).await?;
    Ok(Json(rows.into_iter().map(UserResponse::from).collect()))
}

/// Get a user profile
#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<SharedState>,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user_or_404(&state, user_id).await?;
    Ok(Json(UserResponse::from(user)))
}

/// Update a user profile
#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    request_body = UserUpdate,
    responses(
        (status = 200, body = UserResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<SharedState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = user_or_404(&state, user_id).await?;
    let mut active: users::ActiveModel = user.into();
    apply_update(&mut active, payload);
    let updated = users::Entity::update(active).exec(&state.db).await?;
    Ok(Json(UserResponse::from(updated)))
}

/// List the roles of one user
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/roles",
    responses(
        (status = 200, description = "Roles of the user", body = [UserRoleSummary])
    ),
    tag = "Users"
)]
pub async fn get_user_roles(
    State(state): State<SharedState>,
    Path(user_id): Path<i32>,
) -> Result<Json<Vec<UserRoleSummary>>, ApiError> {
    let rows = UserRoleService::list(&state.db, Some(user_id), None).await?;
    Ok(Json(rows.into_iter().map(UserRoleSummary::from).collect()))
}

/// List accounts, most recently created first
#[utoipa::path(
    get,
    path = "/api/accounts",
    params(PageParams),
    responses(
        (status = 200, description = "List of accounts", body = [AccountResponse])
    ),
    tag = "Users"
)]
pub async fn list_accounts(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let query = users::Entity::find().order_by_desc(users::Column::CreatedAt);
    let rows = fetch_page(&state.db, query, &params).await?;
    Ok(Json(rows.into_iter().map(AccountResponse::from).collect()))
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/accounts",
    request_body = AccountCreate,
    responses(
        (status = 201, description = "Account created", body = AccountResponse)
    ),
    tag = "Users"
)]
pub async fn create_account(
    State(state): State<SharedState>,
    Json(payload): Json<AccountCreate>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let row = users::ActiveModel {
        user_id: Set(payload.user_id),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        middle_name: Set(payload.middle_name),
        email_address: Set(payload.email_address),
        contact_number: Set(payload.contact_number),
        avatar_url: Set(payload.avatar_url),
        status: Set(payload.status),
        created_at: Set(Some(Utc::now().fixed_offset())),
        password_hash: Set(None),
    };
    users::Entity::insert(row).exec(&state.db).await?;
    let created = user_or_404(&state, payload.user_id).await?;
    Ok((StatusCode::CREATED, Json(AccountResponse::from(created))))
}

/// Get an account
#[utoipa::path(
    get,
    path = "/api/accounts/{user_id}",
    responses(
        (status = 200, body = AccountResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn get_account(
    State(state): State<SharedState>,
    Path(user_id): Path<i32>,
) -> Result<Json<AccountResponse>, ApiError> {
    let user = user_or_404(&state, user_id).await?;
    Ok(Json(AccountResponse::from(user)))
}

/// Update an account
#[utoipa::path(
    put,
    path = "/api/accounts/{user_id}",
    request_body = UserUpdate,
    responses(
        (status = 200, body = AccountResponse),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn update_account(
    State(state): State<SharedState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UserUpdate>,
) -> Result<Json<AccountResponse>, ApiError> {
    let user = user_or_404(&state, user_id).await?;
    let mut active: users::ActiveModel = user.into();
    apply_update(&mut active, payload);
    let updated = users::Entity::update(active).exec(&state.db).await?;
    Ok(Json(AccountResponse::from(updated)))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/accounts/{user_id}",
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "User not found")
    ),
    tag = "Users"
)]
pub async fn delete_account(
    State(state): State<SharedState>,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    user_or_404(&state, user_id).await?;
    users::Entity::delete_by_id(user_id).exec(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}
