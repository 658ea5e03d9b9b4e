use crate::dtos::roles::{
    RoleCreate, RoleHistoryCreate, RoleHistoryQuery, RoleHistoryResponse, RoleResponse,
    RoleUpdate, UserRoleCreate, UserRoleQuery, UserRoleResponse, UserRoleUpdate,
};
use crate::error::ApiError;
use crate::pagination::{PageParams, fetch_page};
use crate::state::SharedState;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use database::entities::{colleges, departments, roles, user_role_history, user_roles, users};
use database::services::user_role::UserRoleService;
use sea_orm::{ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

/// List roles
#[utoipa::path(
    get,
    path = "/api/roles",
    params(PageParams),
    responses(
        (status = 200, description = "List of roles", body = [RoleResponse])
    ),
    tag = "Roles"
)]
pub async fn list_roles(
    State(state): State<SharedState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<RoleResponse>>, ApiError> {
    let rows = fetch_page(&state.db, roles::Entity::find(), &params).await?;
    Ok(Json(rows.into_iter().map(RoleResponse::from).collect()))
}

/// Create a role
#[utoipa::path(
    post,
    path = "/api/roles",
    request_body = RoleCreate,
    responses(
        (status = 201, description = "Role created", body = RoleResponse)
    ),
    tag = "Roles"
)]
pub async fn create_role(
    State(state): State<SharedState>,
    Json(payload): Json<RoleCreate>,
) -> Result<(StatusCode, Json<RoleResponse>), ApiError> {
    let row = roles::ActiveModel {
        role_id: sea_orm::ActiveValue::NotSet,
        role_name: Set(payload.role_name),
    };
    let role = roles::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

/// Get a role by id
#[utoipa::path(
    get,
    path = "/api/roles/{role_id}",
    responses(
        (status = 200, body = RoleResponse),
        (status = 404, description = "Role not found")
    ),
    tag = "Roles"
)]
pub async fn get_role(
    State(state): State<SharedState>,
    Path(role_id): Path<i64>,
) -> Result<Json<RoleResponse>, ApiError> {
    let role = roles::Entity::find_by_id(role_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Role not found"))?;
    Ok(Json(RoleResponse::from(role)))
}

/// Rename a role
#[utoipa::path(
    put,
    path = "/api/roles/{role_id}",
    request_body = RoleUpdate,
    responses(
        (status = 200, body = RoleResponse),
        (status = 404, description = "Role not found")
    ),
    tag = "Roles"
)]
pub async fn update_role(
    State(state): State<SharedState>,
    Path(role_id): Path<i64>,
    Json(payload): Json<RoleUpdate>,
) -> Result<Json<RoleResponse>, ApiError> {
    let role = roles::Entity::find_by_id(role_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Role not found"))?;

    let mut active: roles::ActiveModel = role.into();
    if let Some(role_name) = payload.role_name {
        active.role_name = Set(role_name);
    }
    let updated = roles::Entity::update(active).exec(&state.db).await?;
    Ok(Json(RoleResponse::from(updated)))
}

/// Delete a role
#[utoipa::path(
    delete,
    path = "/api/roles/{role_id}",
    responses(
        (status = 204, description = "Role deleted"),
        (status = 404, description = "Role not found")
    ),
    tag = "Roles"
)]
pub async fn delete_role(
    State(state): State<SharedState>,
    Path(role_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    roles::Entity::find_by_id(role_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("Role not found"))?;
    roles::Entity::delete_by_id(role_id).exec(&state.db).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List user-role assignments with optional filters
#[utoipa::path(
    get,
    path = "/api/user_roles",
    params(UserRoleQuery),
    responses(
        (status = 200, description = "List of assignments", body = [UserRoleResponse])
    ),
    tag = "Roles"
)]
pub async fn list_user_roles(
    State(state): State<SharedState>,
    Query(query): Query<UserRoleQuery>,
) -> Result<Json<Vec<UserRoleResponse>>, ApiError> {
    let rows = UserRoleService::list(&state.db, query.user_id, query.role_id).await?;
    Ok(Json(rows.into_iter().map(UserRoleResponse::from).collect()))
}

/// Assign a role to a user
#[utoipa::path(
    post,
    path = "/api/user_roles",
    request_body = UserRoleCreate,
    responses(
        (status = 201, description = "Assignment created", body = UserRoleResponse),
        (status = 400, description = "Unknown user, role, college, or department")
    ),
    tag = "Roles"
)]
pub async fn create_user_role(
    State(state): State<SharedState>,
    Json(payload): Json<UserRoleCreate>,
) -> Result<(StatusCode, Json<UserRoleResponse>), ApiError> {
    users::Entity::find_by_id(payload.user_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("User not found"))?;
    roles::Entity::find_by_id(payload.role_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::bad_request("Role not found"))?;
    if let Some(college_id) = &payload.college_id {
        colleges::Entity::find_by_id(college_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("College not found"))?;
    }
    if let Some(department_id) = &payload.department_id {
        departments::Entity::find_by_id(department_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Department not found"))?;
    }

    // created_at defaults to now when the client does not send one
    let created_at = payload
        .created_at
        .unwrap_or_else(|| Utc::now().fixed_offset());

    let row = user_roles::ActiveModel {
        user_role_id: sea_orm::ActiveValue::NotSet,
        role_id: Set(Some(payload.role_id)),
        user_id: Set(payload.user_id),
        college_id: Set(payload.college_id),
        department_id: Set(payload.department_id),
        created_at: Set(Some(created_at)),
        date_start: Set(payload.date_start),
        date_ended: Set(payload.date_ended),
        status: Set(payload.status),
    };
    let created = user_roles::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;

    let hydrated = UserRoleService::get(&state.db, created.user_role_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User role not found"))?;
    Ok((StatusCode::CREATED, Json(UserRoleResponse::from(hydrated))))
}

/// Get a user-role assignment by id
#[utoipa::path(
    get,
    path = "/api/user_roles/{user_role_id}",
    responses(
        (status = 200, body = UserRoleResponse),
        (status = 404, description = "User role not found")
    ),
    tag = "Roles"
)]
pub async fn get_user_role(
    State(state): State<SharedState>,
    Path(user_role_id): Path<i32>,
) -> Result<Json<UserRoleResponse>, ApiError> {
    let row = UserRoleService::get(&state.db, user_role_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User role not found"))?;
    Ok(Json(UserRoleResponse::from(row)))
}

/// Update a user-role assignment
#[utoipa::path(
    put,
    path = "/api/user_roles/{user_role_id}",
    request_body = UserRoleUpdate,
    responses(
        (status = 200, body = UserRoleResponse),
        (status = 404, description = "User role not found")
    ),
    tag = "Roles"
)]
pub async fn update_user_role(
    State(state): State<SharedState>,
    Path(user_role_id): Path<i32>,
    Json(payload): Json<UserRoleUpdate>,
) -> Result<Json<UserRoleResponse>, ApiError> {
    let row = user_roles::Entity::find_by_id(user_role_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User role not found"))?;

    let mut active: user_roles::ActiveModel = row.into();
    if let Some(user_id) = payload.user_id {
        users::Entity::find_by_id(user_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("User not found"))?;
        active.user_id = Set(user_id);
    }
    if let Some(role_id) = payload.role_id {
        roles::Entity::find_by_id(role_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Role not found"))?;
        active.role_id = Set(Some(role_id));
    }
    if let Some(college_id) = payload.college_id {
        colleges::Entity::find_by_id(&college_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("College not found"))?;
        active.college_id = Set(Some(college_id));
    }
    if let Some(department_id) = payload.department_id {
        departments::Entity::find_by_id(&department_id)
            .one(&state.db)
            .await?
            .ok_or_else(|| ApiError::bad_request("Department not found"))?;
        active.department_id = Set(Some(department_id));
    }
    if let Some(status) = payload.status {
        active.status = Set(Some(status));
    }
    if let Some(date_start) = payload.date_start {
        active.date_start = Set(Some(date_start));
    }
    if let Some(date_ended) = payload.date_ended {
        active.date_ended = Set(Some(date_ended));
    }
    let updated = user_roles::Entity::update(active).exec(&state.db).await?;

    let hydrated = UserRoleService::get(&state.db, updated.user_role_id)
        .await?
        .ok_or_else(|| ApiError::not_found("User role not found"))?;
    Ok(Json(UserRoleResponse::from(hydrated)))
}

/// Delete a user-role assignment
#[utoipa::path(
    delete,
    path = "/api/user_roles/{user_role_id}",
    responses(
        (status = 204, description = "User role deleted"),
        (status = 404, description = "User role not found")
    ),
    tag = "Roles"
)]
pub async fn delete_user_role(
    State(state): State<SharedState>,
    Path(user_role_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    user_roles::Entity::find_by_id(user_role_id)
        .one(&state.db)
        .await?
        .ok_or_else(|| ApiError::not_found("User role not found"))?;
    user_roles::Entity::delete_by_id(user_role_id)
        .exec(&state.db)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List role-change history, most recent change first
#[utoipa::path(
    get,
    path = "/api/role_history",
    params(RoleHistoryQuery),
    responses(
        (status = 200, description = "History rows", body = [RoleHistoryResponse])
    ),
    tag = "Roles"
)]
pub async fn list_role_history(
    State(state): State<SharedState>,
    Query(query): Query<RoleHistoryQuery>,
) -> Result<Json<Vec<RoleHistoryResponse>>, ApiError> {
    let mut select = user_role_history::Entity::find()
        .order_by_desc(user_role_history::Column::ChangedAt);
    if let Some(user_role_id) = query.user_role_id {
        select = select.filter(user_role_history::Column::UserRoleId.eq(user_role_id));
    }
    let rows = select.all(&state.db).await?;
    Ok(Json(rows.into_iter().map(RoleHistoryResponse::from).collect()))
}

/// Append a history row. History has no update or delete.
#[utoipa::path(
    post,
    path = "/api/role_history",
    request_body = RoleHistoryCreate,
    responses(
        (status = 201, description = "History row appended", body = RoleHistoryResponse)
    ),
    tag = "Roles"
)]
pub async fn create_role_history(
    State(state): State<SharedState>,
    Json(payload): Json<RoleHistoryCreate>,
) -> Result<(StatusCode, Json<RoleHistoryResponse>), ApiError> {
    let row = user_role_history::ActiveModel {
        history_id: sea_orm::ActiveValue::NotSet,
        user_role_id: Set(payload.user_role_id),
        user_id: Set(payload.user_id),
        role_id: Set(payload.role_id),
        college_id: Set(payload.college_id),
        department_id: Set(payload.department_id),
        date_start: Set(payload.date_start),
        date_ended: Set(payload.date_ended),
        status: Set(payload.status),
        action: Set(payload.action),
        changed_at: Set(Some(Utc::now().fixed_offset())),
    };
    let created = user_role_history::Entity::insert(row)
        .exec_with_returning(&state.db)
        .await?;
    Ok((StatusCode::CREATED, Json(RoleHistoryResponse::from(created))))
}
